pub mod employee_service;
pub mod partner_service;
pub mod report_service;

pub use employee_service::EmployeeService;
pub use partner_service::PartnerService;
pub use report_service::{
    ComparisonReport, DegenerateReport, Delta, MonthlyReport, MonthlyReportPolicy,
    ReportOutcome, ReportService, Trend, YearlyReport,
};

#[cfg(test)]
mod tests;
