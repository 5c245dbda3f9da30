pub mod common;
pub mod employee;
pub mod finance;
pub mod history;
pub mod partner;

pub use common::Month;
pub use employee::{Employee, EmployeeChanges, NewEmployee, SalaryChange};
pub use finance::{ExpenseBreakdown, FinancialResult, Margin, MonthlyInput, PartnerProfit};
pub use history::HistoryRecord;
pub use partner::{NewPartner, Partner, PartnerChanges};
