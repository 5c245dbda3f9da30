//! Application root that owns the stores and writes them back after every change.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::Config;
use crate::core::services::{
    ComparisonReport, EmployeeService, MonthlyReport, MonthlyReportPolicy, PartnerService,
    ReportOutcome, ReportService, YearlyReport,
};
use crate::core::{Clock, FinancialCalculator};
use crate::domain::{
    EmployeeChanges, HistoryRecord, Month, MonthlyInput, NewEmployee, NewPartner, PartnerChanges,
};
use crate::errors::Result;
use crate::storage::{JsonStorage, StorageBackend};
use crate::store::{self, History, Roster, ShareSummary};

/// Operation a caller may want to confirm before running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    RemoveEmployee(Uuid),
    RemovePartner(Uuid),
    RemoveRecord(Uuid),
    ClearHistory,
    RecordMonth(Month),
}

/// Facade that coordinates the roster, the history, and persistence.
///
/// Successful mutations persist the affected blob before returning; rejected
/// ones leave both memory and storage untouched.
pub struct Bookkeeper {
    roster: Roster,
    history: History,
    storage: Box<dyn StorageBackend>,
    clock: Arc<dyn Clock>,
    policy: MonthlyReportPolicy,
}

impl Bookkeeper {
    /// Loads the three blobs from `storage`.
    pub fn open(storage: Box<dyn StorageBackend>, clock: Arc<dyn Clock>) -> Result<Self> {
        let roster = Roster::new(storage.load_employees()?, storage.load_partners()?);
        let history = History::new(storage.load_history()?);

        for warning in store::load_warnings(&roster, &history) {
            tracing::warn!(%warning, "inconsistent data loaded");
        }
        tracing::info!(
            employees = roster.employees.len(),
            partners = roster.partners.len(),
            records = history.len(),
            "bookkeeping data loaded"
        );

        Ok(Self {
            roster,
            history,
            storage,
            clock,
            policy: MonthlyReportPolicy::default(),
        })
    }

    /// Opens JSON storage in the configured data directory and applies the
    /// configured report policy.
    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let storage = JsonStorage::from_config(config)?;
        Ok(Self::open(Box::new(storage), clock)?.with_policy(config.monthly_report_policy))
    }

    pub fn with_policy(mut self, policy: MonthlyReportPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn policy(&self) -> MonthlyReportPolicy {
        self.policy
    }

    /// Month the clock currently falls in; the default target for new input.
    pub fn current_month(&self) -> Month {
        Month::containing(self.clock.today())
    }

    pub fn share_summary(&self) -> ShareSummary {
        self.roster.share_summary()
    }

    pub fn add_employee(&mut self, draft: NewEmployee) -> Result<Uuid> {
        let id = rejected(
            "add employee",
            EmployeeService::add(&mut self.roster, draft, self.clock.as_ref()),
        )?;
        self.persist_employees()?;
        tracing::info!(%id, "employee added");
        Ok(id)
    }

    /// Returns whether the salary changed.
    pub fn edit_employee(&mut self, id: Uuid, changes: EmployeeChanges) -> Result<bool> {
        let salary_changed = rejected(
            "edit employee",
            EmployeeService::edit(&mut self.roster, id, changes, self.clock.as_ref()),
        )?;
        self.persist_employees()?;
        tracing::info!(%id, salary_changed, "employee updated");
        Ok(salary_changed)
    }

    pub fn remove_employee(&mut self, id: Uuid) -> Result<()> {
        rejected("remove employee", EmployeeService::remove(&mut self.roster, id))?;
        self.persist_employees()?;
        tracing::info!(%id, "employee removed");
        Ok(())
    }

    pub fn add_partner(&mut self, draft: NewPartner) -> Result<Uuid> {
        let id = rejected("add partner", PartnerService::add(&mut self.roster, draft))?;
        self.persist_partners()?;
        tracing::info!(%id, allocated = self.roster.total_share(), "partner added");
        Ok(id)
    }

    pub fn edit_partner(&mut self, id: Uuid, changes: PartnerChanges) -> Result<()> {
        rejected("edit partner", PartnerService::edit(&mut self.roster, id, changes))?;
        self.persist_partners()?;
        tracing::info!(%id, allocated = self.roster.total_share(), "partner updated");
        Ok(())
    }

    pub fn remove_partner(&mut self, id: Uuid) -> Result<()> {
        rejected("remove partner", PartnerService::remove(&mut self.roster, id))?;
        self.persist_partners()?;
        tracing::info!(%id, "partner removed");
        Ok(())
    }

    /// Computes `input` against the current roster and stores it as the record
    /// for `input.month`, replacing any earlier record for that month.
    pub fn record_month(&mut self, input: MonthlyInput) -> Result<HistoryRecord> {
        rejected("record month", input.validate())?;
        let result =
            FinancialCalculator::compute(&input, &self.roster.employees, &self.roster.partners);
        let replaced = self.history.would_replace(input.month);
        let record = self
            .history
            .upsert(input.month, result, self.clock.as_ref())
            .clone();
        self.persist_history()?;

        if record.data.is_loss() {
            tracing::warn!(
                month = %record.month,
                net_profit = record.data.net_profit,
                "month closed with a loss"
            );
        }
        tracing::info!(month = %record.month, replaced, "month recorded");
        Ok(record)
    }

    pub fn remove_record(&mut self, id: Uuid) -> Result<HistoryRecord> {
        let record = rejected("remove history record", self.history.remove(id))?;
        self.persist_history()?;
        tracing::info!(%id, month = %record.month, "history record removed");
        Ok(record)
    }

    /// Deletes every history record and returns how many were removed.
    pub fn clear_history(&mut self) -> Result<usize> {
        let removed = self.history.clear();
        self.persist_history()?;
        tracing::info!(removed, "history cleared");
        Ok(removed)
    }

    /// Whether running `action` now would discard stored data. Callers use this
    /// to decide if a confirmation step is needed.
    pub fn destroys_data(&self, action: &PendingAction) -> bool {
        match action {
            PendingAction::RemoveEmployee(id) => self.roster.employee(*id).is_some(),
            PendingAction::RemovePartner(id) => self.roster.partner(*id).is_some(),
            PendingAction::RemoveRecord(id) => self.history.get(*id).is_some(),
            PendingAction::ClearHistory => !self.history.is_empty(),
            PendingAction::RecordMonth(month) => self.history.would_replace(*month),
        }
    }

    pub fn monthly_report(&self) -> ReportOutcome<MonthlyReport> {
        ReportService::monthly(&self.history, self.policy)
    }

    pub fn yearly_report(&self, year: i32) -> ReportOutcome<YearlyReport> {
        ReportService::yearly(&self.history, year)
    }

    pub fn current_year_report(&self) -> ReportOutcome<YearlyReport> {
        ReportService::yearly_current(&self.history, self.clock.as_ref())
    }

    pub fn comparison_report(&self) -> ReportOutcome<ComparisonReport> {
        ReportService::comparison(&self.history)
    }

    fn persist_employees(&self) -> Result<()> {
        self.storage.save_employees(&self.roster.employees)
    }

    fn persist_partners(&self) -> Result<()> {
        self.storage.save_partners(&self.roster.partners)
    }

    fn persist_history(&self) -> Result<()> {
        self.storage.save_history(self.history.records())
    }
}

/// Logs a rejected operation before handing the result back.
fn rejected<T>(action: &'static str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        tracing::warn!(action, error = %err, "operation rejected");
    }
    result
}
