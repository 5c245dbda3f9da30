use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reason recorded for the first salary entry of every employee.
pub const INITIAL_HIRE_REASON: &str = "initial hire";
/// Reason recorded when a salary edit does not supply one.
pub const DEFAULT_CHANGE_REASON: &str = "salary change";

/// One entry of an employee's append-only salary log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryChange {
    pub salary: f64,
    pub date: DateTime<Utc>,
    pub reason: String,
}

/// Employee on the current roster.
///
/// `salary` always mirrors the most recent [`SalaryChange`]; both are only
/// reachable through [`Employee::change_salary`] once the employee exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    salary: f64,
    pub start_date: NaiveDate,
    salary_history: Vec<SalaryChange>,
}

impl Employee {
    /// Creates an employee whose salary log starts with the hiring salary.
    pub fn hire(
        name: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
        start_date: NaiveDate,
        hired_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position: position.into(),
            salary,
            start_date,
            salary_history: vec![SalaryChange {
                salary,
                date: hired_at,
                reason: INITIAL_HIRE_REASON.into(),
            }],
        }
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn salary_history(&self) -> &[SalaryChange] {
        &self.salary_history
    }

    /// Appends a salary entry when `salary` differs from the current one.
    ///
    /// Returns `true` when the log grew.
    pub fn change_salary(
        &mut self,
        salary: f64,
        reason: Option<&str>,
        at: DateTime<Utc>,
    ) -> bool {
        if salary == self.salary {
            return false;
        }
        let reason = reason
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
            .unwrap_or(DEFAULT_CHANGE_REASON);
        self.salary = salary;
        self.salary_history.push(SalaryChange {
            salary,
            date: at,
            reason: reason.to_string(),
        });
        true
    }

    /// True when the salary log is non-empty and ends with the current salary.
    pub fn is_consistent(&self) -> bool {
        self.salary_history
            .last()
            .map_or(false, |entry| entry.salary == self.salary)
    }
}

/// Input for hiring a new employee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub salary: f64,
    pub start_date: Option<NaiveDate>,
}

/// Changeset applied when editing an employee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeChanges {
    pub name: String,
    pub position: String,
    pub salary: f64,
    pub reason: Option<String>,
}
