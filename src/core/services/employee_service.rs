//! Business logic helpers for validated employee mutations.

use uuid::Uuid;

use crate::core::Clock;
use crate::domain::common::{finite_amount, required_text};
use crate::domain::{Employee, EmployeeChanges, NewEmployee};
use crate::errors::{BookError, Result};
use crate::store::Roster;

/// Provides validated mutations for [`Employee`] entries of a [`Roster`].
///
/// Every operation validates before touching the roster, so a rejected call
/// leaves it unchanged.
pub struct EmployeeService;

impl EmployeeService {
    /// Hires a new employee whose salary log starts with an "initial hire" entry.
    pub fn add(roster: &mut Roster, draft: NewEmployee, clock: &dyn Clock) -> Result<Uuid> {
        let name = required_text("employee name", &draft.name)?;
        let position = required_text("employee position", &draft.position)?;
        let salary = Self::validate_salary(draft.salary)?;
        let start_date = draft
            .start_date
            .ok_or_else(|| BookError::validation("employee start date is required"))?;

        let employee = Employee::hire(name, position, salary, start_date, clock.now());
        Ok(roster.add_employee(employee))
    }

    /// Overwrites name and position and, when the salary differs, appends a
    /// salary-history entry. Returns whether the salary changed.
    pub fn edit(
        roster: &mut Roster,
        id: Uuid,
        changes: EmployeeChanges,
        clock: &dyn Clock,
    ) -> Result<bool> {
        let name = required_text("employee name", &changes.name)?;
        let position = required_text("employee position", &changes.position)?;
        let salary = Self::validate_salary(changes.salary)?;

        let employee = roster
            .employee_mut(id)
            .ok_or_else(|| BookError::not_found("employee", id))?;
        employee.name = name;
        employee.position = position;
        Ok(employee.change_salary(salary, changes.reason.as_deref(), clock.now()))
    }

    /// Removes an employee. Stored history keeps its own copies.
    pub fn remove(roster: &mut Roster, id: Uuid) -> Result<Employee> {
        roster
            .take_employee(id)
            .ok_or_else(|| BookError::not_found("employee", id))
    }

    pub fn list(roster: &Roster) -> Vec<&Employee> {
        roster.employees.iter().collect()
    }

    fn validate_salary(salary: f64) -> Result<f64> {
        let salary = finite_amount("salary", salary)?;
        if salary > 0.0 {
            Ok(salary)
        } else {
            Err(BookError::validation("salary must be greater than zero"))
        }
    }
}
