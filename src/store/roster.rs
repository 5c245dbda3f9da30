use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Employee, Partner};

/// Upper bound for the sum of partner shares, in percent.
pub const SHARE_LIMIT: f64 = 100.0;

/// Current employees and partners. Entries keep insertion order and are addressed
/// by id, never by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub partners: Vec<Partner>,
}

/// Allocated versus remaining partner shares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShareSummary {
    pub allocated: f64,
    pub remaining: f64,
}

impl Roster {
    pub fn new(employees: Vec<Employee>, partners: Vec<Partner>) -> Self {
        Self {
            employees,
            partners,
        }
    }

    pub fn add_employee(&mut self, employee: Employee) -> Uuid {
        let id = employee.id;
        self.employees.push(employee);
        id
    }

    pub fn employee(&self, id: Uuid) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    pub fn employee_mut(&mut self, id: Uuid) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|employee| employee.id == id)
    }

    /// Removes and returns the employee with `id`.
    pub fn take_employee(&mut self, id: Uuid) -> Option<Employee> {
        let index = self.employees.iter().position(|employee| employee.id == id)?;
        Some(self.employees.remove(index))
    }

    pub fn add_partner(&mut self, partner: Partner) -> Uuid {
        let id = partner.id;
        self.partners.push(partner);
        id
    }

    pub fn partner(&self, id: Uuid) -> Option<&Partner> {
        self.partners.iter().find(|partner| partner.id == id)
    }

    pub fn partner_mut(&mut self, id: Uuid) -> Option<&mut Partner> {
        self.partners.iter_mut().find(|partner| partner.id == id)
    }

    /// Removes and returns the partner with `id`.
    pub fn take_partner(&mut self, id: Uuid) -> Option<Partner> {
        let index = self.partners.iter().position(|partner| partner.id == id)?;
        Some(self.partners.remove(index))
    }

    pub fn total_salaries(&self) -> f64 {
        self.employees.iter().map(Employee::salary).sum()
    }

    pub fn total_share(&self) -> f64 {
        self.partners.iter().map(|partner| partner.share).sum()
    }

    /// Sum of every partner's share except the one identified by `id`.
    pub fn total_share_excluding(&self, id: Uuid) -> f64 {
        self.partners
            .iter()
            .filter(|partner| partner.id != id)
            .map(|partner| partner.share)
            .sum()
    }

    /// Total the roster would hold if partner `id` had `share`, summed in roster
    /// order so it matches [`Roster::total_share`] after the edit.
    pub fn total_share_with(&self, id: Uuid, share: f64) -> f64 {
        self.partners
            .iter()
            .map(|partner| if partner.id == id { share } else { partner.share })
            .sum()
    }

    pub fn remaining_share(&self) -> f64 {
        SHARE_LIMIT - self.total_share()
    }

    pub fn share_summary(&self) -> ShareSummary {
        let allocated = self.total_share();
        ShareSummary {
            allocated,
            remaining: SHARE_LIMIT - allocated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_summary_reports_remaining() {
        let mut roster = Roster::default();
        roster.add_partner(Partner::new("Karim", 60.0));
        roster.add_partner(Partner::new("Sara", 15.5));

        let summary = roster.share_summary();
        assert_eq!(summary.allocated, 75.5);
        assert_eq!(summary.remaining, 24.5);
    }

    #[test]
    fn total_share_excluding_skips_partner() {
        let mut roster = Roster::default();
        let first = roster.add_partner(Partner::new("Karim", 60.0));
        roster.add_partner(Partner::new("Sara", 30.0));
        assert_eq!(roster.total_share_excluding(first), 30.0);
    }

    #[test]
    fn take_removes_by_id_regardless_of_position() {
        let mut roster = Roster::default();
        let first = roster.add_partner(Partner::new("A", 10.0));
        let second = roster.add_partner(Partner::new("B", 20.0));
        let third = roster.add_partner(Partner::new("C", 30.0));

        assert_eq!(roster.take_partner(first).map(|p| p.name), Some("A".into()));
        assert_eq!(roster.partner(third).map(|p| p.share), Some(30.0));
        assert_eq!(roster.partner(second).map(|p| p.share), Some(20.0));
        assert!(roster.take_partner(first).is_none());
    }

    #[test]
    fn total_share_with_replaces_in_place() {
        let mut roster = Roster::default();
        roster.add_partner(Partner::new("Karim", 60.0));
        let sara = roster.add_partner(Partner::new("Sara", 30.0));
        roster.add_partner(Partner::new("Omar", 5.0));

        assert_eq!(roster.total_share_with(sara, 35.0), 100.0);
        assert_eq!(roster.total_share_with(uuid::Uuid::new_v4(), 35.0), 95.0);
    }
}
