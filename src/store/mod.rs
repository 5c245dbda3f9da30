//! Owned collections behind the bookkeeping workflow: the current roster and the
//! month-keyed financial history.

pub mod history;
pub mod roster;

pub use history::{History, HistoryOrder};
pub use roster::{Roster, ShareSummary, SHARE_LIMIT};

use std::collections::HashSet;

/// Detects inconsistencies in loaded data that the stores would never produce
/// themselves (hand-edited or truncated blobs).
pub fn load_warnings(roster: &Roster, history: &History) -> Vec<String> {
    let mut warnings = Vec::new();

    for employee in &roster.employees {
        if !employee.is_consistent() {
            warnings.push(format!(
                "employee {} salary does not match its salary history",
                employee.id
            ));
        }
    }
    let allocated = roster.total_share();
    if allocated > SHARE_LIMIT {
        warnings.push(format!(
            "partner shares total {allocated:.2}% which exceeds {SHARE_LIMIT}%"
        ));
    }

    let mut months = HashSet::new();
    for record in history.iter() {
        if !months.insert(record.month) {
            warnings.push(format!(
                "history holds more than one record for {}",
                record.month
            ));
        }
    }
    warnings
}
