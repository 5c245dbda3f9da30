use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{finance::FinancialResult, Month};

/// Stored calculation for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: Uuid,
    pub month: Month,
    /// When the record was created or last replaced.
    pub date: DateTime<Utc>,
    pub data: FinancialResult,
}

impl HistoryRecord {
    pub fn new(month: Month, data: FinancialResult, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            month,
            date,
            data,
        }
    }
}

