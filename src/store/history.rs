use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::Clock;
use crate::domain::{FinancialResult, HistoryRecord, Month};
use crate::errors::{BookError, Result};

/// Ordering applied by [`History::list`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryOrder {
    /// Newest `date` first.
    #[default]
    RecencyDesc,
    /// Oldest `month` first.
    MonthAsc,
    /// Order in which records were stored.
    Insertion,
}

/// Financial history holding at most one record per month.
///
/// The backing vector keeps insertion order; upserting a month moves its
/// replacement to the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub fn new(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }

    /// Stores `data` for `month`, discarding any previous record for that month.
    pub fn upsert(
        &mut self,
        month: Month,
        data: FinancialResult,
        clock: &dyn Clock,
    ) -> &HistoryRecord {
        self.records.retain(|record| record.month != month);
        self.records.push(HistoryRecord::new(month, data, clock.now()));
        let last = self.records.len() - 1;
        &self.records[last]
    }

    pub fn remove(&mut self, id: Uuid) -> Result<HistoryRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| BookError::not_found("history record", id))?;
        Ok(self.records.remove(index))
    }

    /// Drops every record and returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    /// Records in the requested order. The returned iterator can be cloned to
    /// walk the same sequence again.
    pub fn list(&self, order: HistoryOrder) -> std::vec::IntoIter<&HistoryRecord> {
        let mut records: Vec<&HistoryRecord> = self.records.iter().collect();
        match order {
            HistoryOrder::RecencyDesc => records.sort_by_key(|record| Reverse(record.date)),
            HistoryOrder::MonthAsc => records.sort_by_key(|record| record.month),
            HistoryOrder::Insertion => {}
        }
        records.into_iter()
    }

    /// Records whose `YYYY-MM` key starts with `prefix`, typically a four-digit year.
    pub fn find_by_month_prefix(&self, prefix: &str) -> Vec<&HistoryRecord> {
        self.records
            .iter()
            .filter(|record| record.month.has_prefix(prefix))
            .collect()
    }

    pub fn by_month(&self, month: Month) -> Option<&HistoryRecord> {
        self.records.iter().find(|record| record.month == month)
    }

    pub fn get(&self, id: Uuid) -> Option<&HistoryRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Last record in storage order.
    pub fn last_inserted(&self) -> Option<&HistoryRecord> {
        self.records.last()
    }

    /// Record with the greatest month.
    pub fn latest_by_month(&self) -> Option<&HistoryRecord> {
        self.records.iter().max_by_key(|record| record.month)
    }

    /// True when upserting `month` would discard an existing record.
    pub fn would_replace(&self, month: Month) -> bool {
        self.by_month(month).is_some()
    }

    /// Records in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
