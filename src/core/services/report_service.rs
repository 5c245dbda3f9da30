//! Monthly, yearly, and month-over-month summaries derived from the history.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Clock;
use crate::domain::{HistoryRecord, Margin, Month};
use crate::store::{History, HistoryOrder};

/// Which record the monthly report describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyReportPolicy {
    /// The record with the greatest month.
    #[default]
    LatestMonth,
    /// The record stored last, regardless of its month.
    LastInserted,
}

/// Why a report has nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegenerateReport {
    NoHistory,
    NoRecordsForYear(i32),
    NotEnoughHistory { required: usize, available: usize },
}

impl fmt::Display for DegenerateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateReport::NoHistory => f.write_str("No data available to build a report"),
            DegenerateReport::NoRecordsForYear(year) => {
                write!(f, "No data available for the year {year}")
            }
            DegenerateReport::NotEnoughHistory {
                required,
                available,
            } => write!(
                f,
                "At least {required} months of data are needed for a comparison ({available} available)"
            ),
        }
    }
}

/// A report or the explicit reason it is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportOutcome<T> {
    Ready(T),
    Empty(DegenerateReport),
}

impl<T> ReportOutcome<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, ReportOutcome::Empty(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ReportOutcome::Ready(report) => Some(report),
            ReportOutcome::Empty(_) => None,
        }
    }

    pub fn into_ready(self) -> Option<T> {
        match self {
            ReportOutcome::Ready(report) => Some(report),
            ReportOutcome::Empty(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub month: Month,
    pub revenue: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub margin: Margin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyReport {
    pub year: i32,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub total_profit: f64,
    pub months_included: usize,
    /// Months that contributed, oldest first.
    pub months: Vec<Month>,
}

/// Whether a change is good news for the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Improvement,
    Decline,
}

/// Change of one figure between two months.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub previous: f64,
    pub latest: f64,
    pub change: f64,
    pub trend: Trend,
}

impl Delta {
    /// Delta for figures where growth is good (revenue, profit).
    pub fn gain(previous: f64, latest: f64) -> Self {
        let change = latest - previous;
        let trend = if change >= 0.0 {
            Trend::Improvement
        } else {
            Trend::Decline
        };
        Self {
            previous,
            latest,
            change,
            trend,
        }
    }

    /// Delta for figures where shrinking is good (expenses).
    pub fn cost(previous: f64, latest: f64) -> Self {
        let change = latest - previous;
        let trend = if change <= 0.0 {
            Trend::Improvement
        } else {
            Trend::Decline
        };
        Self {
            previous,
            latest,
            change,
            trend,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub previous_month: Month,
    pub latest_month: Month,
    pub revenue: Delta,
    pub expenses: Delta,
    pub profit: Delta,
}

/// Stateless report builders over a [`History`] snapshot.
pub struct ReportService;

impl ReportService {
    pub fn monthly(history: &History, policy: MonthlyReportPolicy) -> ReportOutcome<MonthlyReport> {
        let record = match policy {
            MonthlyReportPolicy::LatestMonth => history.latest_by_month(),
            MonthlyReportPolicy::LastInserted => history.last_inserted(),
        };
        match record {
            Some(record) => ReportOutcome::Ready(Self::monthly_from(record)),
            None => ReportOutcome::Empty(DegenerateReport::NoHistory),
        }
    }

    pub fn yearly(history: &History, year: i32) -> ReportOutcome<YearlyReport> {
        let mut records = history.find_by_month_prefix(&format!("{year:04}"));
        if records.is_empty() {
            return ReportOutcome::Empty(DegenerateReport::NoRecordsForYear(year));
        }
        records.sort_by_key(|record| record.month);

        let total_revenue: f64 = records.iter().map(|record| record.data.monthly_revenue).sum();
        let total_expenses: f64 = records.iter().map(|record| record.data.total_expenses).sum();
        ReportOutcome::Ready(YearlyReport {
            year,
            total_revenue,
            total_expenses,
            total_profit: total_revenue - total_expenses,
            months_included: records.len(),
            months: records.iter().map(|record| record.month).collect(),
        })
    }

    /// Yearly report for the clock's current calendar year.
    pub fn yearly_current(history: &History, clock: &dyn Clock) -> ReportOutcome<YearlyReport> {
        Self::yearly(history, Month::containing(clock.today()).year())
    }

    /// Compares the two chronologically latest months.
    pub fn comparison(history: &History) -> ReportOutcome<ComparisonReport> {
        const REQUIRED: usize = 2;
        let sorted: Vec<&HistoryRecord> = history.list(HistoryOrder::MonthAsc).collect();
        let (previous, latest) = match sorted.as_slice() {
            [.., previous, latest] => (*previous, *latest),
            _ => {
                return ReportOutcome::Empty(DegenerateReport::NotEnoughHistory {
                    required: REQUIRED,
                    available: sorted.len(),
                })
            }
        };

        ReportOutcome::Ready(ComparisonReport {
            previous_month: previous.month,
            latest_month: latest.month,
            revenue: Delta::gain(previous.data.monthly_revenue, latest.data.monthly_revenue),
            expenses: Delta::cost(previous.data.total_expenses, latest.data.total_expenses),
            profit: Delta::gain(previous.data.net_profit, latest.data.net_profit),
        })
    }

    fn monthly_from(record: &HistoryRecord) -> MonthlyReport {
        MonthlyReport {
            month: record.month,
            revenue: record.data.monthly_revenue,
            total_expenses: record.data.total_expenses,
            net_profit: record.data.net_profit,
            margin: record.data.margin(),
        }
    }
}
