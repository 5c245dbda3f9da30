use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::BookError;

/// Calendar month key used by the financial history, written as `YYYY-MM`.
///
/// Ordering follows the calendar, which matches the lexical order of the
/// textual form because the year is always four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, BookError> {
        if !(1..=9999).contains(&year) {
            return Err(BookError::validation(format!(
                "year {year} is outside 0001-9999"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(BookError::validation(format!(
                "month {month} is outside 1-12"
            )));
        }
        Ok(Self { year, month })
    }

    /// Month that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// True when the `YYYY-MM` form starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.to_string().starts_with(prefix)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = BookError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || BookError::validation(format!("month `{raw}` must use the YYYY-MM format"));
        let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for Month {
    type Error = BookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(value: Month) -> Self {
        value.to_string()
    }
}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn required_text(field: &str, value: &str) -> Result<String, BookError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(BookError::validation(format!("{field} is required")))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Rejects NaN and infinite amounts.
pub(crate) fn finite_amount(field: &str, value: f64) -> Result<f64, BookError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BookError::validation(format!("{field} must be a finite number")))
    }
}
