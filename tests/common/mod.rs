#![allow(dead_code)]

use std::sync::Arc;

use bookkeeping_core::{
    config::ConfigManager,
    core::FixedClock,
    domain::{Month, MonthlyInput, NewEmployee, NewPartner},
    storage::JsonStorage,
    Bookkeeper,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

/// Isolated data directory plus the clock every bookkeeper in the test shares.
pub struct TestEnv {
    pub dir: TempDir,
    pub clock: Arc<FixedClock>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
            clock: Arc::new(FixedClock::new(at(2024, 2, 15))),
        }
    }

    pub fn storage(&self) -> JsonStorage {
        JsonStorage::new(Some(self.dir.path().join("data"))).expect("create json storage")
    }

    /// Opens a fresh bookkeeper over the same directory, as a restart would.
    pub fn open(&self) -> Bookkeeper {
        Bookkeeper::open(Box::new(self.storage()), self.clock.clone()).expect("open bookkeeper")
    }

    pub fn config_manager(&self) -> ConfigManager {
        ConfigManager::with_base_dir(self.dir.path().to_path_buf()).expect("config manager")
    }
}

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub fn month(year: i32, month: u32) -> Month {
    Month::new(year, month).expect("valid month")
}

pub fn employee(name: &str, salary: f64) -> NewEmployee {
    NewEmployee {
        name: name.into(),
        position: "Staff".into(),
        salary,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 2),
    }
}

pub fn partner(name: &str, share: f64, personal_expenses: f64) -> NewPartner {
    NewPartner {
        name: name.into(),
        share,
        personal_expenses,
        ..NewPartner::default()
    }
}

pub fn input(month: Month, revenue: f64, other: f64) -> MonthlyInput {
    MonthlyInput {
        monthly_revenue: revenue,
        water_bill: 100.0,
        electricity_bill: 200.0,
        wifi_bill: 50.0,
        other_expenses: other,
        ..MonthlyInput::new(month)
    }
}
