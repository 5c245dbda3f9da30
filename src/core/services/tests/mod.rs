
use chrono::{DateTime, TimeZone, Utc};

use crate::core::clock::FixedClock;

pub(super) fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()
}

pub(super) fn clock() -> FixedClock {
    FixedClock::new(at(2024, 6, 15))
}
