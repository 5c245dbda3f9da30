//! Calculation, validated mutations, reporting, and the [`Bookkeeper`] facade.

pub mod bookkeeper;
pub mod calculator;
pub mod clock;
pub mod services;

pub use bookkeeper::{Bookkeeper, PendingAction};
pub use calculator::FinancialCalculator;
pub use clock::{Clock, FixedClock, SystemClock};
