#![doc(test(attr(deny(warnings))))]

//! Bookkeeping Core holds the roster, monthly profit calculation, and month-by-month
//! history primitives behind a small-business bookkeeping tool.
//!
//! The crate is presentation-free: callers hand it typed inputs and receive
//! [`domain::FinancialResult`] and [`domain::HistoryRecord`] values back.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod utils;

pub use crate::core::{Bookkeeper, Clock, FinancialCalculator, PendingAction, SystemClock};
pub use crate::errors::{BookError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let build = utils::build_info::current();
        tracing::info!(
            version = build.version,
            git = build.git_hash,
            profile = build.profile,
            "Bookkeeping Core tracing initialized."
        );
    });
}
