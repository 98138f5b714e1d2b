#![doc(test(attr(deny(warnings))))]

//! Sales Pace keeps one sales record per day of a fiscal year and derives
//! progress toward an annual target: cumulative total, percent of goal,
//! the daily pace still required and a trailing seven-day window.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Sales Pace tracing initialized.");
    });
}
