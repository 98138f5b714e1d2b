//! Ledger domain model: one sales record per day of the configured range.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod range;
pub mod record;

pub use ledger::Ledger;
pub use range::FiscalRange;
pub use record::{ChannelMode, ChannelSales, DailyRecord};
