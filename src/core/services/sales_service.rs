//! Load/mutate/save round trips against the durable ledger.

use chrono::NaiveDate;
use tracing::{info, warn};

use super::{
    dashboard_service::{DashboardService, DashboardView},
    metrics_service::{MetricsService, SalesMetrics},
};
use crate::{
    config::GoalConfig,
    core::time::Clock,
    currency::DateLocale,
    errors::{LedgerError, Result},
    ledger::{ChannelSales, Ledger},
    storage::LedgerStore,
};

/// Entry point for every ledger operation. Holds no ledger state of its own:
/// each call loads from the store, optionally mutates and saves, and returns
/// the snapshot it worked on.
pub struct SalesService {
    store: Box<dyn LedgerStore>,
    clock: Box<dyn Clock>,
    goal: GoalConfig,
}

impl SalesService {
    pub fn new(store: Box<dyn LedgerStore>, clock: Box<dyn Clock>, goal: GoalConfig) -> Self {
        Self { store, clock, goal }
    }

    pub fn goal(&self) -> &GoalConfig {
        &self.goal
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn load_ledger(&self) -> Result<Ledger> {
        self.store.load()
    }

    /// Records `sales` for the clock's current date.
    pub fn insert_today(&self, sales: ChannelSales) -> Result<Ledger> {
        let today = self.clock.today();
        if !self.goal.range().contains(today) {
            warn!("rejected insert: today ({}) is outside the ledger range", today);
            let range = self.goal.range();
            return Err(LedgerError::Range(format!(
                "today ({}) is outside {}..={}",
                today, range.start, range.end
            )));
        }
        let ledger = self.replace_day(today, sales)?;
        info!("sales inserted for {}", today);
        Ok(ledger)
    }

    /// Records `sales` for the 1-based `day` of the configured range.
    pub fn update_day(&self, day: u32, sales: ChannelSales) -> Result<Ledger> {
        let date = match self.goal.range().date_for_day(day) {
            Some(date) => date,
            None => {
                warn!("rejected update: day {} is outside the ledger range", day);
                return Err(LedgerError::Range(format!(
                    "day {} is outside 1..={}",
                    day,
                    self.goal.range().total_days()
                )));
            }
        };
        let ledger = self.replace_day(date, sales)?;
        info!("sales updated for day {} ({})", day, date);
        Ok(ledger)
    }

    pub fn metrics(&self, ledger: &Ledger) -> SalesMetrics {
        MetricsService::compute(ledger, &self.goal, self.clock.today())
    }

    /// Fresh load followed by the full dashboard derivation.
    pub fn dashboard(&self, locale: DateLocale) -> Result<DashboardView> {
        let ledger = self.store.load()?;
        Ok(DashboardService::build(
            &ledger,
            &self.goal,
            self.clock.today(),
            locale,
        ))
    }

    fn replace_day(&self, date: NaiveDate, sales: ChannelSales) -> Result<Ledger> {
        let mut ledger = self.store.load()?;
        ledger.set_sales(date, sales)?;
        self.store.save(&ledger)?;
        Ok(ledger)
    }
}
