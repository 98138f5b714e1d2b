use chrono::NaiveDate;

use super::metrics_service::{MetricsService, ProgressSplit, SalesMetrics};
use crate::{
    config::GoalConfig,
    currency::{format_long_date, DateLocale},
    ledger::Ledger,
};

/// One bar pair of the trailing-window chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaceBar {
    pub date: NaiveDate,
    pub pace: f64,
    pub actual: f64,
}

/// Everything the presentation layer renders for one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub today: NaiveDate,
    pub date_label: String,
    pub annual_target: f64,
    pub metrics: SalesMetrics,
    pub progress: ProgressSplit,
    pub daily_series: Vec<(NaiveDate, f64)>,
    pub pace_bars: Vec<PaceBar>,
}

pub struct DashboardService;

impl DashboardService {
    pub fn build(
        ledger: &Ledger,
        goal: &GoalConfig,
        today: NaiveDate,
        locale: DateLocale,
    ) -> DashboardView {
        let metrics = MetricsService::compute(ledger, goal, today);
        let daily_series = ledger
            .records()
            .iter()
            .map(|record| (record.date, record.total()))
            .collect();
        let pace_bars = metrics
            .trailing_window
            .iter()
            .map(|record| PaceBar {
                date: record.date,
                pace: metrics.remaining_daily_pace,
                actual: record.total(),
            })
            .collect();
        DashboardView {
            today,
            date_label: format_long_date(locale, today),
            annual_target: goal.annual_target(),
            progress: metrics.progress_split(),
            metrics,
            daily_series,
            pace_bars,
        }
    }
}
