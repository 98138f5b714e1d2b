//! Derived goal-pace figures computed from a [`Ledger`] snapshot.

use chrono::{Duration, NaiveDate};

use crate::{
    config::GoalConfig,
    ledger::{DailyRecord, Ledger},
};

/// Days covered by the trailing window when callers do not pick a size.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Progress toward the annual goal as a two-slice split summing to 100.
///
/// Neither slice is clamped: once sales pass the goal `remaining` goes negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSplit {
    pub achieved: f64,
    pub remaining: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesMetrics {
    pub cumulative_total: f64,
    pub percent_of_goal: f64,
    pub remaining_daily_pace: f64,
    pub trailing_window: Vec<DailyRecord>,
}

impl SalesMetrics {
    pub fn progress_split(&self) -> ProgressSplit {
        ProgressSplit {
            achieved: self.percent_of_goal,
            remaining: 100.0 - self.percent_of_goal,
        }
    }
}

/// Stateless metric helpers that operate over [`Ledger`] snapshots.
pub struct MetricsService;

impl MetricsService {
    pub fn cumulative_total(ledger: &Ledger) -> f64 {
        ledger.records().iter().map(DailyRecord::total).sum()
    }

    pub fn percent_of_goal(ledger: &Ledger, goal: &GoalConfig) -> f64 {
        Self::cumulative_total(ledger) / goal.annual_target() * 100.0
    }

    /// Days from `today` through the end of the range, both inclusive.
    pub fn days_remaining(goal: &GoalConfig, today: NaiveDate) -> i64 {
        (goal.range().end - today).num_days() + 1
    }

    /// Average daily sales still needed to reach the target. Zero once the
    /// range has ended; negative when the target has already been passed.
    pub fn remaining_daily_pace(ledger: &Ledger, goal: &GoalConfig, today: NaiveDate) -> f64 {
        let days_remaining = Self::days_remaining(goal, today);
        if days_remaining <= 0 {
            return 0.0;
        }
        let remaining_goal = goal.annual_target() - Self::cumulative_total(ledger);
        remaining_goal / days_remaining as f64
    }

    /// Records dated within the `window_days` ending at `today`, ascending.
    /// Days outside the ledger's range are omitted rather than zero-filled.
    pub fn trailing_window(ledger: &Ledger, today: NaiveDate, window_days: u32) -> Vec<DailyRecord> {
        if window_days == 0 {
            return Vec::new();
        }
        let first = today
            .checked_sub_signed(Duration::days(i64::from(window_days) - 1))
            .unwrap_or(NaiveDate::MIN);
        ledger
            .records()
            .iter()
            .filter(|record| first <= record.date && record.date <= today)
            .copied()
            .collect()
    }

    pub fn compute(ledger: &Ledger, goal: &GoalConfig, today: NaiveDate) -> SalesMetrics {
        SalesMetrics {
            cumulative_total: Self::cumulative_total(ledger),
            percent_of_goal: Self::percent_of_goal(ledger, goal),
            remaining_daily_pace: Self::remaining_daily_pace(ledger, goal, today),
            trailing_window: Self::trailing_window(ledger, today, DEFAULT_WINDOW_DAYS),
        }
    }
}
