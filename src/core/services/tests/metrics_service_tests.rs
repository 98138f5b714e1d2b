use chrono::{Duration, NaiveDate};

use crate::config::GoalConfig;
use crate::core::services::{MetricsService, DEFAULT_WINDOW_DAYS};
use crate::ledger::{ChannelMode, ChannelSales, FiscalRange, Ledger};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn goal(target: f64) -> GoalConfig {
    GoalConfig::new(target, FiscalRange::calendar_year(2025).unwrap()).unwrap()
}

fn ledger_with(entries: &[(NaiveDate, f64, f64)]) -> Ledger {
    let mut ledger = Ledger::bootstrap(FiscalRange::calendar_year(2025).unwrap(), ChannelMode::Split);
    for (day, physical, digital) in entries {
        ledger
            .set_sales(*day, ChannelSales::split(*physical, *digital).unwrap())
            .unwrap();
    }
    ledger
}

#[test]
fn cumulative_total_sums_every_day() {
    let ledger = ledger_with(&[
        (date(2025, 1, 1), 100.0, 50.0),
        (date(2025, 6, 30), 25.0, 0.0),
        (date(2025, 12, 31), 0.0, 25.0),
    ]);
    assert_eq!(MetricsService::cumulative_total(&ledger), 200.0);
}

#[test]
fn percent_of_goal_is_unclamped() {
    let ledger = ledger_with(&[(date(2025, 2, 1), 1000.0, 500.0)]);
    assert_eq!(MetricsService::percent_of_goal(&ledger, &goal(1000.0)), 150.0);

    let empty = ledger_with(&[]);
    assert_eq!(MetricsService::percent_of_goal(&empty, &goal(1000.0)), 0.0);
}

#[test]
fn progress_split_goes_negative_past_goal() {
    let ledger = ledger_with(&[(date(2025, 2, 1), 1200.0, 0.0)]);
    let metrics = MetricsService::compute(&ledger, &goal(1000.0), date(2025, 3, 1));
    let split = metrics.progress_split();
    assert_eq!(split.achieved, 120.0);
    assert!(split.remaining < 0.0);
    assert_eq!(split.achieved + split.remaining, 100.0);
}

#[test]
fn pace_spreads_remaining_goal_over_remaining_days() {
    let ledger = ledger_with(&[(date(2025, 1, 5), 300.0, 200.0)]);
    let today = date(2025, 12, 22);
    assert_eq!(MetricsService::days_remaining(&goal(1000.0), today), 10);
    assert_eq!(
        MetricsService::remaining_daily_pace(&ledger, &goal(1000.0), today),
        50.0
    );
}

#[test]
fn pace_is_zero_after_range_end() {
    let ledger = ledger_with(&[(date(2025, 1, 5), 10.0, 0.0)]);
    let after = date(2026, 1, 1);
    assert_eq!(MetricsService::days_remaining(&goal(1000.0), after), 0);
    assert_eq!(
        MetricsService::remaining_daily_pace(&ledger, &goal(1000.0), after),
        0.0
    );
    assert_eq!(
        MetricsService::remaining_daily_pace(&ledger, &goal(1000.0), date(2026, 3, 1)),
        0.0
    );
}

#[test]
fn pace_turns_negative_once_goal_is_exceeded() {
    let ledger = ledger_with(&[(date(2025, 1, 5), 1500.0, 0.0)]);
    let pace = MetricsService::remaining_daily_pace(&ledger, &goal(1000.0), date(2025, 12, 22));
    assert_eq!(pace, -50.0);
}

#[test]
fn pace_on_last_day_uses_single_remaining_day() {
    let ledger = ledger_with(&[(date(2025, 1, 5), 400.0, 0.0)]);
    let pace = MetricsService::remaining_daily_pace(&ledger, &goal(1000.0), date(2025, 12, 31));
    assert_eq!(pace, 600.0);
}

#[test]
fn trailing_window_covers_last_seven_days() {
    let ledger = ledger_with(&[]);
    let today = date(2025, 1, 10);
    let window = MetricsService::trailing_window(&ledger, today, DEFAULT_WINDOW_DAYS);
    let dates: Vec<_> = window.iter().map(|r| r.date).collect();
    let expected: Vec<_> = (4..=10).map(|d| date(2025, 1, d)).collect();
    assert_eq!(dates, expected);
}

#[test]
fn trailing_window_omits_days_before_range() {
    let ledger = ledger_with(&[(date(2025, 1, 2), 7.0, 0.0)]);
    let window = MetricsService::trailing_window(&ledger, date(2025, 1, 3), 7);
    assert_eq!(window.len(), 3);
    assert_eq!(window[0].date, date(2025, 1, 1));
    assert_eq!(window[1].total(), 7.0);
}

#[test]
fn trailing_window_after_range_end_keeps_only_present_days() {
    let ledger = ledger_with(&[]);
    let today = date(2025, 12, 31) + Duration::days(3);
    let window = MetricsService::trailing_window(&ledger, today, 7);
    let dates: Vec<_> = window.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2025, 12, 28),
            date(2025, 12, 29),
            date(2025, 12, 30),
            date(2025, 12, 31)
        ]
    );
}

#[test]
fn oversized_window_reaches_range_start() {
    let ledger = ledger_with(&[(date(2025, 1, 1), 3.0, 0.0)]);
    let window = MetricsService::trailing_window(&ledger, date(2025, 1, 10), u32::MAX);
    let dates: Vec<_> = window.iter().map(|r| r.date).collect();
    let expected: Vec<_> = (1..=10).map(|d| date(2025, 1, d)).collect();
    assert_eq!(dates, expected);
    assert_eq!(window[0].total(), 3.0);
}

#[test]
fn zero_width_window_is_empty() {
    let ledger = ledger_with(&[]);
    assert!(MetricsService::trailing_window(&ledger, date(2025, 5, 5), 0).is_empty());
}
