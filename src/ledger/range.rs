use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// Inclusive calendar range covered by a ledger, usually one fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FiscalRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(LedgerError::Config(format!(
                "range end {} precedes range start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Calendar year range `YYYY-01-01..=YYYY-12-31`.
    pub fn calendar_year(year: i32) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| LedgerError::Config(format!("invalid year {}", year)))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| LedgerError::Config(format!("invalid year {}", year)))?;
        Self::new(start, end)
    }

    pub fn total_days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1) as u32
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Resolves a 1-based day ordinal to its date.
    pub fn date_for_day(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.total_days() {
            return None;
        }
        Some(self.start + Duration::days(i64::from(day) - 1))
    }

    /// 1-based ordinal of `date` within the range.
    pub fn day_of(&self, date: NaiveDate) -> Option<u32> {
        if !self.contains(date) {
            return None;
        }
        Some((date - self.start).num_days() as u32 + 1)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.total_days() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn calendar_year_counts_leap_days() {
        assert_eq!(FiscalRange::calendar_year(2025).unwrap().total_days(), 365);
        assert_eq!(FiscalRange::calendar_year(2024).unwrap().total_days(), 366);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = FiscalRange::new(date(2025, 12, 31), date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn single_day_range_is_allowed() {
        let range = FiscalRange::new(date(2025, 3, 1), date(2025, 3, 1)).unwrap();
        assert_eq!(range.total_days(), 1);
        assert_eq!(range.date_for_day(1), Some(date(2025, 3, 1)));
    }

    #[test]
    fn day_ordinals_are_one_based() {
        let range = FiscalRange::calendar_year(2025).unwrap();
        assert_eq!(range.date_for_day(0), None);
        assert_eq!(range.date_for_day(1), Some(date(2025, 1, 1)));
        assert_eq!(range.date_for_day(365), Some(date(2025, 12, 31)));
        assert_eq!(range.date_for_day(366), None);
        assert_eq!(range.day_of(date(2025, 2, 1)), Some(32));
        assert_eq!(range.day_of(date(2026, 1, 1)), None);
    }

    #[test]
    fn days_iterates_whole_range() {
        let range = FiscalRange::new(date(2025, 2, 27), date(2025, 3, 2)).unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(
            days,
            vec![
                date(2025, 2, 27),
                date(2025, 2, 28),
                date(2025, 3, 1),
                date(2025, 3, 2)
            ]
        );
    }
}
