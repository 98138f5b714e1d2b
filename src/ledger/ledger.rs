use chrono::NaiveDate;

use super::{
    range::FiscalRange,
    record::{ChannelMode, ChannelSales, DailyRecord},
};
use crate::errors::{LedgerError, Result};

/// One record per calendar day of a [`FiscalRange`], sorted by date.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    range: FiscalRange,
    mode: ChannelMode,
    records: Vec<DailyRecord>,
}

impl Ledger {
    /// Zero-filled ledger covering every day in `range`.
    pub fn bootstrap(range: FiscalRange, mode: ChannelMode) -> Self {
        let records = range
            .days()
            .map(|date| DailyRecord::zeroed(date, mode))
            .collect();
        Self {
            range,
            mode,
            records,
        }
    }

    /// Rebuilds a ledger from persisted rows, rejecting anything that breaks
    /// the one-record-per-day shape.
    pub fn from_records(
        range: FiscalRange,
        mode: ChannelMode,
        records: Vec<DailyRecord>,
    ) -> Result<Self> {
        let expected = range.total_days() as usize;
        if records.len() != expected {
            return Err(LedgerError::Storage(format!(
                "expected {} daily records for {}..={}, found {}",
                expected,
                range.start,
                range.end,
                records.len()
            )));
        }
        for (record, date) in records.iter().zip(range.days()) {
            if record.date != date {
                return Err(LedgerError::Storage(format!(
                    "expected record for {}, found {}",
                    date, record.date
                )));
            }
            if record.sales.mode() != mode {
                return Err(LedgerError::Storage(format!(
                    "record for {} uses {} channels in a {} ledger",
                    record.date,
                    record.sales.mode(),
                    mode
                )));
            }
        }
        Ok(Self {
            range,
            mode,
            records,
        })
    }

    pub fn range(&self) -> FiscalRange {
        self.range
    }

    pub fn mode(&self) -> ChannelMode {
        self.mode
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.index_of(date).map(|idx| &self.records[idx])
    }

    pub fn record_for_day(&self, day: u32) -> Option<&DailyRecord> {
        self.range.date_for_day(day).and_then(|date| self.record(date))
    }

    /// Replaces the sales recorded for `date`.
    pub fn set_sales(&mut self, date: NaiveDate, sales: ChannelSales) -> Result<()> {
        if sales.mode() != self.mode {
            return Err(LedgerError::InvalidInput(format!(
                "{} sales cannot be stored in a {} ledger",
                sales.mode(),
                self.mode
            )));
        }
        let idx = self.index_of(date).ok_or_else(|| {
            LedgerError::Range(format!(
                "{} is outside {}..={}",
                date, self.range.start, self.range.end
            ))
        })?;
        self.records[idx].sales = sales;
        Ok(())
    }

    fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.range.day_of(date).map(|day| day as usize - 1)
    }
}
