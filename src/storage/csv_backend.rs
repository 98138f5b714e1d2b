use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use tracing::{debug, info, warn};

use super::LedgerStore;
use crate::{
    core::utils::{ensure_dir, tmp_path},
    errors::{LedgerError, Result},
    ledger::{ChannelMode, ChannelSales, DailyRecord, FiscalRange, Ledger},
};

pub const DATE_COLUMN: &str = "Date";
pub const SINGLE_SALES_COLUMN: &str = "Vendas";
pub const PHYSICAL_COLUMN: &str = "Vendas Produtos Físicos";
pub const DIGITAL_COLUMN: &str = "Vendas Produtos Digitais";
pub const TOTAL_COLUMN: &str = "Total Vendas";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TOTAL_TOLERANCE: f64 = 1e-6;

/// Column layout for `mode`, header row included in every file.
pub fn header_for(mode: ChannelMode) -> &'static [&'static str] {
    match mode {
        ChannelMode::Single => &[DATE_COLUMN, SINGLE_SALES_COLUMN],
        ChannelMode::Split => &[DATE_COLUMN, PHYSICAL_COLUMN, DIGITAL_COLUMN, TOTAL_COLUMN],
    }
}

/// Ledger persisted as a single CSV file, rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct CsvLedgerStore {
    path: PathBuf,
    range: FiscalRange,
    mode: ChannelMode,
}

impl CsvLedgerStore {
    pub fn new(path: impl Into<PathBuf>, range: FiscalRange, mode: ChannelMode) -> Self {
        Self {
            path: path.into(),
            range,
            mode,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> ChannelMode {
        self.mode
    }

    fn read_ledger(&self) -> Result<Ledger> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::Headers)
            .from_path(&self.path)?;

        let headers = reader.headers()?.clone();
        let expected = header_for(self.mode);
        if !headers.iter().eq(expected.iter().copied()) {
            return Err(LedgerError::Storage(format!(
                "{}: header {:?} does not match the {} layout {:?}",
                self.path.display(),
                headers.iter().collect::<Vec<_>>(),
                self.mode,
                expected
            )));
        }

        let mut records = Vec::with_capacity(self.range.total_days() as usize);
        for (idx, row) in reader.records().enumerate() {
            // Header occupies line 1.
            let line = idx + 2;
            let row = row?;
            let record = parse_row(&row, self.mode).map_err(|reason| {
                warn!("rejecting {} line {}: {}", self.path.display(), line, reason);
                LedgerError::Storage(format!(
                    "{} line {}: {}",
                    self.path.display(),
                    line,
                    reason
                ))
            })?;
            records.push(record);
        }
        Ledger::from_records(self.range, self.mode, records)
    }

    fn write_ledger(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let tmp = tmp_path(&self.path);
        let mut writer = WriterBuilder::new().has_headers(false).from_path(&tmp)?;
        writer.write_record(header_for(ledger.mode()))?;
        for record in ledger.records() {
            writer.write_record(encode_row(record))?;
        }
        writer.flush()?;
        drop(writer);
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl LedgerStore for CsvLedgerStore {
    fn load(&self) -> Result<Ledger> {
        if !self.path.try_exists()? {
            let ledger = Ledger::bootstrap(self.range, self.mode);
            self.save(&ledger)?;
            info!(
                "bootstrapped {} ledger with {} zeroed days at {}",
                self.mode,
                ledger.len(),
                self.path.display()
            );
            return Ok(ledger);
        }
        let ledger = self.read_ledger()?;
        debug!("loaded {} records from {}", ledger.len(), self.path.display());
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        if ledger.mode() != self.mode || ledger.range() != self.range {
            return Err(LedgerError::Storage(format!(
                "ledger ({} {}..={}) does not match store ({} {}..={})",
                ledger.mode(),
                ledger.range().start,
                ledger.range().end,
                self.mode,
                self.range.start,
                self.range.end
            )));
        }
        self.write_ledger(ledger)?;
        debug!("saved {} records to {}", ledger.len(), self.path.display());
        Ok(())
    }
}

fn encode_row(record: &DailyRecord) -> Vec<String> {
    let mut row = vec![record.date.format(DATE_FORMAT).to_string()];
    match record.sales {
        ChannelSales::Single(amount) => row.push(amount.to_string()),
        ChannelSales::Split { physical, digital } => {
            row.push(physical.to_string());
            row.push(digital.to_string());
            row.push(record.total().to_string());
        }
    }
    row
}

fn parse_row(row: &StringRecord, mode: ChannelMode) -> std::result::Result<DailyRecord, String> {
    let width = header_for(mode).len();
    if row.len() != width {
        return Err(format!("expected {} columns, found {}", width, row.len()));
    }
    let raw_date = row.get(0).unwrap_or_default();
    let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
        .map_err(|err| format!("invalid date `{}`: {}", raw_date, err))?;

    let amounts = (1..=mode.channel_count())
        .map(|col| parse_amount(row.get(col).unwrap_or_default()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let sales = ChannelSales::from_amounts(mode, &amounts).map_err(|err| err.to_string())?;

    if mode == ChannelMode::Split {
        let stored_total = parse_amount(row.get(3).unwrap_or_default())?;
        if (stored_total - sales.total()).abs() > TOTAL_TOLERANCE {
            return Err(format!(
                "total {} does not equal channel sum {} for {}",
                stored_total,
                sales.total(),
                date
            ));
        }
    }
    Ok(DailyRecord::new(date, sales))
}

fn parse_amount(raw: &str) -> std::result::Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|_| format!("`{}` is not a numeric amount", raw))
}
