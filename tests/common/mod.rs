#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use sales_pace::{
    config::GoalConfig,
    core::{services::SalesService, time::FixedClock},
    ledger::{ChannelMode, FiscalRange},
    storage::CsvLedgerStore,
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub const ANNUAL_TARGET: f64 = 50_000.0;

/// Isolated ledger location for one test.
pub struct TestEnv {
    pub ledger_path: PathBuf,
    pub range: FiscalRange,
    pub mode: ChannelMode,
}

impl TestEnv {
    pub fn store(&self) -> CsvLedgerStore {
        CsvLedgerStore::new(self.ledger_path.clone(), self.range, self.mode)
    }

    pub fn goal(&self) -> GoalConfig {
        GoalConfig::new(ANNUAL_TARGET, self.range).expect("valid goal")
    }

    pub fn service(&self, today: NaiveDate) -> SalesService {
        SalesService::new(
            Box::new(self.store()),
            Box::new(FixedClock::new(today)),
            self.goal(),
        )
    }

    pub fn raw(&self) -> Vec<u8> {
        std::fs::read(&self.ledger_path).expect("read ledger file")
    }
}

/// Creates an environment backed by a unique directory, covering calendar 2025.
pub fn setup_test_env(mode: ChannelMode) -> TestEnv {
    let temp = TempDir::new().expect("create temp dir");
    let ledger_path = temp.path().join("vendas_diarias.csv");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    TestEnv {
        ledger_path,
        range: FiscalRange::calendar_year(2025).expect("valid range"),
        mode,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
