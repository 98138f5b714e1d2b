use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{config_file_in, ensure_dir, tmp_path},
    errors::{LedgerError, Result},
    ledger::{ChannelMode, FiscalRange},
};

const DEFAULT_ANNUAL_TARGET: f64 = 50_000.0;
const DEFAULT_YEAR: i32 = 2025;
const DEFAULT_LEDGER_FILE: &str = "vendas_diarias.csv";

/// Annual goal and the fiscal range it applies to. Validated once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalConfig {
    annual_target: f64,
    range: FiscalRange,
}

impl GoalConfig {
    pub fn new(annual_target: f64, range: FiscalRange) -> Result<Self> {
        if !annual_target.is_finite() || annual_target <= 0.0 {
            return Err(LedgerError::Config(format!(
                "annual target must be a positive amount, got {}",
                annual_target
            )));
        }
        Ok(Self {
            annual_target,
            range,
        })
    }

    pub fn annual_target(&self) -> f64 {
        self.annual_target
    }

    pub fn range(&self) -> FiscalRange {
        self.range
    }
}

/// Persisted deployment settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesConfig {
    pub annual_target: f64,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    #[serde(default)]
    pub channel_mode: ChannelMode,
    #[serde(default = "SalesConfig::default_currency")]
    pub currency: String,
    #[serde(default = "SalesConfig::default_locale")]
    pub locale: String,
    #[serde(default = "SalesConfig::default_ledger_file")]
    pub ledger_file: PathBuf,
}

impl Default for SalesConfig {
    fn default() -> Self {
        Self {
            annual_target: DEFAULT_ANNUAL_TARGET,
            range_start: NaiveDate::from_ymd_opt(DEFAULT_YEAR, 1, 1).unwrap_or_default(),
            range_end: NaiveDate::from_ymd_opt(DEFAULT_YEAR, 12, 31).unwrap_or_default(),
            channel_mode: ChannelMode::default(),
            currency: Self::default_currency(),
            locale: Self::default_locale(),
            ledger_file: Self::default_ledger_file(),
        }
    }
}

impl SalesConfig {
    pub fn default_currency() -> String {
        "BRL".into()
    }

    pub fn default_locale() -> String {
        "pt-BR".into()
    }

    pub fn default_ledger_file() -> PathBuf {
        PathBuf::from(DEFAULT_LEDGER_FILE)
    }

    /// Checks the goal and range, producing the immutable [`GoalConfig`].
    pub fn validate(&self) -> Result<GoalConfig> {
        let range = FiscalRange::new(self.range_start, self.range_end)?;
        GoalConfig::new(self.annual_target, range)
    }

    /// Ledger file location; relative paths resolve against `base`.
    pub fn ledger_path(&self, base: &Path) -> PathBuf {
        if self.ledger_file.is_absolute() {
            self.ledger_file.clone()
        } else {
            base.join(&self.ledger_file)
        }
    }
}

/// Loads and saves [`SalesConfig`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn with_base_dir(base: &Path) -> Result<Self> {
        ensure_dir(base)?;
        Ok(Self::new(config_file_in(base)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config file, falling back to defaults when none exists.
    pub fn load(&self) -> Result<SalesConfig> {
        let present = self.path.try_exists().map_err(|err| {
            LedgerError::Config(format!("cannot access {}: {}", self.path.display(), err))
        })?;
        if !present {
            return Ok(SalesConfig::default());
        }
        let data = fs::read_to_string(&self.path).map_err(|err| {
            LedgerError::Config(format!("cannot read {}: {}", self.path.display(), err))
        })?;
        serde_json::from_str(&data).map_err(|err| {
            LedgerError::Config(format!("cannot parse {}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &SalesConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
