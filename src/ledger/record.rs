use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// How daily sales are broken down. Chosen once per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChannelMode {
    Single,
    #[default]
    Split,
}

impl ChannelMode {
    pub fn channel_count(self) -> usize {
        match self {
            ChannelMode::Single => 1,
            ChannelMode::Split => 2,
        }
    }

    pub fn zero(self) -> ChannelSales {
        match self {
            ChannelMode::Single => ChannelSales::Single(0.0),
            ChannelMode::Split => ChannelSales::Split {
                physical: 0.0,
                digital: 0.0,
            },
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChannelMode::Single => "single",
            ChannelMode::Split => "split",
        };
        f.write_str(label)
    }
}

/// Sales amounts recorded for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelSales {
    Single(f64),
    Split { physical: f64, digital: f64 },
}

impl ChannelSales {
    /// Builds sales for `mode` from raw amounts, in column order.
    pub fn from_amounts(mode: ChannelMode, amounts: &[f64]) -> Result<Self> {
        if amounts.len() != mode.channel_count() {
            return Err(LedgerError::InvalidInput(format!(
                "{} mode expects {} amount(s), got {}",
                mode,
                mode.channel_count(),
                amounts.len()
            )));
        }
        for amount in amounts {
            validate_amount(*amount)?;
        }
        let sales = match mode {
            ChannelMode::Single => ChannelSales::Single(amounts[0]),
            ChannelMode::Split => ChannelSales::Split {
                physical: amounts[0],
                digital: amounts[1],
            },
        };
        if !sales.total().is_finite() {
            return Err(LedgerError::InvalidInput(format!(
                "daily total of {:?} overflows",
                amounts
            )));
        }
        Ok(sales)
    }

    pub fn split(physical: f64, digital: f64) -> Result<Self> {
        Self::from_amounts(ChannelMode::Split, &[physical, digital])
    }

    pub fn single(amount: f64) -> Result<Self> {
        Self::from_amounts(ChannelMode::Single, &[amount])
    }

    pub fn mode(&self) -> ChannelMode {
        match self {
            ChannelSales::Single(_) => ChannelMode::Single,
            ChannelSales::Split { .. } => ChannelMode::Split,
        }
    }

    pub fn total(&self) -> f64 {
        match *self {
            ChannelSales::Single(amount) => amount,
            ChannelSales::Split { physical, digital } => physical + digital,
        }
    }
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(LedgerError::InvalidInput(format!(
            "amount {} is not a finite number",
            amount
        )));
    }
    if amount < 0.0 {
        return Err(LedgerError::InvalidInput(format!(
            "amount {} is negative",
            amount
        )));
    }
    Ok(())
}

/// One calendar day of the ledger. The total is always derived from the channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub sales: ChannelSales,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, sales: ChannelSales) -> Self {
        Self { date, sales }
    }

    pub fn zeroed(date: NaiveDate, mode: ChannelMode) -> Self {
        Self::new(date, mode.zero())
    }

    pub fn total(&self) -> f64 {
        self.sales.total()
    }
}
