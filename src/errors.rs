use std::result::Result as StdResult;

use thiserror::Error;

/// Error type that captures ledger, storage and configuration failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The requested date or day-of-year lies outside the configured range.
    #[error("Out of range: {0}")]
    Range(String),
    /// Durable read/write failure or a malformed ledger file.
    #[error("Storage error: {0}")]
    Storage(String),
    /// Goal or range misconfiguration detected at startup.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Negative, non-finite or mis-shaped sales amounts.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LedgerError {
    pub fn is_range(&self) -> bool {
        matches!(self, LedgerError::Range(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, LedgerError::Storage(_))
    }
}

pub type Result<T> = StdResult<T, LedgerError>;

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}
