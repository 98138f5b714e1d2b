pub mod csv_backend;

use crate::{errors::Result, ledger::Ledger};

/// Durable home of the ledger. Every operation loads a fresh copy and writes
/// back a full snapshot; nothing is cached between calls.
pub trait LedgerStore: Send + Sync {
    /// Reads the stored ledger, bootstrapping and persisting a zero-filled one
    /// when nothing has been stored yet.
    fn load(&self) -> Result<Ledger>;
    /// Replaces the stored ledger with `ledger`.
    fn save(&self, ledger: &Ledger) -> Result<()>;
}

pub use csv_backend::{header_for, CsvLedgerStore};
