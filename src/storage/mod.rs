//! Persistence collaborators: the storage contract and the JSON file backend.

pub mod json_backend;

use std::path::PathBuf;

use crate::errors::LedgerError;
use crate::ledger::Ledger;

pub use json_backend::JsonStorage;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Trait that abstracts interaction with the persistence layer. The core
/// never depends on how storage happens, only on round-tripping the
/// serializable ledger snapshot.
pub trait StorageBackend: Send + Sync {
    fn save(&self, ledger: &Ledger, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Ledger>;
    fn ledger_path(&self, name: &str) -> PathBuf;
}
