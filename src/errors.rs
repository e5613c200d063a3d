use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("account {account_id} is referenced by {splits} transaction split(s)")]
    DependentTransactions { account_id: Uuid, splits: usize },
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("ledger schema v{found} is newer than supported v{supported}")]
    UnsupportedSchema { found: u8, supported: u8 },
}

impl LedgerError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }
}
