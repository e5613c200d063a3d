//! Service layer and the store facade that owns ledger state.

pub mod ledger_manager;
pub mod services;

pub use ledger_manager::{LedgerManager, LoadOutcome};
