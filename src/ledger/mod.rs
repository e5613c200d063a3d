//! Ledger domain models, persistence-friendly types, and pure computation.

pub mod account;
pub mod balance;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod metrics;
pub mod person;
pub mod transaction;

pub use account::{Account, AccountDraft, AccountKind, AccountPatch};
pub use balance::{account_balance, accounts_by_kind, person_balance};
pub use ledger::{Ledger, CURRENT_SCHEMA_VERSION};
pub use metrics::{dashboard_metrics, DashboardMetrics};
pub use person::Person;
pub use transaction::{Split, SplitDraft, Transaction, TransactionDraft, TransactionPatch};
