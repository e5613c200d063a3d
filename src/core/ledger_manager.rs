use uuid::Uuid;

use crate::core::services::{AccountService, SummaryService, TransactionService};
use crate::errors::LedgerError;
use crate::ledger::{
    Account, AccountDraft, AccountPatch, DashboardMetrics, Ledger, Person, Transaction,
    TransactionDraft, TransactionPatch,
};
use crate::storage::StorageBackend;

/// Metadata describing the outcome of adopting persisted state.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// True when stored data was adopted, false when the manager fell back to
    /// a fresh default ledger.
    pub loaded: bool,
    pub warning: Option<String>,
}

/// Facade that owns the ledger state and coordinates services and
/// persistence.
///
/// Mutations run synchronously to completion; after each successful mutation
/// the ledger is persisted fire-and-forget. A persistence failure is logged
/// and never rolls back or fails the in-memory mutation.
pub struct LedgerManager {
    ledger: Ledger,
    name: String,
    storage: Box<dyn StorageBackend>,
}

impl LedgerManager {
    /// Creates a manager over a fresh default ledger.
    pub fn new(storage: Box<dyn StorageBackend>, name: impl Into<String>) -> Self {
        Self {
            ledger: Ledger::new(),
            name: name.into(),
            storage,
        }
    }

    /// Replaces the managed state with explicit seed data.
    pub fn init(&mut self, seed: Ledger) {
        self.ledger = seed;
    }

    /// Adopts the stored ledger when it is present and intact. Missing or
    /// malformed data fails closed: the manager keeps a fresh default ledger
    /// and reports the condition instead of crashing.
    pub fn load_or_default(
        storage: Box<dyn StorageBackend>,
        name: impl Into<String>,
    ) -> (Self, LoadOutcome) {
        let name = name.into();
        if !storage.ledger_path(&name).exists() {
            tracing::info!(ledger = %name, "no stored ledger, starting fresh");
            let outcome = LoadOutcome {
                loaded: false,
                warning: None,
            };
            return (Self::new(storage, name), outcome);
        }
        match storage.load(&name) {
            Ok(ledger) => {
                tracing::info!(
                    ledger = %name,
                    accounts = ledger.accounts.len(),
                    transactions = ledger.transactions.len(),
                    "loaded stored ledger"
                );
                let manager = Self {
                    ledger,
                    name,
                    storage,
                };
                (manager, LoadOutcome { loaded: true, warning: None })
            }
            Err(err) => {
                let warning = format!("stored ledger unreadable, starting fresh: {err}");
                tracing::warn!(ledger = %name, %err, "discarding corrupt ledger data");
                let outcome = LoadOutcome {
                    loaded: false,
                    warning: Some(warning),
                };
                (Self::new(storage, name), outcome)
            }
        }
    }

    // Mutations

    pub fn add_account(&mut self, draft: AccountDraft) -> Account {
        let account = AccountService::add(&mut self.ledger, draft);
        self.persist();
        account
    }

    pub fn update_account(&mut self, id: Uuid, patch: AccountPatch) -> Result<(), LedgerError> {
        AccountService::update(&mut self.ledger, id, patch)?;
        self.persist();
        Ok(())
    }

    pub fn delete_account(&mut self, id: Uuid) -> Result<(), LedgerError> {
        AccountService::remove(&mut self.ledger, id)?;
        self.persist();
        Ok(())
    }

    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Transaction {
        let transaction = TransactionService::add(&mut self.ledger, draft);
        self.persist();
        transaction
    }

    pub fn update_transaction(
        &mut self,
        id: Uuid,
        patch: TransactionPatch,
    ) -> Result<(), LedgerError> {
        TransactionService::update(&mut self.ledger, id, patch)?;
        self.persist();
        Ok(())
    }

    pub fn delete_transaction(&mut self, id: Uuid) -> Result<(), LedgerError> {
        TransactionService::remove(&mut self.ledger, id)?;
        self.persist();
        Ok(())
    }

    pub fn add_person(&mut self, person: Person) -> Uuid {
        let id = self.ledger.add_person(person);
        self.persist();
        id
    }

    // Read accessors

    pub fn accounts(&self) -> Vec<&Account> {
        AccountService::list(&self.ledger)
    }

    pub fn persons(&self) -> &[Person] {
        &self.ledger.persons
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    pub fn account_balance(&self, account_id: Uuid) -> i64 {
        SummaryService::account_balance(&self.ledger, account_id)
    }

    pub fn person_balance(&self, person_id: Uuid) -> i64 {
        SummaryService::person_balance(&self.ledger, person_id)
    }

    pub fn metrics(&self) -> DashboardMetrics {
        SummaryService::dashboard(&self.ledger)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit save, propagating any storage error to the caller.
    pub fn save(&self) -> Result<(), LedgerError> {
        self.storage.save(&self.ledger, &self.name)
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.ledger, &self.name) {
            tracing::warn!(ledger = %self.name, %err, "persistence failed, in-memory state kept");
        }
    }
}
