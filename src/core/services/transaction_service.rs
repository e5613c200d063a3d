//! Business logic helpers for managing transactions.

use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::{Ledger, Transaction, TransactionDraft, TransactionPatch};

use super::ServiceResult;

/// Validated CRUD helpers for ledger transactions.
///
/// Splits are deliberately not required to sum to zero: unbalanced entries
/// against the equity balancer are how manual corrections are recorded.
pub struct TransactionService;

impl TransactionService {
    /// Records a new transaction and returns the full record, with split ids
    /// assigned and each split's `transaction_id` back-filled.
    pub fn add(ledger: &mut Ledger, draft: TransactionDraft) -> Transaction {
        let transaction = Transaction::from_draft(draft);
        ledger.add_transaction(transaction.clone());
        transaction
    }

    /// Merges the present patch fields into the transaction identified by
    /// `id`, refreshing its update stamp.
    pub fn update(ledger: &mut Ledger, id: Uuid, patch: TransactionPatch) -> ServiceResult<()> {
        let txn = ledger
            .transaction_mut(id)
            .ok_or_else(|| LedgerError::not_found("transaction", id))?;
        txn.apply_patch(patch);
        ledger.touch();
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed
    /// instance. No referential guard; nothing references a transaction.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Transaction> {
        let index = ledger
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or_else(|| LedgerError::not_found("transaction", id))?;
        let removed = ledger.transactions.remove(index);
        ledger.touch();
        Ok(removed)
    }

    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions.iter().collect()
    }
}
