use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::{Account, AccountDraft, AccountPatch, Ledger};

use super::ServiceResult;

/// Validated CRUD helpers for ledger accounts.
pub struct AccountService;

impl AccountService {
    /// Adds a new account, assigning identity and timestamps, and returns the
    /// full record.
    pub fn add(ledger: &mut Ledger, draft: AccountDraft) -> Account {
        let account = Account::from_draft(draft);
        ledger.add_account(account.clone());
        account
    }

    /// Merges the present patch fields into the account identified by `id`.
    pub fn update(ledger: &mut Ledger, id: Uuid, patch: AccountPatch) -> ServiceResult<()> {
        let account = ledger
            .account_mut(id)
            .ok_or_else(|| LedgerError::not_found("account", id))?;
        account.apply_patch(patch);
        ledger.touch();
        Ok(())
    }

    /// Removes the account identified by `id`. Fails if any transaction split
    /// still references the account; the collection is left unchanged.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        let splits = ledger.dependent_split_count(id);
        if splits > 0 {
            return Err(LedgerError::DependentTransactions {
                account_id: id,
                splits,
            });
        }
        let before = ledger.accounts.len();
        ledger.accounts.retain(|account| account.id != id);
        if ledger.accounts.len() == before {
            return Err(LedgerError::not_found("account", id));
        }
        ledger.touch();
        Ok(())
    }

    /// User-visible accounts; the equity balancer stays hidden.
    pub fn list(ledger: &Ledger) -> Vec<&Account> {
        ledger.listed_accounts()
    }
}
