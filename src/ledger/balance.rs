//! Pure balance computation over the transaction list.
//!
//! These functions do no existence validation: a split pointing at an unknown
//! account or person still counts toward the sum. Validation happens at write
//! time in the service layer, not here.

use uuid::Uuid;

use super::account::{Account, AccountKind};
use super::transaction::Transaction;

/// Sums every split amount attributed to `account_id` across all
/// transactions. Unknown accounts simply have a zero balance.
pub fn account_balance(account_id: Uuid, transactions: &[Transaction]) -> i64 {
    transactions
        .iter()
        .flat_map(|txn| txn.splits.iter())
        .filter(|split| split.account_id == account_id)
        .map(|split| split.amount)
        .sum()
}

/// Sums every split amount owned by `person_id`; splits without an owner are
/// excluded.
pub fn person_balance(person_id: Uuid, transactions: &[Transaction]) -> i64 {
    transactions
        .iter()
        .flat_map(|txn| txn.splits.iter())
        .filter(|split| split.owner_id == Some(person_id))
        .map(|split| split.amount)
        .sum()
}

/// Filters accounts down to one classification.
pub fn accounts_by_kind(accounts: &[Account], kind: AccountKind) -> Vec<&Account> {
    accounts
        .iter()
        .filter(|account| account.kind == kind)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::transaction::{SplitDraft, TransactionDraft};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn txn(splits: Vec<SplitDraft>) -> Transaction {
        Transaction::from_draft(TransactionDraft::new(date(), splits))
    }

    #[test]
    fn unreferenced_account_has_zero_balance() {
        let txns = vec![txn(vec![SplitDraft::new(Uuid::new_v4(), 700)])];
        assert_eq!(account_balance(Uuid::new_v4(), &txns), 0);
        assert_eq!(account_balance(Uuid::new_v4(), &[]), 0);
    }

    #[test]
    fn balance_sums_matching_splits_across_transactions() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let txns = vec![
            txn(vec![SplitDraft::new(a, 5000), SplitDraft::new(b, -5000)]),
            txn(vec![SplitDraft::new(a, -1500), SplitDraft::new(b, 1500)]),
        ];
        assert_eq!(account_balance(a, &txns), 3500);
        assert_eq!(account_balance(b, &txns), -3500);
    }

    #[test]
    fn balance_is_order_independent() {
        let a = Uuid::new_v4();
        let mut txns = vec![
            txn(vec![SplitDraft::new(a, 100)]),
            txn(vec![SplitDraft::new(a, -40)]),
            txn(vec![SplitDraft::new(a, 7)]),
        ];
        let forward = account_balance(a, &txns);
        txns.reverse();
        assert_eq!(account_balance(a, &txns), forward);
    }

    #[test]
    fn empty_transaction_contributes_nothing() {
        let a = Uuid::new_v4();
        let txns = vec![txn(Vec::new()), txn(vec![SplitDraft::new(a, 250)])];
        assert_eq!(account_balance(a, &txns), 250);
    }

    #[test]
    fn person_balance_only_counts_owned_splits() {
        let friend = Uuid::new_v4();
        let account = Uuid::new_v4();
        let txns = vec![txn(vec![
            SplitDraft::new(account, 2000),
            SplitDraft::new(Uuid::new_v4(), -2000).owned_by(friend),
        ])];
        assert_eq!(person_balance(friend, &txns), -2000);
        assert_eq!(person_balance(Uuid::new_v4(), &txns), 0);
    }

    #[test]
    fn kind_filter_returns_matching_accounts() {
        use crate::ledger::account::AccountDraft;
        let accounts = vec![
            Account::from_draft(AccountDraft::new("Checking", AccountKind::AssetCash)),
            Account::from_draft(AccountDraft::new("Stocks", AccountKind::AssetInvestment)),
            Account::from_draft(AccountDraft::new("Wallet", AccountKind::AssetCash)),
        ];
        let cash = accounts_by_kind(&accounts, AccountKind::AssetCash);
        assert_eq!(cash.len(), 2);
        assert!(cash.iter().all(|a| a.kind == AccountKind::AssetCash));
    }
}
