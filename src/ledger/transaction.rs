use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One signed monetary leg of a transaction, tied to one account and
/// optionally one person.
///
/// Negative amounts are money leaving the account, positive amounts money
/// entering. Amounts are minor currency units (cents).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    pub id: Uuid,
    pub transaction_id: Uuid,
    pub account_id: Uuid,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
}

/// Caller-supplied split fields; identity and the owning transaction id are
/// assigned when the transaction is recorded.
#[derive(Debug, Clone)]
pub struct SplitDraft {
    pub account_id: Uuid,
    pub amount: i64,
    pub owner_id: Option<Uuid>,
}

impl SplitDraft {
    pub fn new(account_id: Uuid, amount: i64) -> Self {
        Self {
            account_id,
            amount,
            owner_id: None,
        }
    }

    pub fn owned_by(mut self, person_id: Uuid) -> Self {
        self.owner_id = Some(person_id);
        self
    }
}

/// An economic event composed of splits moving money between accounts on one
/// date. Splits are not required to sum to zero; unbalanced entries are the
/// mechanism behind manual adjustments against the equity balancer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default)]
    pub splits: Vec<Split>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Builds a full record from a draft: fresh transaction id, fresh id per
    /// split, split `transaction_id` back-filled, both timestamps stamped.
    pub fn from_draft(draft: TransactionDraft) -> Self {
        let id = Uuid::new_v4();
        let now = Utc::now();
        Self {
            id,
            date: draft.date,
            payee: draft.payee,
            memo: draft.memo,
            splits: materialize_splits(id, draft.splits),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges the present fields of `patch` and refreshes the update stamp.
    /// Replacement splits are re-identified and back-filled like on creation.
    pub fn apply_patch(&mut self, patch: TransactionPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(payee) = patch.payee {
            self.payee = payee;
        }
        if let Some(memo) = patch.memo {
            self.memo = memo;
        }
        if let Some(splits) = patch.splits {
            self.splits = materialize_splits(self.id, splits);
        }
        self.updated_at = Utc::now();
    }

    /// Net signed amount across all splits; zero for a balanced entry.
    pub fn net_amount(&self) -> i64 {
        self.splits.iter().map(|split| split.amount).sum()
    }
}

fn materialize_splits(transaction_id: Uuid, drafts: Vec<SplitDraft>) -> Vec<Split> {
    drafts
        .into_iter()
        .map(|draft| Split {
            id: Uuid::new_v4(),
            transaction_id,
            account_id: draft.account_id,
            amount: draft.amount,
            owner_id: draft.owner_id,
        })
        .collect()
}

/// Caller-supplied transaction fields, excluding identity and timestamps.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub payee: Option<String>,
    pub memo: Option<String>,
    pub splits: Vec<SplitDraft>,
}

impl TransactionDraft {
    pub fn new(date: NaiveDate, splits: Vec<SplitDraft>) -> Self {
        Self {
            date,
            payee: None,
            memo: None,
            splits,
        }
    }

    pub fn with_payee(mut self, payee: impl Into<String>) -> Self {
        self.payee = Some(payee.into());
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }
}

/// Partial transaction update. The nullable `payee`/`memo` fields use a
/// double `Option` so callers can distinguish "leave as-is" (`None`) from
/// "clear" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub date: Option<NaiveDate>,
    pub payee: Option<Option<String>>,
    pub memo: Option<Option<String>>,
    pub splits: Option<Vec<SplitDraft>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn from_draft_backfills_split_transaction_ids() {
        let account = Uuid::new_v4();
        let draft = TransactionDraft::new(
            sample_date(),
            vec![
                SplitDraft::new(account, 5000),
                SplitDraft::new(Uuid::new_v4(), -5000),
            ],
        );
        let txn = Transaction::from_draft(draft);
        assert_eq!(txn.splits.len(), 2);
        for split in &txn.splits {
            assert_eq!(split.transaction_id, txn.id);
            assert_ne!(split.id, Uuid::nil());
        }
        assert_eq!(txn.net_amount(), 0);
    }

    #[test]
    fn patch_can_clear_payee_but_keep_memo() {
        let mut txn = Transaction::from_draft(
            TransactionDraft::new(sample_date(), Vec::new())
                .with_payee("Grocer")
                .with_memo("weekly shop"),
        );
        txn.apply_patch(TransactionPatch {
            payee: Some(None),
            ..Default::default()
        });
        assert_eq!(txn.payee, None);
        assert_eq!(txn.memo.as_deref(), Some("weekly shop"));
    }

    #[test]
    fn patch_replacement_splits_are_backfilled() {
        let mut txn = Transaction::from_draft(TransactionDraft::new(sample_date(), Vec::new()));
        txn.apply_patch(TransactionPatch {
            splits: Some(vec![SplitDraft::new(Uuid::new_v4(), 1200)]),
            ..Default::default()
        });
        assert_eq!(txn.splits[0].transaction_id, txn.id);
        assert_eq!(txn.net_amount(), 1200);
    }

    #[test]
    fn absent_payee_is_omitted_from_json() {
        let txn = Transaction::from_draft(TransactionDraft::new(sample_date(), Vec::new()));
        let json = serde_json::to_string(&txn).unwrap();
        assert!(!json.contains("payee"));
        assert!(!json.contains("memo"));
    }
}
