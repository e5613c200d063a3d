use uuid::Uuid;

use crate::ledger::{DashboardMetrics, Ledger};

/// Read-side queries over the current ledger snapshot. Every call recomputes
/// from scratch; there is no cache to invalidate across mutations.
pub struct SummaryService;

impl SummaryService {
    pub fn account_balance(ledger: &Ledger, account_id: Uuid) -> i64 {
        ledger.account_balance(account_id)
    }

    pub fn person_balance(ledger: &Ledger, person_id: Uuid) -> i64 {
        ledger.person_balance(person_id)
    }

    pub fn dashboard(ledger: &Ledger) -> DashboardMetrics {
        ledger.metrics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{AccountService, TransactionService};
    use crate::ledger::{AccountDraft, AccountKind, Person, SplitDraft, TransactionDraft};
    use chrono::NaiveDate;

    #[test]
    fn friend_holdings_flow_from_owned_splits_to_metrics() {
        let mut ledger = Ledger::new();
        let friend = Person::friend("Friend A");
        let friend_id = ledger.add_person(friend);
        let checking = AccountService::add(
            &mut ledger,
            AccountDraft::new("Checking", AccountKind::AssetCash),
        );
        let holding = AccountService::add(
            &mut ledger,
            AccountDraft::new("Friend A", AccountKind::LiabilityFriend),
        );

        TransactionService::add(
            &mut ledger,
            TransactionDraft::new(
                NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                vec![
                    SplitDraft::new(checking.id, 2000),
                    SplitDraft::new(holding.id, -2000).owned_by(friend_id),
                ],
            ),
        );

        assert_eq!(SummaryService::person_balance(&ledger, friend_id), -2000);
        assert_eq!(SummaryService::account_balance(&ledger, checking.id), 2000);

        let metrics = SummaryService::dashboard(&ledger);
        assert_eq!(metrics.temporary_holdings, 2000);
        assert_eq!(metrics.available_cash, 0);
    }
}
