//! Dashboard metric aggregation over account-type classification.

use serde::{Deserialize, Serialize};

use super::account::{Account, AccountKind};
use super::balance::account_balance;
use super::person::Person;
use super::transaction::Transaction;

/// Derived dashboard figures in minor currency units. Never stored;
/// recomputed from the ledger on every query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Cash balances minus money temporarily held for friends.
    pub available_cash: i64,
    /// Money held on behalf of friends, reported as a positive magnitude.
    pub temporary_holdings: i64,
    /// Savings-flagged cash plus every investment balance.
    pub real_savings: i64,
    /// All assets minus the magnitude of all liabilities.
    pub net_worth: i64,
}

/// Classifies every account by type, sums per-type balances, and derives the
/// four dashboard figures.
///
/// Liability balances are negative by convention but reported as positive
/// magnitudes. Investment balances count toward savings whether or not the
/// savings flag is set; cash balances only when it is. `_persons` is accepted
/// for interface symmetry; the aggregation operates on account types alone.
pub fn dashboard_metrics(
    accounts: &[Account],
    transactions: &[Transaction],
    _persons: &[Person],
) -> DashboardMetrics {
    let mut cash_total = 0i64;
    let mut investment_total = 0i64;
    let mut friend_liability_total = 0i64;
    let mut liability_total = 0i64;
    let mut savings_total = 0i64;

    for account in accounts {
        let balance = account_balance(account.id, transactions);
        match account.kind {
            AccountKind::AssetCash => {
                cash_total += balance;
                if account.is_savings {
                    savings_total += balance;
                }
            }
            AccountKind::AssetInvestment => {
                investment_total += balance;
                savings_total += balance;
            }
            AccountKind::LiabilityFriend => {
                friend_liability_total += balance.abs();
                liability_total += balance.abs();
            }
            AccountKind::LiabilityCredit => {
                liability_total += balance.abs();
            }
        }
    }

    let temporary_holdings = friend_liability_total;
    DashboardMetrics {
        available_cash: cash_total - temporary_holdings,
        temporary_holdings,
        real_savings: savings_total,
        net_worth: (cash_total + investment_total) - liability_total,
    }
}
