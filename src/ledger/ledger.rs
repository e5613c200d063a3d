use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::{Account, AccountDraft, AccountKind};
use super::balance::{account_balance, person_balance};
use super::metrics::{dashboard_metrics, DashboardMetrics};
use super::person::Person;
use super::transaction::Transaction;

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The authoritative in-memory finance data set: accounts, persons, and
/// transactions, serializable as a single JSON record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    /// Creates an empty ledger. The equity balancer account is always
    /// present so manual adjustment entries have a counterpart leg.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            accounts: vec![Account::equity_balancer()],
            persons: Vec::new(),
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Creates a ledger seeded with the owner person plus one friend person
    /// and one matching liability account per friend name.
    pub fn seeded(owner: impl Into<String>, friends: &[&str]) -> Self {
        let mut ledger = Self::new();
        ledger.persons.push(Person::owner(owner));
        for name in friends {
            ledger.persons.push(Person::friend(*name));
            ledger.accounts.push(Account::from_draft(
                AccountDraft::new(*name, AccountKind::LiabilityFriend)
                    .with_institution("Personal"),
            ));
        }
        ledger
    }

    pub fn add_account(&mut self, account: Account) -> Uuid {
        let id = account.id;
        self.accounts.push(account);
        self.touch();
        id
    }

    pub fn add_person(&mut self, person: Person) -> Uuid {
        let id = person.id;
        self.persons.push(person);
        self.touch();
        id
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.touch();
        id
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    pub fn person(&self, id: Uuid) -> Option<&Person> {
        self.persons.iter().find(|person| person.id == id)
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id == id)
    }

    /// Accounts as shown to the user: the equity balancer stays hidden even
    /// though it participates in balance math.
    pub fn listed_accounts(&self) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|account| !account.is_equity_balancer())
            .collect()
    }

    /// Number of splits anywhere in the ledger referencing `account_id`.
    pub fn dependent_split_count(&self, account_id: Uuid) -> usize {
        self.transactions
            .iter()
            .flat_map(|txn| txn.splits.iter())
            .filter(|split| split.account_id == account_id)
            .count()
    }

    pub fn account_balance(&self, account_id: Uuid) -> i64 {
        account_balance(account_id, &self.transactions)
    }

    pub fn person_balance(&self, person_id: Uuid) -> i64 {
        person_balance(person_id, &self.transactions)
    }

    /// Recomputes the dashboard metrics from the current snapshot. No
    /// caching; every call re-scans the transaction list.
    pub fn metrics(&self) -> DashboardMetrics {
        dashboard_metrics(&self.accounts, &self.transactions, &self.persons)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
