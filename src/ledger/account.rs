use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a named money container tracked within the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub institution: String,
    pub currency: String,
    pub is_savings: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Well-known identifier of the system-internal equity balancer account.
    pub const EQUITY_BALANCER_ID: Uuid = Uuid::nil();

    /// Creates a new account from caller-supplied fields, stamping identity
    /// and timestamps.
    pub fn from_draft(draft: AccountDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            kind: draft.kind,
            institution: draft.institution,
            currency: draft.currency,
            is_savings: draft.is_savings,
            created_at: now,
            updated_at: now,
        }
    }

    /// The counterweight account used as the other leg of manual balance
    /// adjustments. Excluded from ordinary listings, included in balance math.
    pub fn equity_balancer() -> Self {
        let now = Utc::now();
        Self {
            id: Self::EQUITY_BALANCER_ID,
            name: "Equity Balancer".into(),
            kind: AccountKind::AssetCash,
            institution: "System".into(),
            currency: "EUR".into(),
            is_savings: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_equity_balancer(&self) -> bool {
        self.id == Self::EQUITY_BALANCER_ID
    }

    /// Merges the present fields of `patch` and refreshes the update stamp.
    pub fn apply_patch(&mut self, patch: AccountPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(institution) = patch.institution {
            self.institution = institution;
        }
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(is_savings) = patch.is_savings {
            self.is_savings = is_savings;
        }
        self.updated_at = Utc::now();
    }
}

/// Enumerates the supported account classifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AccountKind {
    AssetCash,
    AssetInvestment,
    LiabilityFriend,
    LiabilityCredit,
}

impl AccountKind {
    pub fn is_liability(self) -> bool {
        matches!(self, Self::LiabilityFriend | Self::LiabilityCredit)
    }
}

/// Caller-supplied account fields, excluding identity and timestamps.
#[derive(Debug, Clone)]
pub struct AccountDraft {
    pub name: String,
    pub kind: AccountKind,
    pub institution: String,
    pub currency: String,
    pub is_savings: bool,
}

impl AccountDraft {
    pub fn new(name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            name: name.into(),
            kind,
            institution: String::new(),
            currency: "EUR".into(),
            is_savings: false,
        }
    }

    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = institution.into();
        self
    }

    pub fn savings(mut self) -> Self {
        self.is_savings = true;
        self
    }
}

/// Partial account update; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub kind: Option<AccountKind>,
    pub institution: Option<String>,
    pub currency: Option<String>,
    pub is_savings: Option<bool>,
}
