use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A human counterparty: the ledger owner or a friend whose money is held.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub is_friend: bool,
}

impl Person {
    pub fn owner(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_friend: false,
        }
    }

    pub fn friend(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_friend: true,
        }
    }
}
