//! Author and account domain models.

use serde::{Deserialize, Serialize};

/// A stored author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    pub name: String,
}

/// An author awaiting an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
}

/// The single account owned by an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    #[serde(rename = "type")]
    pub account_type: String,
    pub author_id: i64,
}

/// An account awaiting an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub account_type: String,
    pub author_id: i64,
}
