//! Account entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the accounts table.
///
/// `author_id` is unique, so each author owns at most one account.
#[derive(Debug, Clone, FromRow)]
pub struct AccountEntity {
    pub id: i64,
    #[sqlx(rename = "type")]
    pub account_type: String,
    pub author_id: i64,
}

impl From<AccountEntity> for domain::models::Account {
    fn from(entity: AccountEntity) -> Self {
        Self {
            id: entity.id,
            account_type: entity.account_type,
            author_id: entity.author_id,
        }
    }
}
