//! Account repository for database operations.

use async_trait::async_trait;
use domain::models::{Account, NewAccount};
use sqlx::PgPool;

use crate::entities::AccountEntity;
use crate::error::StoreError;
use crate::gateway::{EntityKind, EntityStore};
use crate::metrics::QueryTimer;

/// Repository for the accounts table.
#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Creates a new AccountRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The account owned by an author, if any.
    pub async fn find_by_author(&self, author_id: i64) -> Result<Option<Account>, StoreError> {
        let timer = QueryTimer::new(EntityKind::Account, "find_by_author");
        let result = sqlx::query_as::<_, AccountEntity>(
            r#"
            SELECT id, "type", author_id
            FROM accounts
            WHERE author_id = $1
            "#,
        )
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.map(Into::into))
    }
}

#[async_trait]
impl EntityStore for AccountRepository {
    type Record = Account;
    type New = NewAccount;

    fn kind(&self) -> EntityKind {
        EntityKind::Account
    }

    async fn list_all(&self) -> Result<Vec<Account>, StoreError> {
        let timer = QueryTimer::new(EntityKind::Account, "list_all");
        let result = sqlx::query_as::<_, AccountEntity>(
            r#"
            SELECT id, "type", author_id
            FROM accounts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new: NewAccount) -> Result<Account, StoreError> {
        let timer = QueryTimer::new(EntityKind::Account, "insert");
        let result = sqlx::query_as::<_, AccountEntity>(
            r#"
            INSERT INTO accounts ("type", author_id)
            VALUES ($1, $2)
            RETURNING id, "type", author_id
            "#,
        )
        .bind(&new.account_type)
        .bind(new.author_id)
        .fetch_one(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.into())
    }
}
