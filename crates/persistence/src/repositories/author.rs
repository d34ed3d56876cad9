//! Author repository for database operations.

use async_trait::async_trait;
use domain::models::{Author, NewAuthor};
use sqlx::PgPool;

use crate::entities::AuthorEntity;
use crate::error::StoreError;
use crate::gateway::{EntityKind, EntityStore};
use crate::metrics::QueryTimer;

/// Repository for the authors table.
#[derive(Clone)]
pub struct AuthorRepository {
    pool: PgPool,
}

impl AuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for AuthorRepository {
    type Record = Author;
    type New = NewAuthor;

    fn kind(&self) -> EntityKind {
        EntityKind::Author
    }

    async fn list_all(&self) -> Result<Vec<Author>, StoreError> {
        let timer = QueryTimer::new(EntityKind::Author, "list_all");
        let result = sqlx::query_as::<_, AuthorEntity>(
            r#"
            SELECT id, name
            FROM authors
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new: NewAuthor) -> Result<Author, StoreError> {
        let timer = QueryTimer::new(EntityKind::Author, "insert");
        let result = sqlx::query_as::<_, AuthorEntity>(
            r#"
            INSERT INTO authors (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(&new.name)
        .fetch_one(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.into())
    }
}
