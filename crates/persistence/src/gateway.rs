//! Single access point to persisted storage.
//!
//! [`Gateway`] owns the connection pool and hands out one typed collection
//! per entity. Every collection implements [`EntityStore`], so callers list
//! and insert the same way regardless of the entity.

use async_trait::async_trait;
use domain::models::{
    Account, Author, Blog, Employee, NewAccount, NewAuthor, NewBlog, NewEmployee, NewPost, Post,
};
use serde::Serialize;
use sqlx::PgPool;
use std::time::{Duration, Instant};

use crate::db::{create_pool, DatabaseConfig};
use crate::error::StoreError;
use crate::metrics::QueryTimer;
use crate::repositories::{
    AccountRepository, AuthorRepository, BlogRepository, EmployeeRepository, PostRepository,
};

/// The persisted entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Employee,
    Blog,
    Post,
    Author,
    Account,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Employee,
        EntityKind::Blog,
        EntityKind::Post,
        EntityKind::Author,
        EntityKind::Account,
    ];

    /// Name of the backing table.
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::Employee => "employees",
            EntityKind::Blog => "blogs",
            EntityKind::Post => "posts",
            EntityKind::Author => "authors",
            EntityKind::Account => "accounts",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

/// A typed collection of one entity.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// The stored representation, identity included.
    type Record: Send;
    /// A complete record that has not been assigned an identity yet.
    type New: Send + 'static;

    fn kind(&self) -> EntityKind;

    /// Every row of the collection, ordered by identity.
    async fn list_all(&self) -> Result<Vec<Self::Record>, StoreError>;

    /// Persists `new` and returns it with its newly assigned identity.
    async fn insert(&self, new: Self::New) -> Result<Self::Record, StoreError>;
}

/// A stored record of any entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Employee(Employee),
    Blog(Blog),
    Post(Post),
    Author(Author),
    Account(Account),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Employee(_) => EntityKind::Employee,
            Record::Blog(_) => EntityKind::Blog,
            Record::Post(_) => EntityKind::Post,
            Record::Author(_) => EntityKind::Author,
            Record::Account(_) => EntityKind::Account,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Record::Employee(r) => r.id,
            Record::Blog(r) => r.id,
            Record::Post(r) => r.id,
            Record::Author(r) => r.id,
            Record::Account(r) => r.id,
        }
    }
}

/// A record of any entity awaiting an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewRecord {
    Employee(NewEmployee),
    Blog(NewBlog),
    Post(NewPost),
    Author(NewAuthor),
    Account(NewAccount),
}

impl NewRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            NewRecord::Employee(_) => EntityKind::Employee,
            NewRecord::Blog(_) => EntityKind::Blog,
            NewRecord::Post(_) => EntityKind::Post,
            NewRecord::Author(_) => EntityKind::Author,
            NewRecord::Account(_) => EntityKind::Account,
        }
    }
}

/// Persistence gateway. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct Gateway {
    pool: PgPool,
}

impl Gateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool with the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = create_pool(config).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn employees(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.pool.clone())
    }

    pub fn blogs(&self) -> BlogRepository {
        BlogRepository::new(self.pool.clone())
    }

    pub fn posts(&self) -> PostRepository {
        PostRepository::new(self.pool.clone())
    }

    pub fn authors(&self) -> AuthorRepository {
        AuthorRepository::new(self.pool.clone())
    }

    pub fn accounts(&self) -> AccountRepository {
        AccountRepository::new(self.pool.clone())
    }

    /// Lists every row of `kind`.
    pub async fn list_all(&self, kind: EntityKind) -> Result<Vec<Record>, StoreError> {
        let records = match kind {
            EntityKind::Employee => wrap(self.employees().list_all().await?, Record::Employee),
            EntityKind::Blog => wrap(self.blogs().list_all().await?, Record::Blog),
            EntityKind::Post => wrap(self.posts().list_all().await?, Record::Post),
            EntityKind::Author => wrap(self.authors().list_all().await?, Record::Author),
            EntityKind::Account => wrap(self.accounts().list_all().await?, Record::Account),
        };
        Ok(records)
    }

    /// Inserts a record of any entity.
    pub async fn insert(&self, new: NewRecord) -> Result<Record, StoreError> {
        let record = match new {
            NewRecord::Employee(n) => Record::Employee(self.employees().insert(n).await?),
            NewRecord::Blog(n) => Record::Blog(self.blogs().insert(n).await?),
            NewRecord::Post(n) => Record::Post(self.posts().insert(n).await?),
            NewRecord::Author(n) => Record::Author(self.authors().insert(n).await?),
            NewRecord::Account(n) => Record::Account(self.accounts().insert(n).await?),
        };
        Ok(record)
    }

    /// Number of rows stored for `kind`.
    pub async fn count(&self, kind: EntityKind) -> Result<i64, StoreError> {
        let timer = QueryTimer::new(kind, "count");
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table_name());
        let result = sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(&self.pool)
            .await;
        timer.record(&result);
        Ok(result?)
    }

    /// Round trip to the store; returns its latency.
    pub async fn ping(&self) -> Result<Duration, StoreError> {
        let start = Instant::now();
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(start.elapsed())
    }
}

fn wrap<T>(records: Vec<T>, f: fn(T) -> Record) -> Vec<Record> {
    records.into_iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names() {
        assert_eq!(EntityKind::Employee.table_name(), "employees");
        assert_eq!(EntityKind::Blog.table_name(), "blogs");
        assert_eq!(EntityKind::Post.table_name(), "posts");
        assert_eq!(EntityKind::Author.table_name(), "authors");
        assert_eq!(EntityKind::Account.table_name(), "accounts");
    }

    #[test]
    fn test_all_kinds_distinct() {
        let names: std::collections::HashSet<_> =
            EntityKind::ALL.iter().map(|k| k.table_name()).collect();
        assert_eq!(names.len(), EntityKind::ALL.len());
    }

    #[test]
    fn test_record_serializes_untagged() {
        let record = Record::Blog(Blog {
            id: 2,
            url: "https://example.com/blog".to_string(),
        });
        assert_eq!(record.kind(), EntityKind::Blog);
        assert_eq!(record.id(), 2);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({"id": 2, "url": "https://example.com/blog"})
        );
    }

    #[test]
    fn test_new_record_kind() {
        let new = NewRecord::Employee(NewEmployee::named("Alice"));
        assert_eq!(new.kind(), EntityKind::Employee);
    }
}
