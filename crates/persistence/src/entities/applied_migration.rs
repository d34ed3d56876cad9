//! Row of the sqlx migration ledger.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for `_sqlx_migrations`.
#[derive(Debug, Clone, FromRow)]
pub struct AppliedMigrationEntity {
    pub version: i64,
    pub description: String,
    pub installed_on: DateTime<Utc>,
    pub success: bool,
    pub execution_time: i64,
}
