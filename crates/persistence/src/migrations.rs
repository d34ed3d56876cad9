//! Schema migration log.
//!
//! The log lives in `src/migrations/` as ordered pairs of
//! `<version>_<description>.up.sql` / `.down.sql` files embedded at compile
//! time. Applying every up step from an empty database yields the current
//! schema; applying every down step newest-first returns to empty.
//!
//! Committed files are never edited: sqlx stores a checksum per applied
//! version and refuses to run a log whose history changed. New schema
//! changes are appended as new versions.

use serde::Serialize;
use sqlx::migrate::{MigrateError, MigrationType, Migrator};
use sqlx::PgPool;
use tracing::info;

use crate::entities::AppliedMigrationEntity;
use crate::error::StoreError;

/// The embedded migration log.
pub static MIGRATOR: Migrator = sqlx::migrate!("src/migrations");

/// One node of the migration log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationStep {
    pub version: i64,
    pub description: String,
    pub reversible: bool,
}

/// The ordered steps of the log, oldest first.
pub fn steps() -> Vec<MigrationStep> {
    let mut steps: Vec<MigrationStep> = MIGRATOR
        .iter()
        .filter(|m| !matches!(m.migration_type, MigrationType::ReversibleDown))
        .map(|m| MigrationStep {
            version: m.version,
            description: m.description.to_string(),
            reversible: matches!(m.migration_type, MigrationType::ReversibleUp)
                && has_down_step(m.version),
        })
        .collect();
    steps.sort_by_key(|s| s.version);
    steps
}

fn has_down_step(version: i64) -> bool {
    MIGRATOR
        .iter()
        .any(|m| m.version == version && matches!(m.migration_type, MigrationType::ReversibleDown))
}

/// Applies every pending up step.
pub async fn run(pool: &PgPool) -> Result<(), MigrateError> {
    info!(steps = steps().len(), "Applying schema migrations");
    MIGRATOR.run(pool).await?;
    info!("Schema migrations applied");
    Ok(())
}

/// Reverts applied steps newer than `version`, newest first.
pub async fn revert_to(pool: &PgPool, version: i64) -> Result<(), MigrateError> {
    info!(target_version = version, "Reverting schema migrations");
    MIGRATOR.undo(pool, version).await
}

/// Reverts every applied step, leaving an empty schema.
pub async fn revert_all(pool: &PgPool) -> Result<(), MigrateError> {
    revert_to(pool, 0).await
}

/// Steps recorded in the migration ledger, oldest first.
///
/// Returns an empty list when no migration has ever run against the schema.
pub async fn applied(pool: &PgPool) -> Result<Vec<AppliedMigrationEntity>, StoreError> {
    let ledger_exists: bool =
        sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
            .fetch_one(pool)
            .await?;
    if !ledger_exists {
        return Ok(Vec::new());
    }

    let rows = sqlx::query_as::<_, AppliedMigrationEntity>(
        r#"
        SELECT version, description, installed_on, success, execution_time
        FROM _sqlx_migrations
        ORDER BY version
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Known steps that have not been applied yet, oldest first.
pub async fn pending(pool: &PgPool) -> Result<Vec<MigrationStep>, StoreError> {
    let applied = applied(pool).await?;
    Ok(steps()
        .into_iter()
        .filter(|step| !applied.iter().any(|a| a.version == step.version))
        .collect())
}
