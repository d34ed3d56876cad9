//! Migration history endpoint.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use persistence::entities::AppliedMigrationEntity;
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;

/// A single applied migration in the response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MigrationRecord {
    pub version: i64,
    pub description: String,
    pub installed_on: DateTime<Utc>,
    pub success: bool,
    pub execution_time_ms: i64,
}

impl From<AppliedMigrationEntity> for MigrationRecord {
    fn from(entity: AppliedMigrationEntity) -> Self {
        Self {
            version: entity.version,
            description: entity.description,
            installed_on: entity.installed_on,
            success: entity.success,
            // sqlx records nanoseconds
            execution_time_ms: entity.execution_time / 1_000_000,
        }
    }
}

/// Response for listing applied migrations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListMigrationsResponse {
    pub data: Vec<MigrationRecord>,
    /// Steps known to this build, applied or not.
    pub known_steps: usize,
    pub pending: usize,
}

/// List applied schema migrations, oldest first.
///
/// GET /api/migrations
pub async fn list_applied_migrations(
    State(state): State<AppState>,
) -> Result<Json<ListMigrationsResponse>, ApiError> {
    let pool = state.gateway.pool();
    let applied = persistence::migrations::applied(pool).await?;
    let pending = persistence::migrations::pending(pool).await?;

    Ok(Json(ListMigrationsResponse {
        data: applied.into_iter().map(Into::into).collect(),
        known_steps: persistence::migrations::steps().len(),
        pending: pending.len(),
    }))
}
