//! Health, liveness and readiness endpoints.
//!
//! `/api/health` reports store reachability and how far the schema has
//! advanced along the migration log. Readiness requires both.

use axum::{extract::State, http::StatusCode, Json};
use persistence::Gateway;
use serde::Serialize;
use tracing::warn;

use crate::app::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
    pub schema: SchemaHealth,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

/// Position of the live schema in the migration log.
#[derive(Debug, Serialize)]
pub struct SchemaHealth {
    pub known_steps: usize,
    /// `None` when the ledger could not be read.
    pub pending: Option<usize>,
}

impl SchemaHealth {
    fn is_current(&self) -> bool {
        self.pending == Some(0)
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

async fn check_store(gateway: &Gateway) -> (DatabaseHealth, SchemaHealth) {
    let latency = match gateway.ping().await {
        Ok(latency) => Some(latency),
        Err(e) => {
            warn!(error = %e, "Health check could not reach the store");
            None
        }
    };

    let pending = if latency.is_some() {
        persistence::migrations::pending(gateway.pool())
            .await
            .map(|steps| steps.len())
            .ok()
    } else {
        None
    };

    (
        DatabaseHealth {
            connected: latency.is_some(),
            latency_ms: latency.map(|d| d.as_millis() as u64),
        },
        SchemaHealth {
            known_steps: persistence::migrations::steps().len(),
            pending,
        },
    )
}

/// GET /api/health
///
/// Answers 503 with the same body while the store is unreachable.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (database, schema) = check_store(&state.gateway).await;

    let (status, label) = if !database.connected {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    } else if !schema.is_current() {
        (StatusCode::OK, "degraded")
    } else {
        (StatusCode::OK, "healthy")
    };

    let response = HealthResponse {
        status: label,
        version: env!("CARGO_PKG_VERSION"),
        database,
        schema,
    };
    (status, Json(response))
}

/// GET /api/health/live
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse { status: "alive" })
}

/// GET /api/health/ready
pub async fn ready(State(state): State<AppState>) -> Result<Json<StatusResponse>, StatusCode> {
    let (database, schema) = check_store(&state.gateway).await;
    if database.connected && schema.is_current() {
        Ok(Json(StatusResponse { status: "ready" }))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}
