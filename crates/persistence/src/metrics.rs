//! Store metrics: pool gauges and per-operation timings.

use metrics::{counter, gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

use crate::error::violates_constraint;
use crate::gateway::EntityKind;

/// Publishes the current pool occupancy.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();

    gauge!("store_pool_connections", "state" => "active").set(size.saturating_sub(idle) as f64);
    gauge!("store_pool_connections", "state" => "idle").set(idle as f64);
}

/// How a storage operation ended, as a metric label.
pub fn outcome<T>(result: &Result<T, sqlx::Error>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(e) if violates_constraint(e) => "constraint_violation",
        Err(_) => "unavailable",
    }
}

/// Times one storage operation against one entity collection.
///
/// ```ignore
/// let timer = QueryTimer::new(EntityKind::Employee, "list_all");
/// let result = sqlx::query_as::<_, EmployeeEntity>(...).fetch_all(&pool).await;
/// timer.record(&result);
/// ```
pub struct QueryTimer {
    entity: EntityKind,
    operation: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(entity: EntityKind, operation: &'static str) -> Self {
        Self {
            entity,
            operation,
            start: Instant::now(),
        }
    }

    /// Records `store_operation_duration_seconds`, and bumps
    /// `store_operation_errors_total` when the operation failed.
    pub fn record<T>(self, result: &Result<T, sqlx::Error>) {
        let outcome = outcome(result);
        histogram!(
            "store_operation_duration_seconds",
            "entity" => self.entity.table_name(),
            "operation" => self.operation,
            "outcome" => outcome
        )
        .record(self.start.elapsed().as_secs_f64());

        if result.is_err() {
            counter!(
                "store_operation_errors_total",
                "entity" => self.entity.table_name(),
                "outcome" => outcome
            )
            .increment(1);
        }
    }
}
