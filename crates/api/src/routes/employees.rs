//! Employee endpoint handlers.

use axum::{extract::State, Json};
use domain::models::{CreateEmployeeRequest, Employee, NewEmployee};
use persistence::{EntityKind, EntityStore, Record};
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::middleware::metrics::record_entity_created;

/// List every employee.
///
/// GET /api/employees
pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ApiError> {
    let employees = state.gateway.list_all(EntityKind::Employee).await?;
    Ok(Json(employees))
}

/// Create an employee. Salary and city start at their defaults.
///
/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateEmployeeRequest>,
) -> Result<Json<Employee>, ApiError> {
    let employee = state
        .gateway
        .employees()
        .insert(NewEmployee::from(request))
        .await?;

    record_entity_created(EntityKind::Employee);
    info!(employee_id = employee.id, "Employee created");

    Ok(Json(employee))
}
