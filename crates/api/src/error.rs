use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use persistence::StoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ApiError::Conflict(msg) => {
                tracing::warn!("Constraint violation: {}", msg);
                (
                    StatusCode::CONFLICT,
                    "conflict",
                    "Request violates a storage constraint".to_string(),
                )
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!("Storage unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "service_unavailable",
                    "Storage is currently unavailable".into(),
                )
            }
            ApiError::InvalidBody(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection);
                (rejection.status(), "invalid_body", rejection.body_text())
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::StorageUnavailable(msg) => ApiError::ServiceUnavailable(msg),
            StoreError::ConstraintViolation(msg) => ApiError::Conflict(msg),
        }
    }
}
