//! Storage error classification.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// The two ways a storage operation can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or did not complete the operation.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A uniqueness, required-field, reference or length rule was broken.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl StoreError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, StoreError::ConstraintViolation(_))
    }
}

/// SQLSTATE classes for a value the store received and refused:
/// 22 "data exception" and 23 "integrity constraint violation".
fn is_rejected_value_code(code: &str) -> bool {
    code.starts_with("22") || code.starts_with("23")
}

/// Whether the database rejected the statement's values.
pub(crate) fn violates_constraint(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            !matches!(db_err.kind(), ErrorKind::Other)
                || db_err
                    .code()
                    .map(|code| is_rejected_value_code(&code))
                    .unwrap_or(false)
        }
        _ => false,
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if violates_constraint(&err) => {
                StoreError::ConstraintViolation(db_err.message().to_string())
            }
            sqlx::Error::Database(db_err) => {
                StoreError::StorageUnavailable(format!("Database error: {}", db_err))
            }
            _ => StoreError::StorageUnavailable(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        StoreError::ConstraintViolation(messages.join(", "))
    }
}
