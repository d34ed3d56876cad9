//! Employee domain model.

use serde::{Deserialize, Serialize};

/// Salary assigned to an employee created without one.
pub const DEFAULT_SALARY: i32 = 0;

/// City code assigned to an employee created without one.
pub const DEFAULT_CITY: i32 = 0;

/// A stored employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: Option<String>,
    pub salary: i32,
    pub city: i32,
}

/// Request payload for creating an employee.
///
/// Only `name` is user-settable; any other field in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// A complete employee record awaiting an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: Option<String>,
    pub salary: i32,
    pub city: i32,
}

impl NewEmployee {
    /// Creates an employee record with the default salary and city.
    pub fn named(name: impl Into<String>) -> Self {
        CreateEmployeeRequest {
            name: Some(name.into()),
        }
        .into()
    }
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(request: CreateEmployeeRequest) -> Self {
        Self {
            name: request.name,
            salary: DEFAULT_SALARY,
            city: DEFAULT_CITY,
        }
    }
}
