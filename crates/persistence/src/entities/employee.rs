//! Employee entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the employees table.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeEntity {
    pub id: i64,
    pub name: Option<String>,
    pub salary: i32,
    pub city: i32,
}

impl From<EmployeeEntity> for domain::models::Employee {
    fn from(entity: EmployeeEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            salary: entity.salary,
            city: entity.city,
        }
    }
}
