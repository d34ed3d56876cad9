//! Employee repository for database operations.

use async_trait::async_trait;
use domain::models::{Employee, NewEmployee};
use sqlx::PgPool;
use tracing::debug;

use crate::entities::EmployeeEntity;
use crate::error::StoreError;
use crate::gateway::{EntityKind, EntityStore};
use crate::metrics::QueryTimer;

/// Repository for the employees table.
#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Creates a new EmployeeRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an employee by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StoreError> {
        let timer = QueryTimer::new(EntityKind::Employee, "find_by_id");
        let result = sqlx::query_as::<_, EmployeeEntity>(
            r#"
            SELECT id, name, salary, city
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.map(Into::into))
    }
}

#[async_trait]
impl EntityStore for EmployeeRepository {
    type Record = Employee;
    type New = NewEmployee;

    fn kind(&self) -> EntityKind {
        EntityKind::Employee
    }

    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        let timer = QueryTimer::new(EntityKind::Employee, "list_all");
        let result = sqlx::query_as::<_, EmployeeEntity>(
            r#"
            SELECT id, name, salary, city
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new: NewEmployee) -> Result<Employee, StoreError> {
        let timer = QueryTimer::new(EntityKind::Employee, "insert");
        let result = sqlx::query_as::<_, EmployeeEntity>(
            r#"
            INSERT INTO employees (name, salary, city)
            VALUES ($1, $2, $3)
            RETURNING id, name, salary, city
            "#,
        )
        .bind(&new.name)
        .bind(new.salary)
        .bind(new.city)
        .fetch_one(&self.pool)
        .await;
        timer.record(&result);

        let employee: Employee = result?.into();
        debug!(employee_id = employee.id, "Employee row inserted");
        Ok(employee)
    }
}
