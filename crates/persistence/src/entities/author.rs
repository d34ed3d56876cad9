//! Author entity (database row mapping).

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct AuthorEntity {
    pub id: i64,
    pub name: String,
}

impl From<AuthorEntity> for domain::models::Author {
    fn from(entity: AuthorEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
