//! Post entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the posts table.
#[derive(Debug, Clone, FromRow)]
pub struct PostEntity {
    pub id: i64,
    pub title: String,
    pub blog_id: i64,
}

impl From<PostEntity> for domain::models::Post {
    fn from(entity: PostEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            blog_id: entity.blog_id,
        }
    }
}
