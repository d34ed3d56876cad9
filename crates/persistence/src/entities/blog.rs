//! Blog entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the blogs table.
#[derive(Debug, Clone, FromRow)]
pub struct BlogEntity {
    pub id: i64,
    pub url: String,
}

impl From<BlogEntity> for domain::models::Blog {
    fn from(entity: BlogEntity) -> Self {
        Self {
            id: entity.id,
            url: entity.url,
        }
    }
}

/// Row of the posts-per-blog aggregate.
#[derive(Debug, Clone, FromRow)]
pub struct BlogPostCountEntity {
    pub blog_id: i64,
    pub url: String,
    pub post_count: i64,
}

impl From<BlogPostCountEntity> for domain::models::BlogPostCount {
    fn from(entity: BlogPostCountEntity) -> Self {
        Self {
            blog_id: entity.blog_id,
            url: entity.url,
            post_count: entity.post_count,
        }
    }
}
