//! Post repository for database operations.

use async_trait::async_trait;
use domain::models::{NewPost, Post};
use sqlx::PgPool;
use validator::Validate;

use crate::entities::PostEntity;
use crate::error::StoreError;
use crate::gateway::{EntityKind, EntityStore};
use crate::metrics::QueryTimer;

/// Repository for the posts table.
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Creates a new PostRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Posts written on a blog, oldest first.
    pub async fn find_by_blog(&self, blog_id: i64) -> Result<Vec<Post>, StoreError> {
        let timer = QueryTimer::new(EntityKind::Post, "find_by_blog");
        let result = sqlx::query_as::<_, PostEntity>(
            r#"
            SELECT id, title, blog_id
            FROM posts
            WHERE blog_id = $1
            ORDER BY id
            "#,
        )
        .bind(blog_id)
        .fetch_all(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.into_iter().map(Into::into).collect())
    }

    /// Posts with exactly this title (served by `Title_Index`).
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Post>, StoreError> {
        let timer = QueryTimer::new(EntityKind::Post, "find_by_title");
        let result = sqlx::query_as::<_, PostEntity>(
            r#"
            SELECT id, title, blog_id
            FROM posts
            WHERE title = $1
            ORDER BY id
            "#,
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl EntityStore for PostRepository {
    type Record = Post;
    type New = NewPost;

    fn kind(&self) -> EntityKind {
        EntityKind::Post
    }

    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let timer = QueryTimer::new(EntityKind::Post, "list_all");
        let result = sqlx::query_as::<_, PostEntity>(
            r#"
            SELECT id, title, blog_id
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new: NewPost) -> Result<Post, StoreError> {
        new.validate()?;

        let timer = QueryTimer::new(EntityKind::Post, "insert");
        let result = sqlx::query_as::<_, PostEntity>(
            r#"
            INSERT INTO posts (title, blog_id)
            VALUES ($1, $2)
            RETURNING id, title, blog_id
            "#,
        )
        .bind(&new.title)
        .bind(new.blog_id)
        .fetch_one(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.into())
    }
}
