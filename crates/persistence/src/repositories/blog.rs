//! Blog repository for database operations.

use async_trait::async_trait;
use domain::models::{Blog, BlogPostCount, NewBlog};
use sqlx::PgPool;
use tracing::debug;

use crate::entities::{BlogEntity, BlogPostCountEntity};
use crate::error::StoreError;
use crate::gateway::{EntityKind, EntityStore};
use crate::metrics::QueryTimer;

/// Repository for the blogs table.
#[derive(Clone)]
pub struct BlogRepository {
    pool: PgPool,
}

impl BlogRepository {
    /// Creates a new BlogRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a blog by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, StoreError> {
        let timer = QueryTimer::new(EntityKind::Blog, "find_by_id");
        let result = sqlx::query_as::<_, BlogEntity>(
            r#"
            SELECT id, url
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.map(Into::into))
    }

    /// Number of posts per blog. Blogs without posts report zero.
    pub async fn post_counts(&self) -> Result<Vec<BlogPostCount>, StoreError> {
        let timer = QueryTimer::new(EntityKind::Blog, "post_counts");
        let result = sqlx::query_as::<_, BlogPostCountEntity>(
            r#"
            SELECT b.id AS blog_id, b.url, COUNT(p.id) AS post_count
            FROM blogs b
            LEFT JOIN posts p ON p.blog_id = b.id
            GROUP BY b.id, b.url
            ORDER BY b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl EntityStore for BlogRepository {
    type Record = Blog;
    type New = NewBlog;

    fn kind(&self) -> EntityKind {
        EntityKind::Blog
    }

    async fn list_all(&self) -> Result<Vec<Blog>, StoreError> {
        let timer = QueryTimer::new(EntityKind::Blog, "list_all");
        let result = sqlx::query_as::<_, BlogEntity>(
            r#"
            SELECT id, url
            FROM blogs
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record(&result);
        Ok(result?.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new: NewBlog) -> Result<Blog, StoreError> {
        let timer = QueryTimer::new(EntityKind::Blog, "insert");
        let result = sqlx::query_as::<_, BlogEntity>(
            r#"
            INSERT INTO blogs (url)
            VALUES ($1)
            RETURNING id, url
            "#,
        )
        .bind(&new.url)
        .fetch_one(&self.pool)
        .await;
        timer.record(&result);

        let blog: Blog = result?.into();
        debug!(blog_id = blog.id, "Blog row inserted");
        Ok(blog)
    }
}
