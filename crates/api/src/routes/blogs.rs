//! Blog endpoint handlers.

use axum::{extract::State, Json};
use domain::models::{Blog, CreateBlogRequest, NewBlog};
use persistence::{EntityKind, EntityStore, Record};
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::middleware::metrics::record_entity_created;

/// List every blog.
///
/// GET /api/blogs
pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ApiError> {
    let blogs = state.gateway.list_all(EntityKind::Blog).await?;
    Ok(Json(blogs))
}

/// Create a blog; a missing url gets the default.
///
/// POST /api/blogs
pub async fn create_blog(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateBlogRequest>,
) -> Result<Json<Blog>, ApiError> {
    let blog = state.gateway.blogs().insert(NewBlog::from(request)).await?;

    record_entity_created(EntityKind::Blog);
    info!(blog_id = blog.id, url = %blog.url, "Blog created");

    Ok(Json(blog))
}
