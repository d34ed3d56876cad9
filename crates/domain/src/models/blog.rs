//! Blog and post domain models.
//!
//! A blog has many posts; a post carries the `blog_id` of its owner and is
//! loaded through an explicit query rather than a navigation property.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// URL stored for a blog created without one.
pub const DEFAULT_BLOG_URL: &str = "https://example.com/blog";

/// Maximum post title length, matching the `posts.title` column.
pub const MAX_POST_TITLE_LENGTH: usize = 450;

/// A stored blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i64,
    pub url: String,
}

/// Request payload for creating a blog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// A complete blog record awaiting an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub url: String,
}

impl From<CreateBlogRequest> for NewBlog {
    fn from(request: CreateBlogRequest) -> Self {
        Self {
            url: request
                .url
                .unwrap_or_else(|| DEFAULT_BLOG_URL.to_string()),
        }
    }
}

/// A stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub blog_id: i64,
}

/// A post awaiting an identity.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewPost {
    #[validate(length(min = 1, max = 450, message = "Title must be between 1 and 450 characters"))]
    pub title: String,
    pub blog_id: i64,
}

/// Aggregate row: number of posts written on a blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostCount {
    pub blog_id: i64,
    pub url: String,
    pub post_count: i64,
}
