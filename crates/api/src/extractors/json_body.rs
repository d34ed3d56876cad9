//! JSON request bodies that reject with the API error shape.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// Like [`axum::Json`], but a body that fails to parse answers with an
/// [`ApiError`] JSON body instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
