//! Integration tests for the blog endpoints.
//!
//! These tests require a running PostgreSQL instance.
//! Set TEST_DATABASE_URL or use the default local test database.

mod common;

use axum::http::{Method, StatusCode};
use common::{create_test_app, get_request, json_request, parse_response_body, TestDb};
use domain::models::blog::DEFAULT_BLOG_URL;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_create_blog_with_url() {
    let db = TestDb::new().await;
    let app = create_test_app(&db);

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/blogs",
            json!({"url": "https://blog.example.org"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body, json!({"id": 1, "url": "https://blog.example.org"}));

    db.cleanup().await;
}

#[tokio::test]
async fn test_create_blog_default_url() {
    let db = TestDb::new().await;
    let app = create_test_app(&db);

    let response = app
        .oneshot(json_request(Method::POST, "/api/blogs", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["url"], DEFAULT_BLOG_URL);

    db.cleanup().await;
}

#[tokio::test]
async fn test_list_blogs_after_creations() {
    let db = TestDb::new().await;
    let app = create_test_app(&db);

    let urls = [
        "https://one.example.com",
        "https://two.example.com",
        "https://three.example.com",
    ];
    for url in urls {
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/blogs", json!({"url": url})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get_request("/api/blogs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let listed: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["url"].as_str().unwrap())
        .collect();
    assert_eq!(listed, urls);

    db.cleanup().await;
}

#[tokio::test]
async fn test_create_blog_null_url_uses_default() {
    let db = TestDb::new().await;
    let app = create_test_app(&db);

    let response = app
        .oneshot(json_request(Method::POST, "/api/blogs", json!({"url": null})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["url"], DEFAULT_BLOG_URL);

    db.cleanup().await;
}

#[tokio::test]
async fn test_create_blog_malformed_body() {
    let db = TestDb::new().await;
    let app = create_test_app(&db);

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/blogs", json!({"url": 17})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(parse_response_body(response).await["error"], "invalid_body");

    let response = app.oneshot(get_request("/api/blogs")).await.unwrap();
    assert_eq!(parse_response_body(response).await, json!([]));

    db.cleanup().await;
}
