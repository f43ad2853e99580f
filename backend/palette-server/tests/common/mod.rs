#![allow(dead_code)]

//! Test infrastructure for palette-server API tests

use palette_server::{AppState, build_router};

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    // In-memory needs a single connection that never gets recycled
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    palette_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState::new(create_test_pool().await)
}

/// Send one request through a fresh router built on `state`
pub async fn send(state: &AppState, request: Request<Body>) -> Response<Body> {
    build_router(state.clone()).oneshot(request).await.unwrap()
}

pub async fn get(state: &AppState, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(state, request).await
}

pub async fn post_json(state: &AppState, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(state, request).await
}

/// POST a raw body, with `content_type` set only when given
pub async fn post_raw(
    state: &AppState,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Response<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }

    send(state, builder.body(Body::from(body)).unwrap()).await
}

pub async fn delete(state: &AppState, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(state, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a project through the API and return its id
pub async fn create_test_project(state: &AppState, project_name: &str) -> i64 {
    let response = post_json(
        state,
        "/api/v1/projects",
        serde_json::json!({ "project_name": project_name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    body_json(response).await["id"].as_i64().unwrap()
}

/// A complete palette body without `project_id`
pub fn palette_body(palette_title: &str) -> Value {
    serde_json::json!({
        "palette_title": palette_title,
        "color_1": "#000000",
        "color_2": "#000000",
        "color_3": "#000000",
        "color_4": "#000000",
        "color_5": "#000000",
    })
}

/// Create a palette through the API and return its id
pub async fn create_test_palette(state: &AppState, project_id: i64, palette_title: &str) -> i64 {
    let response = post_json(
        state,
        &format!("/api/v1/projects/{}/palettes", project_id),
        palette_body(palette_title),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    body_json(response).await["id"].as_i64().unwrap()
}
