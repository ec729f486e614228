#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use revassign_api::config::{DatabaseConfig, ServerConfig};
use revassign_api::router::build_app_router;
use revassign_api::state::AppState;
use revassign_core::assignment::SeededRandom;
use revassign_db::service::ReviewService;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 10,
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 5,
        },
    }
}

/// Build the production router on top of the given pool, with a seeded
/// randomness source so reviewer picks are reproducible.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        reviews: ReviewService::new(pool, Arc::new(SeededRandom::new(7))),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a raw body with a JSON content type (used for malformed payloads).
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create team `core` with A (author), B and C active and D inactive.
pub async fn seed_core_team(pool: &PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/team/add",
        serde_json::json!({
            "team_name": "core",
            "members": [
                {"user_id": "A", "username": "Alice", "is_active": true},
                {"user_id": "B", "username": "Bob", "is_active": true},
                {"user_id": "C", "username": "Carol", "is_active": true},
                {"user_id": "D", "username": "Dave", "is_active": false},
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
}

/// Reviewer ids from a `{ "pr": ... }` body, sorted.
pub fn reviewers(json: &serde_json::Value) -> Vec<String> {
    let mut ids: Vec<String> = json["pr"]["assigned_reviewers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    ids.sort();
    ids
}
