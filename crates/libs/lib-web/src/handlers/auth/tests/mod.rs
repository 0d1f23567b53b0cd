//! # Auth Handler Tests
//!
//! Test suite for the `/users` handlers, driven through the full router.


use crate::{create_router, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use lib_core::{create_pool, migrate, Config, DbPool, ErrorStatusMode};
use serde_json::Value;
use tower::ServiceExt;

/// Setup in-memory test database with schema
pub async fn setup_test_db() -> DbPool {
    let pool = create_pool("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    migrate(&pool).await.expect("Failed to run migrations");
    pool
}

/// Create test config
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 3333,
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret-key-must-be-at-least-32-characters-long!".to_string(),
        jwt_expiration_hours: 24,
        error_status_mode: ErrorStatusMode::Typed,
        cors_allowed_origins: Vec::new(),
    }
}

/// Config answering every error with 400
pub fn uniform_config() -> Config {
    Config {
        error_status_mode: ErrorStatusMode::Uniform,
        ..test_config()
    }
}

/// Create test app with routes
pub fn test_app(pool: DbPool, config: Config) -> Router {
    create_router(AppState::new(pool, config))
}

/// POST a raw body and return the status and parsed JSON body.
pub async fn post_raw(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

/// POST a JSON value and return the status and parsed JSON body.
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub fn alice_registration() -> Value {
    serde_json::json!({
        "name": "Alice Doe",
        "email": "alice@example.com",
        "password": "secret1",
        "confirmPassword": "secret1",
    })
}
