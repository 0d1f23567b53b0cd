//! # Routes
//!
//! Router assembly: the `/users` API, health check, fallback and the
//! middleware stack.

use axum::{
    http::{HeaderValue, Request, Response, StatusCode},
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, Span};

use crate::handlers;
use crate::middleware::{log_requests, stamp_req, RequestStamp};
use crate::server::AppState;

/// Routes mounted under `/users`.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    info!("[ROUTE SETUP] Registering HTTP routes...");
    Router::new()
        .nest("/users", user_routes())
        .route("/health", get(|| async { "OK" }))
        .fallback(|| async {
            info!("[404 HANDLER] Unmatched route - returning 404");
            (StatusCode::NOT_FOUND, "Route not found")
        })
        .with_state(state)
        // Layers run outermost-last: cors → stamp → trace → logging → handler
        .layer(middleware::from_fn(log_requests))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_request(|_request: &Request<_>, _span: &Span| {
                    // Request lines are written by log_requests
                })
                .on_response(|_response: &Response<_>, _latency: Duration, _span: &Span| {})
                .on_failure(|error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                    tracing::error!(
                        error = ?error,
                        latency_ms = latency.as_millis(),
                        "[HTTP FAILURE]"
                    );
                }),
        )
        .layer(middleware::from_fn(stamp_req))
        .layer(cors)
}

/// Any origin unless an allow-list is configured.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
