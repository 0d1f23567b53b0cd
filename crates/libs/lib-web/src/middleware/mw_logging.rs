//! # Request/Response Logging Middleware
//!
//! Structured logging for HTTP requests and responses, correlated by the
//! request id from [`RequestStamp`](super::RequestStamp).
//!
//! This middleware logs:
//! - Request method, path, query params, user agent, client IP
//! - Request headers at debug level, with credentials redacted
//! - Response status and duration
//!
//! Bodies are never logged. The auth endpoints carry plaintext passwords and
//! are flagged `sensitive` in the request line.

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Headers whose values are replaced before logging
const SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "cookie",
    "x-api-key",
    "x-auth-token",
];

/// Endpoints whose payloads contain credentials
const SENSITIVE_ENDPOINTS: &[&str] = &["/users/login", "/users/register"];

const REDACTED: &str = "***REDACTED***";

pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(|q| q.to_string());

    let (request_id, received_at) = req
        .extensions()
        .get::<super::RequestStamp>()
        .map(|s| (s.id.clone(), s.received_at))
        .unwrap_or_else(|| ("unknown".to_string(), Instant::now()));

    let sensitive = is_sensitive_path(&path);

    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            if is_sensitive_header(name.as_str()) {
                Some((name.to_string(), REDACTED.to_string()))
            } else {
                value.to_str().ok().map(|v| (name.to_string(), v.to_string()))
            }
        })
        .collect();

    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let client_ip = req
        .headers()
        .get("x-forwarded-for")
        .or_else(|| req.headers().get("x-real-ip"))
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        query = ?query,
        user_agent = ?user_agent,
        client_ip = ?client_ip,
        sensitive,
        "[REQUEST] {} {}",
        method,
        path
    );

    debug!(request_id = %request_id, headers = ?headers, "[REQUEST HEADERS]");

    let response = next.run(req).await;

    let duration_ms = received_at.elapsed().as_millis();
    let status = response.status();

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "[RESPONSE] {} {} -> {} ({}ms) [SERVER ERROR]",
            method,
            path,
            status.as_u16(),
            duration_ms
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "[RESPONSE] {} {} -> {} ({}ms) [CLIENT ERROR]",
            method,
            path,
            status.as_u16(),
            duration_ms
        );
    } else {
        info!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "[RESPONSE] {} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            duration_ms
        );
    }

    response
}

fn is_sensitive_path(path: &str) -> bool {
    SENSITIVE_ENDPOINTS.iter().any(|ep| path.starts_with(ep))
}

fn is_sensitive_header(name: &str) -> bool {
    let name = name.to_lowercase();
    SENSITIVE_HEADERS.iter().any(|h| name.contains(h))
}
