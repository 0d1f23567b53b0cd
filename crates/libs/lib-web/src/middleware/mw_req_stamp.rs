//! # Request Stamping Middleware
//!
//! Tags every request with an id that the trace span, the request log and the
//! `X-Request-ID` response header share.
//!
//! An incoming `X-Request-ID` is reused when it is a short printable value, so
//! a proxy's id survives into our logs. Otherwise a UUID v4 is generated.
//!
//! Handlers can read the stamp via `Extension<RequestStamp>`.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

const MAX_FORWARDED_ID_LEN: usize = 128;

/// Request metadata for tracing and debugging.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Request identifier
    pub id: String,
    /// Time the request entered the service, used for the logged latency
    pub received_at: Instant,
}

impl RequestStamp {
    fn for_request(req: &Request) -> Self {
        let id = req
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| is_acceptable_id(v))
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self {
            id,
            received_at: Instant::now(),
        }
    }
}

fn is_acceptable_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_FORWARDED_ID_LEN
        && id.bytes().all(|b| b.is_ascii_graphic())
}

/// Request stamping middleware.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::for_request(&req);
    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    res
}
