//! HTTP middleware and conditional-request helpers.

use std::time::Duration;

use axum::body::Body;
use axum::middleware::Next;
use axum::response::Response;
use http::{header, HeaderMap, HeaderValue, Request};
use sha2::{Digest, Sha256};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

/// Strong ETag for a response body: quoted hex SHA-256 of the bytes.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("\"{}\"", hex::encode(hasher.finalize()))
}

/// Whether the request's `If-None-Match` matches the given ETag.
pub fn check_etag_match(request_headers: &HeaderMap, etag: &str) -> bool {
    let if_none_match = match request_headers.get(header::IF_NONE_MATCH) {
        Some(value) => value,
        None => return false,
    };
    let raw = match if_none_match.to_str() {
        Ok(raw) => raw,
        Err(_) => return false,
    };

    raw.split(',')
        .map(str::trim)
        .any(|candidate| candidate == "*" || candidate == etag)
}

/// Cache-Control for served pages. Everything is rendered per request, so
/// clients must revalidate; paired with ETags that keeps unchanged pages
/// at a 304.
pub fn create_cache_control_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache"),
    )
}

/// Request timeout for the docs server.
pub fn create_timeout_layer() -> TimeoutLayer {
    TimeoutLayer::new(Duration::from_secs(30))
}

/// Attach the standard security headers to every response.
pub async fn security_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        "x-content-type-options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert(
        "referrer-policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        "permissions-policy",
        HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
    );

    response
}
