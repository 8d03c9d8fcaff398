//! Route handlers and shared request helpers.

pub mod contact;
pub mod health;
pub mod metrics;
pub mod signup;

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;

/// Returns a header value as a string, or the default when the header is
/// absent or not valid UTF-8.
pub(crate) fn header_or<'a>(headers: &'a HeaderMap, name: &str, default: &'a str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(default)
}

/// Best-effort client IP: first entry of `x-forwarded-for`, then
/// `x-real-ip`, else `"unknown"`.
pub(crate) fn client_ip(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok())
        && let Some(first) = forwarded.split(',').next()
        && !first.trim().is_empty()
    {
        return first.trim().to_string();
    }
    header_or(headers, "x-real-ip", "unknown").to_string()
}

/// OPTIONS handler for both form endpoints: unconditional success with
/// permissive cross-origin headers, no business logic.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}
