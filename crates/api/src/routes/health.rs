//! Health check endpoint.
//!
//! Liveness only: answers as soon as the server is up, without touching
//! the lead store.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /health — liveness probe for the landing page deploy checks.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "pawstify-leads",
    })
}
