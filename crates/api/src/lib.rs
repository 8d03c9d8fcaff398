//! HTTP API server for the Pawstify landing page backend.
//!
//! Two JSON endpoints (beta signup, contact form) over the lead store,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::{Method, header};
use axum::routing::{get, post};
use lead_store::LeadStore;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state accessible from all handlers.
pub struct AppState<S: LeadStore> {
    pub store: S,
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: LeadStore + Clone + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/api/signup",
            post(routes::signup::submit::<S>).options(routes::preflight),
        )
        .route(
            "/api/contact",
            post(routes::contact::submit::<S>).options(routes::preflight),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
