//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::ValidationError;
use lead_store::StoreError;

/// API-level error type that maps to HTTP responses.
///
/// Every error body has the shape `{ "success": false, "error": <string> }`.
#[derive(Debug)]
pub enum ApiError {
    /// Request failed validation (missing, malformed, oversized, or
    /// policy-disallowed field). Always 400.
    Validation(ValidationError),
    /// Request body was not parseable as JSON. Always 400; the parser
    /// detail is logged, never returned.
    MalformedBody,
    /// Duplicate unique key. Always 409.
    Conflict(String),
    /// The datastore was unreachable or rejected the write. Always 500;
    /// `message` is the generic text returned to the caller, the sqlx
    /// detail is only logged.
    Persistence {
        message: &'static str,
        source: StoreError,
    },
}

impl ApiError {
    /// Wraps a store error with the endpoint's generic user-facing message.
    pub fn persistence(message: &'static str, source: StoreError) -> Self {
        ApiError::Persistence { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::MalformedBody => {
                (StatusCode::BAD_REQUEST, "Invalid JSON body".to_string())
            }
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Persistence { message, source } => {
                tracing::error!(error = %source, "lead store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        let body = serde_json::json!({ "success": false, "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        tracing::debug!(error = %err, "rejected unparseable request body");
        ApiError::MalformedBody
    }
}
