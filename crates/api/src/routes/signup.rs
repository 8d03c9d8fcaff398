//! Beta signup endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use domain::SignupSubmission;
use lead_store::{LeadStore, NewBetaSignup, StoreError};
use serde::Serialize;

use crate::AppState;
use crate::error::ApiError;
use crate::routes::header_or;

const ALREADY_REGISTERED: &str = "This email is already registered";
const REGISTER_FAILED: &str = "Failed to register. Please try again.";

#[derive(Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/signup — validate a Gmail address and register it for the beta.
///
/// The existence pre-check is a fast-path only; a concurrent request racing
/// past it is caught by the unique constraint and mapped to the same 409.
#[tracing::instrument(skip(state, headers, body))]
pub async fn submit<S: LeadStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    headers: HeaderMap,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let Json(body) = body?;
    let submission = SignupSubmission::parse(&body)?;

    let existing = state
        .store
        .find_signup_by_email(&submission.email)
        .await
        .map_err(|e| ApiError::persistence(REGISTER_FAILED, e))?;
    if existing.is_some() {
        return Err(ApiError::Conflict(ALREADY_REGISTERED.to_string()));
    }

    let signup = NewBetaSignup {
        email: submission.email,
        source: header_or(&headers, "referer", "direct").to_string(),
        user_agent: header_or(&headers, "user-agent", "unknown").to_string(),
    };

    match state.store.insert_signup(signup).await {
        Ok(row) => {
            metrics::counter!("beta_signups_total").increment(1);
            tracing::info!(signup_id = %row.id, email = %row.email, "beta signup registered");
            Ok((
                StatusCode::CREATED,
                Json(SignupResponse {
                    success: true,
                    message: "Successfully registered! Check your Gmail for demo access.",
                }),
            ))
        }
        Err(StoreError::DuplicateEmail { .. }) => {
            Err(ApiError::Conflict(ALREADY_REGISTERED.to_string()))
        }
        Err(e) => Err(ApiError::persistence(REGISTER_FAILED, e)),
    }
}
