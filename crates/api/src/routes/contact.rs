//! Contact form endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use common::MessageId;
use domain::ContactSubmission;
use lead_store::{LeadStore, NewContactMessage};
use serde::Serialize;

use crate::AppState;
use crate::error::ApiError;
use crate::routes::{client_ip, header_or};

const SEND_FAILED: &str = "Failed to send message. Please try again.";

#[derive(Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(rename = "messageId")]
    pub message_id: MessageId,
}

/// POST /api/contact — validate, sanitize, and persist a contact message.
///
/// No duplicate check: identical submissions create distinct rows.
#[tracing::instrument(skip(state, headers, body))]
pub async fn submit<S: LeadStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    headers: HeaderMap,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    let Json(body) = body?;
    let submission = ContactSubmission::parse(&body)?;

    let message = NewContactMessage {
        name: submission.name,
        email: submission.email,
        subject: submission.subject,
        message: submission.message,
        source: header_or(&headers, "referer", "direct").to_string(),
        user_agent: header_or(&headers, "user-agent", "unknown").to_string(),
        ip_address: client_ip(&headers),
    };

    let row = state
        .store
        .insert_contact_message(message)
        .await
        .map_err(|e| ApiError::persistence(SEND_FAILED, e))?;

    metrics::counter!("contact_messages_total").increment(1);
    tracing::info!(message_id = %row.id, email = %row.email, subject = %row.subject, "contact message submitted");

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            message: "Message sent successfully! We'll get back to you soon.",
            message_id: row.id,
        }),
    ))
}
