//! Row models for the two lead tables.

use chrono::{DateTime, Utc};
use common::{MessageId, SignupId};
use serde::{Deserialize, Serialize};

/// Initial status of every stored contact message. Triage happens outside
/// this system; rows are never mutated here.
pub const STATUS_NEW: &str = "new";

/// Input for a new beta signup row. IDs and timestamps are generated by
/// the store on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBetaSignup {
    /// Sanitized, lowercased email. Unique across the table.
    pub email: String,
    /// Referrer URL reported by the client, `"direct"` when absent.
    pub source: String,
    /// Client user agent, `"unknown"` when absent.
    pub user_agent: String,
}

/// A persisted beta signup row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetaSignup {
    pub id: SignupId,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub source: String,
    pub user_agent: String,
}

/// Input for a new contact message row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub source: String,
    pub user_agent: String,
    pub ip_address: String,
}

/// A persisted contact message row. Status is always [`STATUS_NEW`] at
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub source: String,
    pub user_agent: String,
    pub ip_address: String,
    pub status: String,
}

impl NewContactMessage {
    /// Materializes the row that will be inserted, with a fresh ID and the
    /// fixed initial status.
    pub fn into_row(self, id: MessageId) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            source: self.source,
            user_agent: self.user_agent,
            ip_address: self.ip_address,
            status: STATUS_NEW.to_string(),
        }
    }
}
