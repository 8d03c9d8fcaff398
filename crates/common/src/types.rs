use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a beta signup row.
///
/// Wraps a UUID to provide type safety and prevent mixing up
/// signup IDs with other UUID-based identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignupId(Uuid);

impl SignupId {
    /// Creates a new random signup ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a signup ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SignupId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SignupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SignupId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<SignupId> for Uuid {
    fn from(id: SignupId) -> Self {
        id.0
    }
}

/// Unique identifier for a contact message row.
///
/// Returned to the caller as `messageId` on successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random message ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a message ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for MessageId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<MessageId> for Uuid {
    fn from(id: MessageId) -> Self {
        id.0
    }
}
