//! The lead store abstraction.

use async_trait::async_trait;

use crate::{BetaSignup, ContactMessage, NewBetaSignup, NewContactMessage, Result};

/// Insert/select interface over the two lead tables.
///
/// Implementations are insert-only from the application's point of view:
/// nothing here updates or deletes rows. Exactly one insert is attempted per
/// call; retries are the caller's concern (in practice the browser's).
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Looks up a signup by its (lowercased) email address.
    ///
    /// Used by the signup handler as a fast-path duplicate check. The unique
    /// constraint on the table remains the source of truth: two concurrent
    /// requests can both see `None` here and only one insert will win.
    async fn find_signup_by_email(&self, email: &str) -> Result<Option<BetaSignup>>;

    /// Inserts a beta signup row, returning the stored row.
    ///
    /// Fails with [`StoreError::DuplicateEmail`](crate::StoreError) when the
    /// email is already registered.
    async fn insert_signup(&self, signup: NewBetaSignup) -> Result<BetaSignup>;

    /// Inserts a contact message row with status `"new"`, returning the
    /// stored row. No uniqueness applies; identical submissions create
    /// distinct rows.
    async fn insert_contact_message(&self, message: NewContactMessage) -> Result<ContactMessage>;
}
