//! Validation error types.

use thiserror::Error;

/// Errors produced while parsing a submission from a request body.
///
/// Every variant carries a user-facing message that names the offending
/// field; all of them map to a 400 response at the API layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is missing, not a JSON string, or empty after trimming.
    #[error("{0} is required")]
    Required(&'static str),

    /// Email failed the loose syntactic format check.
    #[error("Invalid email format")]
    InvalidEmail,

    /// Field exceeds its maximum length after sanitization.
    #[error("{label} must be less than {max} characters")]
    TooLong { label: &'static str, max: usize },

    /// Syntactically valid email from a disallowed provider. Beta access is
    /// Gmail-only by product decision.
    #[error("Please use a Gmail address for beta testing")]
    GmailRequired,
}
