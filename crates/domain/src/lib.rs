//! Validation and submission parsing for the Pawstify leads backend.
//!
//! Pure string validators plus the declarative field schema that turns a raw
//! JSON request body into a sanitized, validated submission.

pub mod error;
pub mod submission;
pub mod validate;

pub use error::ValidationError;
pub use submission::{ContactSubmission, SignupSubmission};
pub use validate::{is_gmail_address, is_valid_email, sanitize_input};
