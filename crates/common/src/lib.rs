//! Shared types for the Pawstify leads backend.

pub mod types;

pub use types::{MessageId, SignupId};
