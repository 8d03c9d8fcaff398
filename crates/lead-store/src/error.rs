use thiserror::Error;

/// Errors that can occur when interacting with the lead store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique constraint on `beta_signups.email` rejected the insert.
    /// This is the authoritative duplicate check; the handler's pre-select
    /// is only a fast path.
    #[error("Email {email} is already registered")]
    DuplicateEmail { email: String },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for lead store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
