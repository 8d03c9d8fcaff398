//! Persistence layer for the Pawstify leads backend.
//!
//! Two insert-only tables (`beta_signups`, `contact_messages`) behind the
//! [`LeadStore`] trait, with a PostgreSQL implementation for production and
//! an in-memory implementation for tests.

pub mod error;
pub mod memory;
pub mod model;
pub mod postgres;
pub mod store;

pub use common::{MessageId, SignupId};
pub use error::{Result, StoreError};
pub use memory::InMemoryLeadStore;
pub use model::{BetaSignup, ContactMessage, NewBetaSignup, NewContactMessage, STATUS_NEW};
pub use postgres::PostgresLeadStore;
pub use store::LeadStore;
