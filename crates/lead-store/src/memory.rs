use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    BetaSignup, ContactMessage, MessageId, NewBetaSignup, NewContactMessage, Result, SignupId,
    StoreError, store::LeadStore,
};

/// In-memory lead store implementation for testing.
///
/// Stores rows in memory and provides the same interface as the PostgreSQL
/// implementation, including the unique email constraint on signups.
#[derive(Clone, Default)]
pub struct InMemoryLeadStore {
    signups: Arc<RwLock<Vec<BetaSignup>>>,
    messages: Arc<RwLock<Vec<ContactMessage>>>,
}

impl InMemoryLeadStore {
    /// Creates a new empty in-memory lead store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of signup rows stored.
    pub async fn signup_count(&self) -> usize {
        self.signups.read().await.len()
    }

    /// Returns the total number of contact message rows stored.
    pub async fn message_count(&self) -> usize {
        self.messages.read().await.len()
    }

    /// Looks up a stored contact message by ID.
    pub async fn get_message(&self, id: MessageId) -> Option<ContactMessage> {
        self.messages.read().await.iter().find(|m| m.id == id).cloned()
    }

    /// Clears all stored rows.
    pub async fn clear(&self) {
        self.signups.write().await.clear();
        self.messages.write().await.clear();
    }
}

#[async_trait]
impl LeadStore for InMemoryLeadStore {
    async fn find_signup_by_email(&self, email: &str) -> Result<Option<BetaSignup>> {
        let signups = self.signups.read().await;
        Ok(signups.iter().find(|s| s.email == email).cloned())
    }

    async fn insert_signup(&self, signup: NewBetaSignup) -> Result<BetaSignup> {
        let mut signups = self.signups.write().await;

        // Unique constraint simulation: the write lock makes this atomic,
        // matching what the database constraint guarantees in production.
        if signups.iter().any(|s| s.email == signup.email) {
            return Err(StoreError::DuplicateEmail {
                email: signup.email,
            });
        }

        let row = BetaSignup {
            id: SignupId::new(),
            email: signup.email,
            created_at: Utc::now(),
            source: signup.source,
            user_agent: signup.user_agent,
        };
        signups.push(row.clone());
        Ok(row)
    }

    async fn insert_contact_message(&self, message: NewContactMessage) -> Result<ContactMessage> {
        let row = message.into_row(MessageId::new());
        self.messages.write().await.push(row.clone());
        Ok(row)
    }
}
