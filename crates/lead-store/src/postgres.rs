use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    BetaSignup, ContactMessage, MessageId, NewBetaSignup, NewContactMessage, Result, SignupId,
    StoreError, store::LeadStore,
};
use async_trait::async_trait;

/// PostgreSQL-backed lead store implementation.
#[derive(Clone)]
pub struct PostgresLeadStore {
    pool: PgPool,
}

impl PostgresLeadStore {
    /// Creates a new PostgreSQL lead store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_signup(row: PgRow) -> Result<BetaSignup> {
        Ok(BetaSignup {
            id: SignupId::from_uuid(row.try_get::<Uuid, _>("id")?),
            email: row.try_get("email")?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            source: row.try_get("source")?,
            user_agent: row.try_get("user_agent")?,
        })
    }
}

#[async_trait]
impl LeadStore for PostgresLeadStore {
    async fn find_signup_by_email(&self, email: &str) -> Result<Option<BetaSignup>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT id, email, created_at, source, user_agent
            FROM beta_signups
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_signup).transpose()
    }

    async fn insert_signup(&self, signup: NewBetaSignup) -> Result<BetaSignup> {
        let id = SignupId::new();
        let created_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO beta_signups (id, email, created_at, source, user_agent)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&signup.email)
        .bind(created_at)
        .bind(&signup.source)
        .bind(&signup.user_agent)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // A race past the handler's pre-check lands here as a unique
            // constraint violation.
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.constraint() == Some("beta_signups_email_key")
            {
                return StoreError::DuplicateEmail {
                    email: signup.email.clone(),
                };
            }
            StoreError::Database(e)
        })?;

        tracing::debug!(signup_id = %id, "inserted beta signup");

        Ok(BetaSignup {
            id,
            email: signup.email,
            created_at,
            source: signup.source,
            user_agent: signup.user_agent,
        })
    }

    async fn insert_contact_message(&self, message: NewContactMessage) -> Result<ContactMessage> {
        let row = message.into_row(MessageId::new());

        sqlx::query(
            r#"
            INSERT INTO contact_messages
                (id, name, email, subject, message, source, user_agent, ip_address, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(row.id.as_uuid())
        .bind(&row.name)
        .bind(&row.email)
        .bind(&row.subject)
        .bind(&row.message)
        .bind(&row.source)
        .bind(&row.user_agent)
        .bind(&row.ip_address)
        .bind(&row.status)
        .execute(&self.pool)
        .await?;

        tracing::debug!(message_id = %row.id, "inserted contact message");

        Ok(row)
    }
}
