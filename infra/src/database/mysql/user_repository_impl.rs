//! MySQL implementation of the UserRepository trait.
//!
//! Users are keyed by their email address exactly as submitted. The upsert relies
//! on the unique key over `email`, so concurrent verifications of the same
//! address converge on a single row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fz_core::domain::entities::user::User;
use fz_core::errors::DomainError;
use fz_core::repositories::UserRepository;

const USER_COLUMNS: &str = "id, email, is_verified, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(column_error("id"))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::persistence(format!("Invalid user id: {}", e)))?,
            email: row.try_get("email").map_err(column_error("email"))?,
            is_verified: row.try_get("is_verified").map_err(column_error("is_verified"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column_error("updated_at"))?,
        })
    }

    async fn fetch_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find user by email"))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }
}

fn column_error(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::persistence(format!("Failed to get {}: {}", column, e))
}

fn query_error(action: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, action = action, "User query failed");
        DomainError::persistence(format!("Failed to {}", action))
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.fetch_by_email(email).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find user by id"))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn upsert_verified(&self, email: &str) -> Result<User, DomainError> {
        let now = Utc::now();

        let query = r#"
            INSERT INTO users (id, email, is_verified, created_at, updated_at)
            VALUES (?, ?, TRUE, ?, ?)
            ON DUPLICATE KEY UPDATE
                is_verified = TRUE,
                updated_at = VALUES(updated_at)
        "#;

        sqlx::query(query)
            .bind(Uuid::new_v4().to_string())
            .bind(email)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(query_error("upsert verified user"))?;

        self.fetch_by_email(email)
            .await?
            .ok_or_else(|| DomainError::persistence("User missing after upsert"))
    }
}
