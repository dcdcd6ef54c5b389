//! User repository trait defining the interface for user data persistence.
//!
//! The trait is the boundary between the domain services and whatever store
//! actually holds the user records. It is async-first and every method returns
//! a `Result` so that store failures surface as `DomainError::Persistence`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address (exact, case-sensitive match)
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this email
    /// * `Err(DomainError)` - Store failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Mark the user owning `email` as verified
    ///
    /// Creates a verified user when none exists yet, otherwise sets the flag on
    /// the existing record. Returns the stored user either way.
    async fn upsert_verified(&self, email: &str) -> Result<User, DomainError>;
}
