//! Trait for mail delivery integration

use async_trait::async_trait;

use crate::domain::entities::email::EmailMessage;

/// Trait for the outgoing mail collaborator
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Deliver a message, returning the provider's message identifier
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String>;
}
