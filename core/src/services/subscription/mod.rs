//! Mailing-list subscription intake
//!
//! Nothing is stored: subscribing only sends the confirmation message for the
//! chosen list, so repeating a request simply sends it again.

use std::sync::Arc;

use fz_shared::email::{mask_email, non_blank};

use crate::domain::entities::email::EmailMessage;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::services::mail::{MailServiceTrait, TemplateError, TemplateRenderer};
use crate::services::timeout::with_timeout;

/// Mailing lists a visitor can join
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionKind {
    /// Storefront newsletter
    Newsletter,
    /// Updates for marketplace sellers
    SellerUpdates,
}

impl SubscriptionKind {
    /// Confirmation message for this list
    pub fn confirmation_email(
        self,
        renderer: &TemplateRenderer,
        to: &str,
    ) -> Result<EmailMessage, TemplateError> {
        match self {
            SubscriptionKind::Newsletter => renderer.newsletter_confirmation_email(to),
            SubscriptionKind::SellerUpdates => renderer.seller_updates_confirmation_email(to),
        }
    }

    /// Message returned to the caller when the confirmation cannot be sent
    pub fn failure_message(self) -> &'static str {
        match self {
            SubscriptionKind::Newsletter => "Failed to subscribe. Please try again later.",
            SubscriptionKind::SellerUpdates => {
                "Failed to subscribe to Nest Mart seller. Please try again later."
            }
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            SubscriptionKind::Newsletter => "newsletter",
            SubscriptionKind::SellerUpdates => "seller_updates",
        }
    }
}

/// Sends subscription confirmations
pub struct SubscriptionService<M: MailServiceTrait> {
    mail_service: Arc<M>,
    renderer: Arc<TemplateRenderer>,
    collaborator_timeout: std::time::Duration,
}

impl<M: MailServiceTrait> SubscriptionService<M> {
    pub fn new(
        mail_service: Arc<M>,
        renderer: Arc<TemplateRenderer>,
        collaborator_timeout: std::time::Duration,
    ) -> Self {
        Self {
            mail_service,
            renderer,
            collaborator_timeout,
        }
    }

    /// Confirm a subscription to `kind` by mail
    pub async fn subscribe(&self, email: Option<&str>, kind: SubscriptionKind) -> DomainResult<()> {
        let email = non_blank(email)
            .ok_or_else(|| ValidationError::required("email", "Email is required"))?;
        let masked = mask_email(email);

        let delivered = match kind.confirmation_email(&self.renderer, email) {
            Ok(message) => {
                with_timeout(
                    self.collaborator_timeout,
                    self.mail_service.send_email(&message),
                    || "mail delivery timed out".to_string(),
                )
                .await
            }
            Err(e) => Err(e.to_string()),
        };
        let message_id = delivered.map_err(|e| {
            tracing::error!(email = %masked, list = kind.as_str(), error = %e, event = "subscription_failed", "Failed to send subscription confirmation");
            DomainError::delivery(kind.failure_message())
        })?;

        tracing::info!(email = %masked, list = kind.as_str(), message_id = %message_id, event = "subscription_confirmed", "Subscription confirmation sent");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mail::MockMailService;
    use std::time::Duration;

    fn service() -> (Arc<MockMailService>, SubscriptionService<MockMailService>) {
        let mail = Arc::new(MockMailService::new());
        let renderer = Arc::new(TemplateRenderer::new().unwrap());
        let service = SubscriptionService::new(mail.clone(), renderer, Duration::from_secs(10));
        (mail, service)
    }

    #[tokio::test]
    async fn test_newsletter_sends_newsletter_confirmation() {
        let (mail, service) = service();

        service
            .subscribe(Some("a@x.com"), SubscriptionKind::Newsletter)
            .await
            .unwrap();

        let message = mail.last_message_to("a@x.com").await.unwrap();
        assert_eq!(message.subject, "Subscription Confirmation - Foodzy Newsletter");
    }

    #[tokio::test]
    async fn test_seller_updates_sends_seller_confirmation() {
        let (mail, service) = service();

        service
            .subscribe(Some("a@x.com"), SubscriptionKind::SellerUpdates)
            .await
            .unwrap();

        let message = mail.last_message_to("a@x.com").await.unwrap();
        assert_eq!(
            message.subject,
            "Subscription Confirmation - Nest Mart Seller Updates"
        );
    }

    #[tokio::test]
    async fn test_repeated_subscription_sends_again() {
        let (mail, service) = service();

        for _ in 0..2 {
            service
                .subscribe(Some("a@x.com"), SubscriptionKind::Newsletter)
                .await
                .unwrap();
        }

        assert_eq!(mail.sent_messages().await.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_email_is_rejected() {
        let (mail, service) = service();

        let result = service.subscribe(None, SubscriptionKind::Newsletter).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(mail.sent_messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_failure_message_depends_on_list() {
        let (mail, service) = service();
        mail.set_should_fail(true);

        match service.subscribe(Some("a@x.com"), SubscriptionKind::SellerUpdates).await {
            Err(DomainError::Delivery { message }) => assert_eq!(
                message,
                "Failed to subscribe to Nest Mart seller. Please try again later."
            ),
            other => panic!("Expected delivery error, got {:?}", other),
        }

        match service.subscribe(Some("a@x.com"), SubscriptionKind::Newsletter).await {
            Err(DomainError::Delivery { message }) => {
                assert_eq!(message, "Failed to subscribe. Please try again later.")
            }
            other => panic!("Expected delivery error, got {:?}", other),
        }
    }
}
