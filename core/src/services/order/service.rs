//! Main order service implementation

use std::sync::Arc;

use fz_shared::email::mask_email;

use crate::domain::entities::order::Order;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{OrderRepository, UserRepository};
use crate::services::mail::{MailServiceTrait, TemplateRenderer};
use crate::services::timeout::with_timeout;

use super::config::OrderServiceConfig;
use super::draft::OrderDraft;

const UNVERIFIED_MESSAGE: &str =
    "User email not verified. Please verify your email before placing an order.";

/// Order service storing orders and mailing confirmations
pub struct OrderService<U: UserRepository, O: OrderRepository, M: MailServiceTrait> {
    user_repository: Arc<U>,
    order_repository: Arc<O>,
    mail_service: Arc<M>,
    renderer: Arc<TemplateRenderer>,
    config: OrderServiceConfig,
}

impl<U: UserRepository, O: OrderRepository, M: MailServiceTrait> OrderService<U, O, M> {
    /// Create a new order service
    pub fn new(
        user_repository: Arc<U>,
        order_repository: Arc<O>,
        mail_service: Arc<M>,
        renderer: Arc<TemplateRenderer>,
        config: OrderServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            order_repository,
            mail_service,
            renderer,
            config,
        }
    }

    /// Validate, persist and confirm an order
    ///
    /// # Returns
    ///
    /// * `Ok(Order)` - The stored order with its generated identifier
    /// * `Err(DomainError::Validation)` - Required fields are missing
    /// * `Err(DomainError::Forbidden)` - The buyer has not verified their email
    /// * `Err(DomainError::Persistence)` - The order could not be stored
    /// * `Err(DomainError::OrderConfirmation)` - Stored, but the confirmation mail failed
    pub async fn create_order(&self, draft: OrderDraft) -> DomainResult<Order> {
        let new_order = draft.into_new_order().map_err(|e| {
            tracing::warn!(missing = ?e.fields(), event = "order_rejected_missing_fields", "Order is missing required fields");
            e
        })?;

        let user = self.find_user(new_order.user_id).await?;

        if self.config.require_verified_user && !user.as_ref().map_or(false, |u| u.is_verified) {
            tracing::warn!(user_id = %new_order.user_id, event = "order_rejected_unverified", "Order rejected for unverified user");
            return Err(DomainError::Forbidden {
                message: UNVERIFIED_MESSAGE.to_string(),
            });
        }

        let order = with_timeout(
            self.config.collaborator_timeout,
            self.order_repository.create(new_order),
            || DomainError::persistence("Order store timed out"),
        )
        .await
        .map_err(|e| {
            tracing::error!(error = %e, event = "order_persist_failed", "Failed to store order");
            e
        })?;

        tracing::info!(order_id = %order.id, user_id = %order.user_id, event = "order_created", "Order stored");

        let Some(user) = user else {
            tracing::info!(order_id = %order.id, event = "order_confirmation_skipped", "No user on record, confirmation not sent");
            return Ok(order);
        };

        self.send_confirmation(&user, &order).await?;

        Ok(order)
    }

    async fn find_user(&self, user_id: uuid::Uuid) -> DomainResult<Option<User>> {
        with_timeout(
            self.config.collaborator_timeout,
            self.user_repository.find_by_id(user_id),
            || DomainError::persistence("User lookup timed out"),
        )
        .await
        .map_err(|e| {
            tracing::error!(user_id = %user_id, error = %e, event = "user_lookup_failed", "Failed to look up user");
            e
        })
    }

    async fn send_confirmation(&self, user: &User, order: &Order) -> DomainResult<()> {
        let masked = mask_email(&user.email);
        let delivered = match self.renderer.order_confirmation_email(&user.email, order) {
            Ok(message) => {
                with_timeout(
                    self.config.collaborator_timeout,
                    self.mail_service.send_email(&message),
                    || "mail delivery timed out".to_string(),
                )
                .await
            }
            Err(e) => Err(e.to_string()),
        };

        match delivered {
            Ok(message_id) => {
                tracing::info!(order_id = %order.id, email = %masked, message_id = %message_id, event = "order_confirmation_sent", "Order confirmation sent");
                Ok(())
            }
            Err(e) => {
                tracing::error!(order_id = %order.id, email = %masked, error = %e, event = "order_confirmation_failed", "Order stored but confirmation email failed");
                Err(DomainError::OrderConfirmation {
                    order_id: order.id,
                    message: e,
                })
            }
        }
    }
}
