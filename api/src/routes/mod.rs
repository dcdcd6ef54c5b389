//! Route handlers and the state they share

pub mod auth;
pub mod health;
pub mod subscription;

use std::sync::Arc;

use fz_core::repositories::{OrderRepository, UserRepository};
use fz_core::services::{
    MailServiceTrait, OrderService, OtpService, OtpStoreTrait, SubscriptionService,
};

/// Application state that holds shared services
pub struct AppState<U, O, M, S>
where
    U: UserRepository,
    O: OrderRepository,
    M: MailServiceTrait,
    S: OtpStoreTrait,
{
    pub otp_service: Arc<OtpService<U, M, S>>,
    pub order_service: Arc<OrderService<U, O, M>>,
    pub subscription_service: Arc<SubscriptionService<M>>,
}
