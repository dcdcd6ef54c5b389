//! Shared test fixtures: a fully wired app over in-memory collaborators

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use fz_api::routes::AppState;
use fz_core::domain::entities::user::User;
use fz_core::repositories::{MockOrderRepository, MockUserRepository};
use fz_core::services::{
    InMemoryOtpStore, MockMailService, OrderService, OrderServiceConfig, OtpService,
    OtpServiceConfig, SubscriptionService, TemplateRenderer,
};

pub type TestState =
    AppState<MockUserRepository, MockOrderRepository, MockMailService, InMemoryOtpStore>;

pub struct TestContext {
    pub users: Arc<MockUserRepository>,
    pub orders: Arc<MockOrderRepository>,
    pub mail: Arc<MockMailService>,
    pub store: Arc<InMemoryOtpStore>,
    pub state: web::Data<TestState>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_order_config(OrderServiceConfig::default())
    }

    pub fn with_order_config(order_config: OrderServiceConfig) -> Self {
        let users = Arc::new(MockUserRepository::new());
        let orders = Arc::new(MockOrderRepository::new());
        let mail = Arc::new(MockMailService::new());
        let store = Arc::new(InMemoryOtpStore::new());
        let renderer = Arc::new(TemplateRenderer::new().unwrap());

        let state = web::Data::new(AppState {
            otp_service: Arc::new(OtpService::new(
                users.clone(),
                mail.clone(),
                renderer.clone(),
                store.clone(),
                OtpServiceConfig::default(),
            )),
            order_service: Arc::new(OrderService::new(
                users.clone(),
                orders.clone(),
                mail.clone(),
                renderer.clone(),
                order_config,
            )),
            subscription_service: Arc::new(SubscriptionService::new(
                mail.clone(),
                renderer,
                Duration::from_secs(10),
            )),
        });

        Self {
            users,
            orders,
            mail,
            store,
            state,
        }
    }

    pub async fn verified_user(&self, email: &str) -> User {
        let mut user = User::new(email);
        user.verify();
        self.users.insert(user).await
    }
}

/// Build the production app over the context's state
macro_rules! init_app {
    ($ctx:expr) => {
        init_app!($ctx, None)
    };
    ($ctx:expr, $database:expr) => {
        actix_web::test::init_service(fz_api::app::create_app(
            $ctx.state.clone(),
            $database,
            fz_shared::Environment::Development,
            &fz_shared::ServerConfig::default(),
        ))
        .await
    };
}
