use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use fz_api::app::create_app;
use fz_api::routes::AppState;
use fz_core::services::{
    InMemoryOtpStore, OrderService, OrderServiceConfig, OtpService, OtpServiceConfig,
    SubscriptionService, TemplateRenderer,
};
use fz_infra::database::{DatabasePool, MySqlOrderRepository, MySqlUserRepository};
use fz_infra::mail::ConfiguredMailService;
use fz_shared::AppConfig;

type ServerState =
    AppState<MySqlUserRepository, MySqlOrderRepository, ConfiguredMailService, InMemoryOtpStore>;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Loads .env before anything reads the environment
    let config = AppConfig::from_env();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.logging.level));

    info!("Starting Foodzy API Server ({})", config.environment);

    let db_pool = DatabasePool::new(&config.database)
        .await
        .context("failed to connect to the database")?;
    db_pool
        .run_migrations()
        .await
        .context("failed to run database migrations")?;

    let user_repo = Arc::new(MySqlUserRepository::new(db_pool.get_pool().clone()));
    let order_repo = Arc::new(MySqlOrderRepository::new(db_pool.get_pool().clone()));
    let mail_service = Arc::new(
        ConfiguredMailService::from_config(config.smtp.as_ref())
            .context("failed to configure mail delivery")?,
    );
    let otp_store = Arc::new(InMemoryOtpStore::new());
    let renderer = Arc::new(TemplateRenderer::new().context("failed to load mail templates")?);

    let timeout = config.collaborator_timeout();

    let state: web::Data<ServerState> = web::Data::new(AppState {
        otp_service: Arc::new(OtpService::new(
            user_repo.clone(),
            mail_service.clone(),
            renderer.clone(),
            otp_store,
            OtpServiceConfig {
                collaborator_timeout: timeout,
            },
        )),
        order_service: Arc::new(OrderService::new(
            user_repo,
            order_repo,
            mail_service.clone(),
            renderer.clone(),
            OrderServiceConfig {
                require_verified_user: config.order.require_verified_user,
                collaborator_timeout: timeout,
            },
        )),
        subscription_service: Arc::new(SubscriptionService::new(mail_service, renderer, timeout)),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let environment = config.environment;
    let server_config = config.server.clone();
    let database = web::Data::new(db_pool.clone());

    let mut server = HttpServer::new(move || {
        create_app(
            state.clone(),
            Some(database.clone()),
            environment,
            &server_config,
        )
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    db_pool.close().await;
    Ok(())
}
