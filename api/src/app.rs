//! Application factory
//!
//! Builds the Actix-web application from an already wired `AppState`. The
//! binary and the integration tests share this function, so the tests exercise
//! the same routes, middleware and error envelope as production. The database
//! pool is optional so the routes can run against in-memory repositories.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::handlers::error::{json_error_handler, not_found};
use crate::middleware::cors::create_cors;
use crate::routes::auth::{create_order::create_order, send_otp::send_otp, verify_otp::verify_otp};
use crate::routes::health::health_check;
use crate::routes::subscription::{subscribe, subscribe_seller};
use crate::routes::AppState;

use fz_core::repositories::{OrderRepository, UserRepository};
use fz_core::services::{MailServiceTrait, OtpStoreTrait};
use fz_infra::database::DatabasePool;
use fz_shared::config::{Environment, ServerConfig};

/// Create and configure the application with all dependencies
pub fn create_app<U, O, M, S>(
    app_state: web::Data<AppState<U, O, M, S>>,
    database: Option<web::Data<DatabasePool>>,
    environment: Environment,
    server: &ServerConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    M: MailServiceTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(server.max_payload_size)
        .error_handler(json_error_handler);

    let mut app = App::new().app_data(app_state).app_data(json_config);
    if let Some(database) = database {
        app = app.app_data(database);
    }

    app.wrap(create_cors(environment, server))
        .wrap(Logger::default())
        .route("/", web::get().to(welcome))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/send-otp", web::post().to(send_otp::<U, O, M, S>))
                        .route("/verify-otp", web::post().to(verify_otp::<U, O, M, S>))
                        .route("/create-order", web::post().to(create_order::<U, O, M, S>)),
                )
                .route("/subscribe", web::post().to(subscribe::<U, O, M, S>))
                .route("/subscribe-seller", web::post().to(subscribe_seller::<U, O, M, S>)),
        )
        .default_service(web::route().to(not_found))
}

/// Root greeting
async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome to foodzy backend api")
}
