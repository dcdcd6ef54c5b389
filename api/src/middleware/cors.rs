//! CORS middleware configuration for cross-origin requests.
//!
//! The storefront is a browser client served from another origin. Development
//! accepts any origin; staging and production accept only the configured list.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use fz_shared::config::{Environment, ServerConfig};

/// Creates a CORS middleware instance configured for the given environment.
pub fn create_cors(environment: Environment, server: &ServerConfig) -> Cors {
    if environment.is_development() {
        create_development_cors(server.cors_max_age)
    } else {
        create_restricted_cors(&server.allowed_origins, server.cors_max_age)
    }
}

/// Permissive configuration for local work against the storefront dev server.
fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
}

fn create_restricted_cors(allowed_origins: &[String], max_age: usize) -> Cors {
    log::info!("Configuring CORS for {} allowed origin(s)", allowed_origins.len());

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(max_age);

    for origin in allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}
