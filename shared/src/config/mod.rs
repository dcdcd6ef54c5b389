//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `smtp` - SMTP relay credentials for outgoing mail

pub mod database;
pub mod environment;
pub mod server;
pub mod smtp;

use serde::{Deserialize, Serialize};
use std::time::Duration;

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;
pub use smtp::SmtpConfig;

/// Order intake settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderConfig {
    /// Reject orders from users that have not confirmed their email
    pub require_verified_user: bool,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            require_verified_user: true,
        }
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// SMTP relay; `None` runs with the logging mail sender
    #[serde(default)]
    pub smtp: Option<SmtpConfig>,

    /// Order intake configuration
    #[serde(default)]
    pub order: OrderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Upper bound for a single mail or database call, in seconds
    #[serde(default = "default_collaborator_timeout_secs")]
    pub collaborator_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            smtp: None,
            order: OrderConfig::default(),
            logging: LoggingConfig::for_environment(env),
            collaborator_timeout_secs: default_collaborator_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_value(lookup("ENVIRONMENT"));

        Self {
            environment,
            server: ServerConfig::from_lookup(&lookup),
            database: DatabaseConfig::from_lookup(&lookup),
            smtp: SmtpConfig::from_lookup(&lookup),
            order: OrderConfig {
                require_verified_user: lookup("ORDER_REQUIRE_VERIFIED_USER")
                    .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "no"))
                    .unwrap_or(true),
            },
            logging: LoggingConfig::for_environment(environment),
            collaborator_timeout_secs: lookup("COLLABORATOR_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_collaborator_timeout_secs),
        }
    }

    /// Timeout applied to every mail and persistence call
    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_secs(self.collaborator_timeout_secs)
    }
}

fn default_collaborator_timeout_secs() -> u64 {
    10
}
