//! Shared utilities and common types for the Foodzy server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error envelope returned by every endpoint
//! - Email helpers (presence checks, masking for logs)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, LoggingConfig, OrderConfig, ServerConfig, SmtpConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::email;
