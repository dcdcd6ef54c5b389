//! Configuration for the order service

use std::time::Duration;

/// Configuration for the order service
#[derive(Debug, Clone)]
pub struct OrderServiceConfig {
    /// Reject orders whose user is unknown or has not verified their email
    pub require_verified_user: bool,
    /// Upper bound for each user-store, order-store and mail call
    pub collaborator_timeout: Duration,
}

impl Default for OrderServiceConfig {
    fn default() -> Self {
        Self {
            require_verified_user: true,
            collaborator_timeout: Duration::from_secs(10),
        }
    }
}
