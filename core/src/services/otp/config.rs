//! Configuration for the OTP service

use std::time::Duration;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Upper bound for each user-store and mail call
    pub collaborator_timeout: Duration,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            collaborator_timeout: Duration::from_secs(10),
        }
    }
}
