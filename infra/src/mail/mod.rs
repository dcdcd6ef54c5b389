//! Mail delivery module
//!
//! Both senders implement `fz_core::services::MailServiceTrait`:
//! - `SmtpMailService` relays through an authenticated SMTP server
//! - `LoggingMailService` only logs, for development without a relay
//!
//! `ConfiguredMailService` picks one of them from the SMTP configuration.

mod logging;
mod smtp;

use async_trait::async_trait;

use fz_core::domain::entities::email::EmailMessage;
use fz_core::services::MailServiceTrait;
use fz_shared::config::SmtpConfig;

use crate::InfrastructureError;

pub use logging::LoggingMailService;
pub use smtp::SmtpMailService;

/// Mail sender selected at startup
pub enum ConfiguredMailService {
    Smtp(SmtpMailService),
    Logging(LoggingMailService),
}

impl ConfiguredMailService {
    /// SMTP when a relay is configured, the logging sender otherwise
    pub fn from_config(smtp: Option<&SmtpConfig>) -> Result<Self, InfrastructureError> {
        match smtp {
            Some(config) => Ok(Self::Smtp(SmtpMailService::new(config)?)),
            None => {
                tracing::warn!("SMTP_HOST not set, outgoing mail will only be logged");
                Ok(Self::Logging(LoggingMailService::new()))
            }
        }
    }
}

#[async_trait]
impl MailServiceTrait for ConfiguredMailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        match self {
            Self::Smtp(service) => service.send_email(message).await,
            Self::Logging(service) => service.send_email(message).await,
        }
    }
}
