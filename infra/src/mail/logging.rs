//! Logging mail sender
//!
//! Stands in for the SMTP relay during development. Messages are written to the
//! log instead of being delivered, which makes OTP codes readable locally.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use fz_core::domain::entities::email::EmailMessage;
use fz_core::services::MailServiceTrait;
use fz_shared::email::mask_email;

/// Mail service that logs every message instead of sending it
#[derive(Clone, Default)]
pub struct LoggingMailService {
    /// Counter for tracking number of messages logged
    message_count: Arc<AtomicU64>,
}

impl LoggingMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages logged
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MailServiceTrait for LoggingMailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("log-mail-{}", count);

        info!(
            to = %mask_email(&message.to),
            subject = %message.subject,
            message_id = %message_id,
            "[DEV MAIL] {}",
            message.text_body
        );

        Ok(message_id)
    }
}
