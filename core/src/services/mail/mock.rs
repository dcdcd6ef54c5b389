//! Recording mail service for tests and local development

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::domain::entities::email::EmailMessage;

use super::traits::MailServiceTrait;

/// Mail service that keeps every message in memory instead of sending it
#[derive(Clone, Default)]
pub struct MockMailService {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    should_fail: Arc<AtomicBool>,
    delay: Option<Duration>,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that waits `delay` before answering, for deadline tests
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Make every subsequent send fail
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// All messages accepted so far, oldest first
    pub async fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().await.clone()
    }

    /// The most recent message addressed to `to`
    pub async fn last_message_to(&self, to: &str) -> Option<EmailMessage> {
        self.sent
            .lock()
            .await
            .iter()
            .rev()
            .find(|m| m.to == to)
            .cloned()
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("Mail service error".to_string());
        }

        let mut sent = self.sent.lock().await;
        sent.push(message.clone());
        Ok(format!("mock-mail-{}", sent.len()))
    }
}
