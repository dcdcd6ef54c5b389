//! SMTP mail delivery
//!
//! Wraps `lettre::AsyncSmtpTransport<Tokio1Executor>`. Port 465 uses implicit
//! TLS, any other port negotiates STARTTLS.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use fz_core::domain::entities::email::EmailMessage;
use fz_core::services::MailServiceTrait;
use fz_shared::config::SmtpConfig;
use fz_shared::email::mask_email;

use crate::InfrastructureError;

const IMPLICIT_TLS_PORT: u16 = 465;

/// Mail service sending through an authenticated SMTP relay
pub struct SmtpMailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailService {
    /// Build the transport from the relay configuration
    ///
    /// No connection is opened here; the first send connects.
    pub fn new(config: &SmtpConfig) -> Result<Self, InfrastructureError> {
        let from: Mailbox = config
            .from_mailbox()
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("Invalid sender address: {}", e)))?;

        let relay = if config.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        };
        let builder = relay.map_err(|e| {
            InfrastructureError::Config(format!("Failed to configure SMTP relay: {}", e))
        })?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        tracing::info!(host = %config.host, port = config.port, "SMTP mail service configured");

        Ok(Self { transport, from })
    }

    fn build_message(&self, email: &EmailMessage) -> Result<Message, InfrastructureError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| InfrastructureError::Mail(format!("Invalid recipient address: {}", e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&email.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body.clone()),
                    ),
            )
            .map_err(|e| InfrastructureError::Mail(format!("Failed to build message: {}", e)))
    }

    async fn deliver(&self, email: &EmailMessage) -> Result<String, InfrastructureError> {
        let message = self.build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| InfrastructureError::Mail(format!("SMTP send failed: {}", e)))?;

        Ok(response.message().collect::<Vec<_>>().join(" "))
    }
}

#[async_trait]
impl MailServiceTrait for SmtpMailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        match self.deliver(message).await {
            Ok(message_id) => {
                tracing::debug!(to = %mask_email(&message.to), subject = %message.subject, "Mail accepted by relay");
                Ok(message_id)
            }
            Err(e) => {
                tracing::error!(to = %mask_email(&message.to), error = %e, "Mail delivery failed");
                Err(e.to_string())
            }
        }
    }
}
