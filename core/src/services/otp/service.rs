//! Main OTP service implementation

use rand::Rng;
use std::sync::Arc;

use fz_shared::email::{mask_email, non_blank};

use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::mail::{MailServiceTrait, TemplateRenderer};
use crate::services::timeout::with_timeout;

use super::config::OtpServiceConfig;
use super::store::OtpStoreTrait;
use super::types::{SendOtpResult, VerifyOtpResult};

/// Number of digits in an issued code
pub const CODE_LENGTH: usize = 6;

const CODE_MIN: u32 = 100_000;
const CODE_MAX: u32 = 999_999;

/// OTP service issuing and checking email confirmation codes
pub struct OtpService<U: UserRepository, M: MailServiceTrait, S: OtpStoreTrait> {
    /// User store, consulted on issuance and upserted on verification
    user_repository: Arc<U>,
    /// Mail collaborator delivering the code
    mail_service: Arc<M>,
    /// Renders the code email
    renderer: Arc<TemplateRenderer>,
    /// Live codes keyed by email
    store: Arc<S>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<U: UserRepository, M: MailServiceTrait, S: OtpStoreTrait> OtpService<U, M, S> {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - User store implementation
    /// * `mail_service` - Mail delivery implementation
    /// * `renderer` - Mail template renderer
    /// * `store` - OTP store shared by every request
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        mail_service: Arc<M>,
        renderer: Arc<TemplateRenderer>,
        store: Arc<S>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            mail_service,
            renderer,
            store,
            config,
        }
    }

    /// Issue a code for `email` and mail it out
    ///
    /// This method:
    /// 1. Rejects an absent or blank email
    /// 2. Short-circuits when the email already belongs to a verified user
    /// 3. Generates a fresh code and stores it, replacing any earlier one
    /// 4. Sends the code by mail
    ///
    /// A failed send leaves the stored code in place.
    pub async fn send_otp(&self, email: Option<&str>) -> DomainResult<SendOtpResult> {
        let email = non_blank(email)
            .ok_or_else(|| ValidationError::required("email", "Email is required"))?;
        let masked = mask_email(email);

        let existing = with_timeout(
            self.config.collaborator_timeout,
            self.user_repository.find_by_email(email),
            || DomainError::persistence("User lookup timed out"),
        )
        .await
        .map_err(|e| {
            tracing::error!(email = %masked, error = %e, event = "user_lookup_failed", "Failed to look up user");
            e
        })?;

        if let Some(user) = existing.filter(|u| u.is_verified) {
            tracing::info!(email = %masked, event = "otp_skipped_verified", "User already verified, no OTP sent");
            return Ok(SendOtpResult::AlreadyVerified { user });
        }

        let code = Self::generate_code();

        self.store.put(email, &code).await.map_err(|e| {
            tracing::error!(email = %masked, error = %e, event = "otp_storage_failed", "Failed to store OTP");
            DomainError::persistence(format!("Failed to store OTP: {}", e))
        })?;

        tracing::info!(email = %masked, event = "otp_generated", "Generated new OTP");

        let delivered = match self.renderer.otp_email(email, &code) {
            Ok(message) => {
                with_timeout(
                    self.config.collaborator_timeout,
                    self.mail_service.send_email(&message),
                    || "mail delivery timed out".to_string(),
                )
                .await
            }
            Err(e) => Err(e.to_string()),
        };
        let message_id = delivered.map_err(|e| {
            tracing::error!(email = %masked, error = %e, event = "otp_delivery_failed", "Failed to send OTP");
            DomainError::delivery("Failed to send OTP")
        })?;

        tracing::info!(email = %masked, message_id = %message_id, event = "otp_sent", "OTP sent");

        Ok(SendOtpResult::Sent { message_id })
    }

    /// Check `code` against the live code for `email`
    ///
    /// On an exact match the code is consumed and the user is marked verified.
    /// A mismatch leaves the stored code untouched.
    pub async fn verify_otp(
        &self,
        email: Option<&str>,
        code: Option<&str>,
    ) -> DomainResult<VerifyOtpResult> {
        let (email, code) = match (non_blank(email), non_blank(code)) {
            (Some(email), Some(code)) => (email, code),
            (email, _) => {
                let field = if email.is_none() { "email" } else { "otp" };
                return Err(ValidationError::required(field, "Email and OTP are required").into());
            }
        };
        let masked = mask_email(email);

        let consumed = self.store.consume_if_matches(email, code).await.map_err(|e| {
            tracing::error!(email = %masked, error = %e, event = "otp_lookup_failed", "Failed to read OTP store");
            DomainError::persistence(format!("Failed to read OTP: {}", e))
        })?;

        if !consumed {
            tracing::warn!(email = %masked, event = "otp_invalid", "OTP verification failed");
            return Err(DomainError::InvalidCode);
        }

        let user = with_timeout(
            self.config.collaborator_timeout,
            self.user_repository.upsert_verified(email),
            || DomainError::persistence("User update timed out"),
        )
        .await
        .map_err(|e| {
            tracing::error!(email = %masked, error = %e, event = "user_upsert_failed", "OTP consumed but user update failed");
            e
        })?;

        tracing::info!(email = %masked, user_id = %user.id, event = "otp_verified", "OTP verified");

        Ok(VerifyOtpResult { user })
    }

    /// Uniformly random 6-digit code
    ///
    /// Uses the thread-local generator, not a CSPRNG. Abuse protection is
    /// expected from a rate limiter in front of the service.
    pub fn generate_code() -> String {
        rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX).to_string()
    }
}
