//! Types for OTP service results

use crate::domain::entities::user::User;

/// Outcome of an issuance request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOtpResult {
    /// A fresh code was stored and handed to the mail service
    Sent {
        /// Identifier returned by the mail provider
        message_id: String,
    },
    /// The email already belongs to a verified user; nothing was sent
    AlreadyVerified { user: User },
}

impl SendOtpResult {
    /// Whether a code went out
    pub fn otp_sent(&self) -> bool {
        matches!(self, SendOtpResult::Sent { .. })
    }
}

/// Outcome of a successful verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOtpResult {
    /// The user record after it was marked verified
    pub user: User,
}
