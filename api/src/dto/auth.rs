use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use fz_core::domain::entities::user::User;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Address the code is mailed to; any non-empty value is accepted
    #[validate(
        required(message = "Email is required"),
        length(min = 1, message = "Email is required")
    )]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(
        required(message = "Email and OTP are required"),
        length(min = 1, message = "Email and OTP are required")
    )]
    pub email: Option<String>,

    /// The 6-digit code from the email, compared as an exact string
    #[validate(
        required(message = "Email and OTP are required"),
        length(min = 1, message = "Email and OTP are required")
    )]
    pub otp: Option<String>,
}

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpResponse {
    pub message: String,
    pub otp_sent: bool,
    /// Present only when the address was already verified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

impl SendOtpResponse {
    pub fn sent() -> Self {
        Self {
            message: "OTP sent successfully".to_string(),
            otp_sent: true,
            otp_verified: None,
            user: None,
        }
    }

    pub fn already_verified(user: &User) -> Self {
        Self {
            message: "User already verified. No OTP sent.".to_string(),
            otp_sent: false,
            otp_verified: Some(true),
            user: Some(user.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub message: String,
    pub user: UserSummary,
}

impl VerifyOtpResponse {
    pub fn verified(user: &User) -> Self {
        Self {
            message: "OTP verified successfully".to_string(),
            user: user.into(),
        }
    }
}
