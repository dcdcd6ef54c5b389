use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{SendOtpRequest, SendOtpResponse};
use crate::handlers::error::{handle_domain_error, validation_error};
use crate::routes::AppState;

use fz_core::repositories::{OrderRepository, UserRepository};
use fz_core::services::{MailServiceTrait, OtpStoreTrait, SendOtpResult};
use fz_shared::email::mask_email;

/// Handler for POST /api/auth/send-otp
///
/// Mails a 6-digit code to the given address.
///
/// # Request Body
///
/// ```json
/// { "email": "ada@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "OTP sent successfully", "otpSent": true }
/// ```
///
/// An address that is already verified also gets 200, with `otpSent: false`,
/// `otpVerified: true` and the user's id and email. No code is sent then.
pub async fn send_otp<U, O, M, S>(
    state: web::Data<AppState<U, O, M, S>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    M: MailServiceTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_domain_error(&validation_error(&errors));
    }

    let email = request.email.as_deref();
    log::info!(
        "Processing send_otp request for {}",
        email.map(mask_email).unwrap_or_default()
    );

    match state.otp_service.send_otp(email).await {
        Ok(SendOtpResult::Sent { .. }) => HttpResponse::Ok().json(SendOtpResponse::sent()),
        Ok(SendOtpResult::AlreadyVerified { user }) => {
            HttpResponse::Ok().json(SendOtpResponse::already_verified(&user))
        }
        Err(error) => handle_domain_error(&error),
    }
}
