use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::error::{handle_domain_error, validation_error};
use crate::routes::AppState;

use fz_core::repositories::{OrderRepository, UserRepository};
use fz_core::services::{MailServiceTrait, OtpStoreTrait};

/// Handler for POST /api/auth/verify-otp
///
/// # Request Body
///
/// ```json
/// { "email": "ada@example.com", "otp": "482913" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "OTP verified successfully", "user": { "id": "…", "email": "ada@example.com" } }
/// ```
///
/// ## Errors
/// - 400 `Email and OTP are required`
/// - 400 `Invalid OTP` for a wrong, used or never issued code
pub async fn verify_otp<U, O, M, S>(
    state: web::Data<AppState<U, O, M, S>>,
    request: web::Json<VerifyOtpRequest>,
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

    match state
        .otp_service
        .verify_otp(request.email.as_deref(), request.otp.as_deref())
        .await
    {
        Ok(result) => HttpResponse::Ok().json(VerifyOtpResponse::verified(&result.user)),
        Err(error) => handle_domain_error(&error),
    }
}
