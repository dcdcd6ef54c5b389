//! Conversion of domain errors into the JSON error envelope
//!
//! Every failure leaves the API as `{error, message, details?, timestamp}`.

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use fz_core::errors::{DomainError, ValidationError};
use fz_shared::{error_codes, ErrorResponse};

/// Message returned when an order was stored but its confirmation mail failed
pub const ORDER_CONFIRMATION_MESSAGE: &str =
    "Your order was placed, but the confirmation email could not be sent.";

/// Map a domain error to its HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, body) = match error {
        DomainError::Validation(validation) => {
            let mut body = ErrorResponse::new(error_codes::VALIDATION_ERROR, validation.to_string());
            if let ValidationError::MissingFields { fields } = validation {
                body = body.add_detail("missingFields", fields);
            }
            (StatusCode::BAD_REQUEST, body)
        }
        DomainError::Forbidden { message } => (
            StatusCode::FORBIDDEN,
            ErrorResponse::new(error_codes::FORBIDDEN, message.as_str()),
        ),
        DomainError::InvalidCode => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error_codes::INVALID_OTP, error.to_string()),
        ),
        DomainError::Delivery { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(error_codes::DELIVERY_FAILED, message.as_str()),
        ),
        DomainError::Persistence { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(error_codes::PERSISTENCE_FAILED, message.as_str()),
        ),
        DomainError::OrderConfirmation { order_id, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(error_codes::ORDER_CONFIRMATION_FAILED, ORDER_CONFIRMATION_MESSAGE)
                .add_detail("orderId", order_id),
        ),
    };

    if status.is_server_error() {
        log::error!("Request failed: {}", error);
    } else {
        log::warn!("Request rejected: {}", error);
    }

    HttpResponse::build(status).json(body)
}

/// Turn DTO validation failures into the same 400 a domain validation error gets
pub fn validation_error(errors: &ValidationErrors) -> DomainError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let (field, message) = fields
        .iter()
        .find_map(|(field, errs)| {
            errs.iter()
                .find_map(|e| e.message.as_ref())
                .map(|m| (field.to_string(), m.to_string()))
        })
        .unwrap_or_else(|| ("body".to_string(), "Invalid request data".to_string()));

    ValidationError::required(field, message).into()
}

/// Error handler for `web::JsonConfig`: malformed bodies get the 400 envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected malformed JSON body on {}: {}", req.path(), err);

    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::BAD_REQUEST,
        format!("Invalid request body: {}", err),
    ));

    actix_web::error::InternalError::from_response(err, response).into()
}

/// Default service: unknown routes get the 404 envelope
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        format!("Route {} {} not found", req.method(), req.path()),
    ))
}
