use actix_web::{web, HttpResponse};

use crate::dto::order::CreateOrderRequest;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use fz_core::repositories::{OrderRepository, UserRepository};
use fz_core::services::{MailServiceTrait, OtpStoreTrait};

/// Handler for POST /api/auth/create-order
///
/// Stores the order and mails a confirmation to the buyer. Responds 201 with
/// the stored order, including its generated `id` and `createdAt`.
///
/// ## Errors
/// - 400 with `details.missingFields` listing every absent field
/// - 403 when the buyer has not verified their email
/// - 500 `ORDER_CONFIRMATION_FAILED` with `details.orderId` when the order was
///   stored but the confirmation could not be sent
pub async fn create_order<U, O, M, S>(
    state: web::Data<AppState<U, O, M, S>>,
    request: web::Json<CreateOrderRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    M: MailServiceTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    match state.order_service.create_order(request.into_inner().into()).await {
        Ok(order) => {
            log::info!("Order {} created for user {}", order.id, order.user_id);
            HttpResponse::Created().json(order)
        }
        Err(error) => handle_domain_error(&error),
    }
}
