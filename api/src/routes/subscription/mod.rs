//! Mailing-list subscription handlers

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::subscription::SubscribeRequest;
use crate::dto::MessageResponse;
use crate::handlers::error::{handle_domain_error, validation_error};
use crate::routes::AppState;

use fz_core::repositories::{OrderRepository, UserRepository};
use fz_core::services::{MailServiceTrait, OtpStoreTrait, SubscriptionKind};

/// Handler for POST /api/subscribe
pub async fn subscribe<U, O, M, S>(
    state: web::Data<AppState<U, O, M, S>>,
    request: web::Json<SubscribeRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    M: MailServiceTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    handle_subscription(&state, &request, SubscriptionKind::Newsletter).await
}

/// Handler for POST /api/subscribe-seller
pub async fn subscribe_seller<U, O, M, S>(
    state: web::Data<AppState<U, O, M, S>>,
    request: web::Json<SubscribeRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    M: MailServiceTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    handle_subscription(&state, &request, SubscriptionKind::SellerUpdates).await
}

async fn handle_subscription<U, O, M, S>(
    state: &AppState<U, O, M, S>,
    request: &SubscribeRequest,
    kind: SubscriptionKind,
) -> HttpResponse
where
    U: UserRepository,
    O: OrderRepository,
    M: MailServiceTrait,
    S: OtpStoreTrait,
{
    if let Err(errors) = request.validate() {
        return handle_domain_error(&validation_error(&errors));
    }

    match state
        .subscription_service
        .subscribe(request.email.as_deref(), kind)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Subscription successful!")),
        Err(error) => handle_domain_error(&error),
    }
}
