use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fz_core::domain::entities::order::{BillingDetails, OrderItem};
use fz_core::services::OrderDraft;

/// Checkout payload
///
/// Every field is optional on the wire so that the order service can report
/// all missing fields at once instead of failing on the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Option<Vec<OrderItem>>,
    pub address: Option<String>,
    pub payment_option: Option<String>,
    pub delivery_method: Option<String>,
    pub billing_details: Option<BillingDetails>,
    pub user_id: Option<Uuid>,
    pub total_amount: Option<Decimal>,
    pub delivery_fee: Option<Decimal>,
}

impl From<CreateOrderRequest> for OrderDraft {
    fn from(request: CreateOrderRequest) -> Self {
        OrderDraft {
            items: request.items,
            address: request.address,
            payment_option: request.payment_option,
            delivery_method: request.delivery_method,
            billing_details: request.billing_details,
            user_id: request.user_id,
            total_amount: request.total_amount,
            delivery_fee: request.delivery_fee,
        }
    }
}
