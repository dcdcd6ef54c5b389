//! Unvalidated order payload

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::order::{round_money, BillingDetails, NewOrder, OrderItem};
use crate::errors::ValidationError;

/// Order as submitted by the client; every field may still be missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub items: Option<Vec<OrderItem>>,
    pub address: Option<String>,
    pub payment_option: Option<String>,
    pub delivery_method: Option<String>,
    pub billing_details: Option<BillingDetails>,
    pub user_id: Option<Uuid>,
    pub total_amount: Option<Decimal>,
    pub delivery_fee: Option<Decimal>,
}

impl OrderDraft {
    /// Wire names of the missing fields, in request order
    ///
    /// Blank strings count as missing. Zero amounts are present.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let text = |value: &Option<String>| value.as_deref().map_or(true, |v| v.trim().is_empty());

        [
            ("items", self.items.is_none()),
            ("address", text(&self.address)),
            ("paymentOption", text(&self.payment_option)),
            ("deliveryMethod", text(&self.delivery_method)),
            ("billingDetails", self.billing_details.is_none()),
            ("userId", self.user_id.is_none()),
            ("totalAmount", self.total_amount.is_none()),
            ("deliveryFee", self.delivery_fee.is_none()),
        ]
        .into_iter()
        .filter(|(_, missing)| *missing)
        .map(|(name, _)| name)
        .collect()
    }

    /// Convert into a complete order, listing every missing field on failure
    ///
    /// Amounts are rounded to cents here so the stored, returned and mailed
    /// values are the same.
    pub fn into_new_order(self) -> Result<NewOrder, ValidationError> {
        let missing = self.missing_fields();

        match self {
            OrderDraft {
                items: Some(items),
                address: Some(address),
                payment_option: Some(payment_option),
                delivery_method: Some(delivery_method),
                billing_details: Some(billing_details),
                user_id: Some(user_id),
                total_amount: Some(total_amount),
                delivery_fee: Some(delivery_fee),
            } if missing.is_empty() => Ok(NewOrder {
                items: items
                    .into_iter()
                    .map(|item| OrderItem {
                        price: round_money(item.price),
                        ..item
                    })
                    .collect(),
                address,
                payment_option,
                delivery_method,
                billing_details,
                user_id,
                total_amount: round_money(total_amount),
                delivery_fee: round_money(delivery_fee),
            }),
            _ => Err(ValidationError::MissingFields {
                fields: missing.into_iter().map(String::from).collect(),
            }),
        }
    }
}
