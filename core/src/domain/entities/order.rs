//! Order entity and its value types.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Decimal places kept for every monetary amount
pub const MONEY_SCALE: u32 = 2;

/// Round an amount to cents, half away from zero
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// A single line of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product name
    pub name: String,
    /// Number of units ordered
    #[serde(alias = "qty")]
    pub quantity: u32,
    /// Price of one unit
    #[serde(alias = "unitPrice")]
    pub price: Decimal,
}

/// Billing contact and address captured at checkout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingDetails {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    #[serde(alias = "regionState")]
    pub region: String,
    #[serde(alias = "postCode")]
    pub postal_code: String,
    pub country: String,
}

impl BillingDetails {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Single-line postal address
    pub fn postal_address(&self) -> String {
        [
            self.address.as_str(),
            self.city.as_str(),
            self.region.as_str(),
            self.postal_code.as_str(),
            self.country.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// A validated order that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    pub address: String,
    pub payment_option: String,
    pub delivery_method: String,
    pub billing_details: BillingDetails,
    pub user_id: Uuid,
    pub total_amount: Decimal,
    pub delivery_fee: Decimal,
}

/// A persisted order. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Identifier generated by the persistence layer
    pub id: Uuid,
    pub items: Vec<OrderItem>,
    pub address: String,
    pub payment_option: String,
    pub delivery_method: String,
    pub billing_details: BillingDetails,
    pub user_id: Uuid,
    pub total_amount: Decimal,
    pub delivery_fee: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Materialize a stored order from its draft and the generated identifier
    pub fn from_new(id: Uuid, order: NewOrder, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            items: order.items,
            address: order.address,
            payment_option: order.payment_option,
            delivery_method: order.delivery_method,
            billing_details: order.billing_details,
            user_id: order.user_id,
            total_amount: order.total_amount,
            delivery_fee: order.delivery_fee,
            created_at,
        }
    }

    /// Total without the delivery fee
    pub fn subtotal(&self) -> Decimal {
        self.total_amount - self.delivery_fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn sample_order() -> Order {
        Order::from_new(
            Uuid::new_v4(),
            NewOrder {
                items: vec![OrderItem {
                    name: "Organic Apples".to_string(),
                    quantity: 2,
                    price: dec("3.50"),
                }],
                address: "1 Market St".to_string(),
                payment_option: "cod".to_string(),
                delivery_method: "standard".to_string(),
                billing_details: BillingDetails::default(),
                user_id: Uuid::new_v4(),
                total_amount: dec("12.00"),
                delivery_fee: dec("5.00"),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_round_money_rounds_half_away_from_zero() {
        assert_eq!(round_money(dec("2.999")), dec("3.00"));
        assert_eq!(round_money(dec("1.005")), dec("1.01"));
        assert_eq!(round_money(dec("1.004")), dec("1.00"));
        assert_eq!(round_money(dec("0")), dec("0"));
    }

    #[test]
    fn test_subtotal_excludes_delivery_fee() {
        assert_eq!(sample_order().subtotal(), dec("7.00"));
    }

    #[test]
    fn test_item_accepts_legacy_field_names() {
        let item: OrderItem =
            serde_json::from_str(r#"{"name":"Milk","qty":3,"price":1.25}"#).unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.price, dec("1.25"));

        let item: OrderItem =
            serde_json::from_str(r#"{"name":"Milk","quantity":1,"unitPrice":2}"#).unwrap();
        assert_eq!(item.price, dec("2"));
    }

    #[test]
    fn test_billing_details_formatting() {
        let billing: BillingDetails = serde_json::from_str(
            r#"{"firstName":"Ada","lastName":"Lovelace","address":"12 Main Rd","city":"Leeds","regionState":"Yorkshire","postCode":"LS1","country":"UK"}"#,
        )
        .unwrap();

        assert_eq!(billing.full_name(), "Ada Lovelace");
        assert_eq!(billing.postal_address(), "12 Main Rd, Leeds, Yorkshire, LS1, UK");
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let json = serde_json::to_value(sample_order()).unwrap();
        assert!(json.get("paymentOption").is_some());
        assert!(json.get("deliveryFee").is_some());
        assert!(json.get("billingDetails").is_some());
    }
}
