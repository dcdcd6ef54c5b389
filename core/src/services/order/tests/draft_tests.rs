//! Unit tests for order payload validation

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::order::{BillingDetails, OrderItem};
use crate::errors::ValidationError;
use crate::services::order::OrderDraft;

pub(super) fn complete_draft(user_id: Uuid) -> OrderDraft {
    OrderDraft {
        items: Some(vec![OrderItem {
            name: "Organic Apples".to_string(),
            quantity: 2,
            price: Decimal::new(350, 2),
        }]),
        address: Some("1 Market St".to_string()),
        payment_option: Some("cod".to_string()),
        delivery_method: Some("standard".to_string()),
        billing_details: Some(BillingDetails {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..BillingDetails::default()
        }),
        user_id: Some(user_id),
        total_amount: Some(Decimal::new(1200, 2)),
        delivery_fee: Some(Decimal::new(500, 2)),
    }
}

#[test]
fn test_complete_draft_converts() {
    let user_id = Uuid::new_v4();
    let order = complete_draft(user_id).into_new_order().unwrap();

    assert_eq!(order.user_id, user_id);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.total_amount, Decimal::new(1200, 2));
}

#[test]
fn test_empty_draft_lists_every_field_in_order() {
    let err = OrderDraft::default().into_new_order().unwrap_err();

    assert_eq!(
        err.fields(),
        vec![
            "items",
            "address",
            "paymentOption",
            "deliveryMethod",
            "billingDetails",
            "userId",
            "totalAmount",
            "deliveryFee"
        ]
    );
}

#[test]
fn test_missing_items_and_totals_are_named() {
    let mut draft = complete_draft(Uuid::new_v4());
    draft.items = None;
    draft.total_amount = None;

    let err = draft.into_new_order().unwrap_err();

    assert_eq!(err.fields(), vec!["items", "totalAmount"]);
    assert_eq!(
        err.to_string(),
        "Missing required order details: items, totalAmount"
    );
}

#[test]
fn test_missing_billing_is_named() {
    let mut draft = complete_draft(Uuid::new_v4());
    draft.billing_details = None;

    assert_eq!(
        draft.into_new_order().unwrap_err(),
        ValidationError::MissingFields {
            fields: vec!["billingDetails".to_string()]
        }
    );
}

#[test]
fn test_blank_strings_count_as_missing() {
    let mut draft = complete_draft(Uuid::new_v4());
    draft.address = Some(String::new());
    draft.payment_option = Some("  ".to_string());

    assert_eq!(draft.missing_fields(), vec!["address", "paymentOption"]);
}

#[test]
fn test_zero_amounts_are_present() {
    let mut draft = complete_draft(Uuid::new_v4());
    draft.total_amount = Some(Decimal::ZERO);
    draft.delivery_fee = Some(Decimal::ZERO);

    assert!(draft.missing_fields().is_empty());
    assert!(draft.into_new_order().is_ok());
}

#[test]
fn test_empty_item_list_is_present() {
    let mut draft = complete_draft(Uuid::new_v4());
    draft.items = Some(Vec::new());

    assert!(draft.missing_fields().is_empty());
}

#[test]
fn test_amounts_are_rounded_to_cents() {
    let mut draft = complete_draft(Uuid::new_v4());
    draft.items = Some(vec![OrderItem {
        name: "Honey".to_string(),
        quantity: 1,
        price: Decimal::new(2999, 3),
    }]);
    draft.total_amount = Some(Decimal::new(10999, 3));
    draft.delivery_fee = Some(Decimal::new(1005, 3));

    let order = draft.into_new_order().unwrap();

    assert_eq!(order.items[0].price, Decimal::new(300, 2));
    assert_eq!(order.total_amount, Decimal::new(1100, 2));
    assert_eq!(order.delivery_fee, Decimal::new(101, 2));
}
