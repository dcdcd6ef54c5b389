//! Mail template rendering
//!
//! Every message has an `.html` and a `.txt` template embedded with
//! `include_str!`. Tera escapes values in the `.html` templates and leaves the
//! `.txt` templates untouched.

use rust_decimal::Decimal;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::entities::email::EmailMessage;
use crate::domain::entities::order::{round_money, Order, OrderItem};

pub const OTP_SUBJECT: &str = "Your OTP Code";
pub const NEWSLETTER_SUBJECT: &str = "Subscription Confirmation - Foodzy Newsletter";
pub const SELLER_UPDATES_SUBJECT: &str = "Subscription Confirmation - Nest Mart Seller Updates";

/// A template could not be registered or rendered
#[derive(Error, Debug)]
#[error("Mail template failed: {0}")]
pub struct TemplateError(String);

impl From<tera::Error> for TemplateError {
    fn from(err: tera::Error) -> Self {
        TemplateError(err.to_string())
    }
}

/// Renders the storefront's outgoing messages
pub struct TemplateRenderer {
    engine: Tera,
}

#[derive(Serialize)]
struct ItemView<'a> {
    name: &'a str,
    quantity: u32,
    price: String,
}

impl<'a> From<&'a OrderItem> for ItemView<'a> {
    fn from(item: &'a OrderItem) -> Self {
        Self {
            name: &item.name,
            quantity: item.quantity,
            price: money(item.price),
        }
    }
}

impl TemplateRenderer {
    /// Register the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut engine = Tera::default();

        engine.add_raw_templates(vec![
            ("otp.html", include_str!("../../../templates/mail/otp.html")),
            ("otp.txt", include_str!("../../../templates/mail/otp.txt")),
            (
                "order_confirmation.html",
                include_str!("../../../templates/mail/order_confirmation.html"),
            ),
            (
                "order_confirmation.txt",
                include_str!("../../../templates/mail/order_confirmation.txt"),
            ),
            (
                "newsletter.html",
                include_str!("../../../templates/mail/newsletter.html"),
            ),
            (
                "newsletter.txt",
                include_str!("../../../templates/mail/newsletter.txt"),
            ),
            (
                "seller_updates.html",
                include_str!("../../../templates/mail/seller_updates.html"),
            ),
            (
                "seller_updates.txt",
                include_str!("../../../templates/mail/seller_updates.txt"),
            ),
        ])?;

        Ok(Self { engine })
    }

    /// One-time password delivery
    pub fn otp_email(&self, to: &str, code: &str) -> Result<EmailMessage, TemplateError> {
        let mut context = Context::new();
        context.insert("code", code);

        self.render(to, OTP_SUBJECT, "otp", &context)
    }

    /// Order confirmation listing every item, the totals and the billing details
    pub fn order_confirmation_email(
        &self,
        to: &str,
        order: &Order,
    ) -> Result<EmailMessage, TemplateError> {
        let billing = &order.billing_details;
        let items: Vec<ItemView<'_>> = order.items.iter().map(ItemView::from).collect();

        let mut context = Context::new();
        context.insert("name", &billing.full_name());
        context.insert("order_id", &order.id.to_string());
        context.insert("items", &items);
        context.insert("subtotal", &money(order.subtotal()));
        context.insert("delivery_fee", &money(order.delivery_fee));
        context.insert("total", &money(order.total_amount));
        context.insert("address", &billing.postal_address());
        context.insert("email", to);
        context.insert("delivery_method", &order.delivery_method);
        context.insert("payment_option", &order.payment_option);

        self.render(
            to,
            &order_confirmation_subject(order),
            "order_confirmation",
            &context,
        )
    }

    /// Newsletter subscription confirmation
    pub fn newsletter_confirmation_email(&self, to: &str) -> Result<EmailMessage, TemplateError> {
        self.render(to, NEWSLETTER_SUBJECT, "newsletter", &Context::new())
    }

    /// Seller-updates subscription confirmation
    pub fn seller_updates_confirmation_email(
        &self,
        to: &str,
    ) -> Result<EmailMessage, TemplateError> {
        self.render(to, SELLER_UPDATES_SUBJECT, "seller_updates", &Context::new())
    }

    fn render(
        &self,
        to: &str,
        subject: &str,
        template: &str,
        context: &Context,
    ) -> Result<EmailMessage, TemplateError> {
        let text_body = self.engine.render(&format!("{template}.txt"), context)?;
        let html_body = self.engine.render(&format!("{template}.html"), context)?;

        Ok(EmailMessage::new(to, subject, text_body, html_body))
    }
}

/// Subject line of the order confirmation
pub fn order_confirmation_subject(order: &Order) -> String {
    format!("Your Foodzy Order Confirmation - #{}", order.id)
}

/// Cents with two digits, e.g. `3.00`
fn money(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}
