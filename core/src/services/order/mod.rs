//! Order intake module
//!
//! Validates a checkout payload, checks that the buyer confirmed their email,
//! stores the order and mails a confirmation.

mod config;
mod draft;
mod service;

#[cfg(test)]
mod tests;

pub use config::OrderServiceConfig;
pub use draft::OrderDraft;
pub use service::OrderService;
