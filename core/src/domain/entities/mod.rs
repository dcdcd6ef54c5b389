//! Domain entities representing core business objects.

pub mod email;
pub mod order;
pub mod user;

// Re-export commonly used types
pub use email::EmailMessage;
pub use order::{BillingDetails, NewOrder, Order, OrderItem};
pub use user::User;
