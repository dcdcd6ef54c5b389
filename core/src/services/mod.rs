//! Business services containing domain logic and use cases.

pub mod mail;
pub mod order;
pub mod otp;
pub mod subscription;

mod timeout;

// Re-export commonly used types
pub use mail::{MailServiceTrait, MockMailService, TemplateError, TemplateRenderer};
pub use order::{OrderDraft, OrderService, OrderServiceConfig};
pub use otp::{
    InMemoryOtpStore, OtpService, OtpServiceConfig, OtpStoreTrait, SendOtpResult, VerifyOtpResult,
};
pub use subscription::{SubscriptionKind, SubscriptionService};
