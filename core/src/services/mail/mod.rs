//! Mail collaborator interface and the messages the storefront sends
//!
//! Services never talk SMTP themselves. They render an `EmailMessage` with the
//! `TemplateRenderer` and hand it to a `MailServiceTrait` implementation.

mod mock;
pub mod renderer;
mod traits;

pub use mock::MockMailService;
pub use renderer::{TemplateError, TemplateRenderer};
pub use traits::MailServiceTrait;
