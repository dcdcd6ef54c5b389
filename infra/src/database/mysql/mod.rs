//! MySQL implementations of the core repository traits

mod order_repository_impl;
mod user_repository_impl;

pub use order_repository_impl::MySqlOrderRepository;
pub use user_repository_impl::MySqlUserRepository;
