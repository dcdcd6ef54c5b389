//! Order repository module.

mod r#trait;
pub use r#trait::OrderRepository;

mod mock;
pub use mock::MockOrderRepository;
