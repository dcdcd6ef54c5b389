pub mod order;
pub mod user;

pub use order::{MockOrderRepository, OrderRepository};
pub use user::{MockUserRepository, UserRepository};
