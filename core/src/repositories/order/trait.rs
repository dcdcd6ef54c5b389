//! Order repository trait defining the interface for order persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::order::{NewOrder, Order};
use crate::errors::DomainError;

/// Repository trait for Order entity persistence operations
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order
    ///
    /// # Returns
    /// * `Ok(Order)` - The stored order carrying its generated identifier
    /// * `Err(DomainError)` - Store failure; nothing was written
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError>;

    /// Find an order by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;
}
