//! Mock implementation of OrderRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::order::{NewOrder, Order};
use crate::errors::DomainError;

use super::r#trait::OrderRepository;

/// In-memory order repository that records how often it was asked to persist
#[derive(Clone, Default)]
pub struct MockOrderRepository {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
    create_calls: Arc<AtomicUsize>,
    should_fail: Arc<AtomicBool>,
}

impl MockOrderRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a persistence error
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Number of `create` calls received, including failed ones
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Number of stored orders
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Whether no order has been stored
    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::persistence("Order store unavailable"));
        }

        let order = Order::from_new(Uuid::new_v4(), order, Utc::now());
        self.orders.write().await.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::persistence("Order store unavailable"));
        }
        Ok(self.orders.read().await.get(&id).cloned())
    }
}
