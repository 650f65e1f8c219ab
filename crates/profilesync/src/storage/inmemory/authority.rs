use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use profilesync_core::customer::{Customer, CustomerId};
use profilesync_core::storage::{AuthoritativeStore, Result};

/// In-memory authoritative store for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthority {
    customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
}

impl InMemoryAuthority {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a customer record.
    pub async fn insert(&self, customer: Customer) {
        self.customers
            .write()
            .await
            .insert(customer.id.clone(), customer);
    }

    /// Overwrites a single customer's loyalty points, simulating the
    /// external writer that mutates the volatile field without touching
    /// the cache.
    pub async fn set_loyalty_points(&self, id: &CustomerId, points: i64) {
        if let Some(customer) = self.customers.write().await.get_mut(id) {
            customer.loyalty_points = points;
        }
    }

    /// Removes a customer record.
    pub async fn remove(&self, id: &CustomerId) {
        self.customers.write().await.remove(id);
    }
}

#[async_trait]
impl AuthoritativeStore for InMemoryAuthority {
    async fn fetch_customer(&self, id: &CustomerId) -> Result<Option<Customer>> {
        Ok(self.customers.read().await.get(id).cloned())
    }
}
