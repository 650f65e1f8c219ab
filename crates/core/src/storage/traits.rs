use async_trait::async_trait;

use crate::customer::{Customer, CustomerId};

use super::Result;

/// The system of record for customer profiles.
///
/// Implementations look up exactly one row by primary key and map it into
/// the canonical [`Customer`] shape. `Ok(None)` means no row matched. No
/// retries happen at this layer; retry policy belongs to the caller. Calls
/// must complete within the adapter's configured timeout.
#[async_trait]
pub trait AuthoritativeStore: Send + Sync {
    /// Fetches a full customer record by primary key.
    async fn fetch_customer(&self, id: &CustomerId) -> Result<Option<Customer>>;
}
