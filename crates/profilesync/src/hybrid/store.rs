//! Hybrid store coordinator.
//!
//! Combines an `AuthoritativeStore` and a `CacheStore` into the cache-aside
//! read path with field-scoped staleness reconciliation.

use std::sync::Arc;

use profilesync_core::cache::CacheStore;
use profilesync_core::customer::{Customer, CustomerId, CustomerView, Field, FieldValue, Projection};
use profilesync_core::storage::AuthoritativeStore;

use super::{LookupError, Result};

/// Coordinator over the two stores.
///
/// Reads check the cache first and fall through to the authoritative store
/// on miss, materializing the entry for future reads. A read that requests
/// the volatile field re-verifies it against the authoritative store even
/// on a hit and repairs the cache when the values drift; every other field
/// is served as cached.
///
/// Holds no mutable state of its own: concurrent calls need no
/// coordination, and racing miss-path populations or repairs converge
/// because every cache write is an idempotent merge derived from the same
/// authoritative source.
pub struct HybridStore<A, C>
where
    A: AuthoritativeStore,
    C: CacheStore,
{
    authority: Arc<A>,
    cache: Arc<C>,
}

impl<A, C> HybridStore<A, C>
where
    A: AuthoritativeStore + 'static,
    C: CacheStore + 'static,
{
    /// The field guaranteed read-time freshness via on-demand verification.
    ///
    /// Loyalty points are mutated in the authoritative store by external
    /// writers without synchronous cache propagation.
    pub const VOLATILE_FIELD: Field = Field::LoyaltyPoints;

    /// Creates a new coordinator over the given adapters.
    pub fn new(authority: Arc<A>, cache: Arc<C>) -> Self {
        Self { authority, cache }
    }

    /// Retrieves the requested fields of a customer record.
    ///
    /// Serves from the cache when possible, lazily materializing the entry
    /// on miss. Requesting [`Self::VOLATILE_FIELD`] always returns the
    /// authoritative value, repairing the cache if it had drifted. A cache
    /// outage degrades to an authoritative read instead of failing.
    pub async fn get_fields(
        &self,
        id: &CustomerId,
        projection: &Projection,
    ) -> Result<CustomerView> {
        let cached = match self.cache.get_fields(id, projection).await {
            Ok(cached) => cached,
            Err(err) => {
                tracing::warn!(
                    customer_id = %id,
                    error = %err,
                    "Cache read failed, falling back to authoritative store"
                );
                let customer = self.fetch_authoritative(id).await?;
                return Ok(customer.view(projection));
            }
        };

        match cached {
            Some(view) => {
                tracing::trace!(customer_id = %id, "Cache hit");
                if projection.contains(Self::VOLATILE_FIELD) {
                    self.verify_volatile(id, view).await
                } else {
                    Ok(view)
                }
            }
            None => {
                tracing::trace!(customer_id = %id, "Cache miss");
                self.materialize(id, projection).await
            }
        }
    }

    /// Removes the customer's cache entry.
    ///
    /// Operational affordance for benchmarking and manual invalidation;
    /// record lifecycle is otherwise owned by external collaborators.
    pub async fn invalidate(&self, id: &CustomerId) -> Result<()> {
        self.cache.delete(id).await.map_err(LookupError::Cache)
    }

    /// Re-verifies the volatile field of a cache hit against the
    /// authoritative store, repairing the cache on drift.
    async fn verify_volatile(&self, id: &CustomerId, mut view: CustomerView) -> Result<CustomerView> {
        let customer = self.fetch_authoritative(id).await?;
        let fresh = customer.loyalty_points;

        if view.number(Self::VOLATILE_FIELD) != Some(fresh) {
            tracing::debug!(
                customer_id = %id,
                cached = ?view.number(Self::VOLATILE_FIELD),
                authoritative = fresh,
                "Stale loyalty points detected, repairing cache"
            );
            view.insert(Self::VOLATILE_FIELD, FieldValue::Number(fresh));

            let repair: CustomerView = [(Self::VOLATILE_FIELD, FieldValue::Number(fresh))]
                .into_iter()
                .collect();
            if let Err(err) = self.cache.put_fields(id, &repair).await {
                tracing::warn!(
                    customer_id = %id,
                    error = %err,
                    "Read-repair write failed, returning authoritative value anyway"
                );
            }
        }

        Ok(view)
    }

    /// Miss path: loads the full record from the authoritative store,
    /// writes it into the cache, and re-queries the cache for the exact
    /// projection so hit and miss paths serve identical shapes.
    async fn materialize(&self, id: &CustomerId, projection: &Projection) -> Result<CustomerView> {
        let customer = self.fetch_authoritative(id).await?;

        if let Err(err) = self.cache.put_fields(id, &customer.full_view()).await {
            tracing::warn!(
                customer_id = %id,
                error = %err,
                "Cache materialization failed, serving authoritative projection"
            );
            return Ok(customer.view(projection));
        }
        tracing::debug!(customer_id = %id, "Materialized cache entry");

        match self.cache.get_fields(id, projection).await {
            Ok(Some(view)) => Ok(view),
            Ok(None) => {
                tracing::warn!(
                    customer_id = %id,
                    "Cache entry absent immediately after materialization"
                );
                Ok(customer.view(projection))
            }
            Err(err) => {
                tracing::warn!(
                    customer_id = %id,
                    error = %err,
                    "Cache re-read failed after materialization, serving authoritative projection"
                );
                Ok(customer.view(projection))
            }
        }
    }

    async fn fetch_authoritative(&self, id: &CustomerId) -> Result<Customer> {
        self.authority
            .fetch_customer(id)
            .await?
            .ok_or_else(|| LookupError::NotFound(id.clone()))
    }
}
