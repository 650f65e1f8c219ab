use async_trait::async_trait;

use crate::customer::{CustomerId, CustomerView, Projection};

use super::Result;

/// Low-latency secondary store for customer records.
///
/// Keyed by the same primary key as the authoritative store. Entries are
/// populated lazily by the coordinator and may lag the authoritative store
/// until a read touches the volatile field.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Retrieves only the named fields of a cached record.
    ///
    /// `Ok(None)` means the key does not exist at all. A key that exists
    /// with some requested fields absent returns the fields that are
    /// present; asking for fields that were never written is a caller
    /// error, not a miss.
    async fn get_fields(
        &self,
        id: &CustomerId,
        projection: &Projection,
    ) -> Result<Option<CustomerView>>;

    /// Upserts the given fields, merging at the field level.
    ///
    /// Fields absent from `fields` are never replaced. A full-record view
    /// materializes the entry; a partial view (e.g. only the volatile
    /// field) repairs it in place. The merge is idempotent, so concurrent
    /// writes derived from the same authoritative read converge.
    async fn put_fields(&self, id: &CustomerId, fields: &CustomerView) -> Result<()>;

    /// Removes the entry entirely.
    async fn delete(&self, id: &CustomerId) -> Result<()>;
}
