use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use profilesync_core::cache::{CacheError, CacheStore, Result};
use profilesync_core::customer::{CustomerId, CustomerView, Projection};

/// In-memory cache store for testing.
///
/// Honors the projection and field-merge semantics of the contract and can
/// be switched into a failing state to exercise outage fallback paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCache {
    entries: Arc<RwLock<HashMap<CustomerId, CustomerView>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with a connection error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(CacheError::ConnectionFailed(
                "simulated cache outage".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CacheStore for InMemoryCache {
    async fn get_fields(
        &self,
        id: &CustomerId,
        projection: &Projection,
    ) -> Result<Option<CustomerView>> {
        self.check_available()?;
        let entries = self.entries.read().await;
        Ok(entries.get(id).map(|entry| {
            projection
                .iter()
                .filter_map(|&field| entry.get(field).map(|value| (field, value.clone())))
                .collect()
        }))
    }

    async fn put_fields(&self, id: &CustomerId, fields: &CustomerView) -> Result<()> {
        self.check_available()?;
        let mut entries = self.entries.write().await;
        entries.entry(id.clone()).or_default().merge(fields);
        Ok(())
    }

    async fn delete(&self, id: &CustomerId) -> Result<()> {
        self.check_available()?;
        self.entries.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profilesync_core::customer::{Field, FieldValue};

    fn id() -> CustomerId {
        CustomerId::from("C000001")
    }

    fn base_view() -> CustomerView {
        [
            (Field::FirstName, FieldValue::Text("Ada".to_string())),
            (Field::Email, FieldValue::Text("ada@example.com".to_string())),
            (Field::LoyaltyPoints, FieldValue::Number(420)),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn test_get_returns_none_for_absent_key() {
        let cache = InMemoryCache::new();
        let result = cache
            .get_fields(&id(), &Projection::from([Field::Email]))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_applies_projection() {
        let cache = InMemoryCache::new();
        cache.put_fields(&id(), &base_view()).await.unwrap();

        let view = cache
            .get_fields(&id(), &Projection::from([Field::Email]))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view.text(Field::Email), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn test_partial_put_merges_without_replacing() {
        let cache = InMemoryCache::new();
        cache.put_fields(&id(), &base_view()).await.unwrap();

        let repair: CustomerView = [(Field::LoyaltyPoints, FieldValue::Number(10001))]
            .into_iter()
            .collect();
        cache.put_fields(&id(), &repair).await.unwrap();

        let view = cache
            .get_fields(
                &id(),
                &Projection::from([Field::FirstName, Field::LoyaltyPoints]),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(view.text(Field::FirstName), Some("Ada"));
        assert_eq!(view.number(Field::LoyaltyPoints), Some(10001));
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let cache = InMemoryCache::new();
        cache.put_fields(&id(), &base_view()).await.unwrap();
        cache.delete(&id()).await.unwrap();
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_failing_cache_reports_connection_error() {
        let cache = InMemoryCache::new();
        cache.set_failing(true);
        let err = cache
            .get_fields(&id(), &Projection::from([Field::Email]))
            .await
            .unwrap_err();
        assert!(matches!(err, CacheError::ConnectionFailed(_)));
    }
}
