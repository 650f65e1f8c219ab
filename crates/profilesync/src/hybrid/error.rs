use thiserror::Error;

use profilesync_core::cache::CacheError;
use profilesync_core::customer::CustomerId;
use profilesync_core::storage::StoreError;

/// Errors surfaced by the hybrid coordinator.
///
/// The failing adapter's identity is the variant: `Authority` wraps
/// authoritative-store failures, `Cache` wraps cache failures that could
/// not be recovered by falling back to the authoritative store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Customer not found: {0}")]
    NotFound(CustomerId),
    #[error("Authoritative store failed: {0}")]
    Authority(#[from] StoreError),
    #[error("Cache store failed: {0}")]
    Cache(CacheError),
}

/// Result type for coordinator operations.
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = LookupError::NotFound(CustomerId::from("C000099"));
        assert_eq!(error.to_string(), "Customer not found: C000099");
    }

    #[test]
    fn test_authority_display_carries_adapter_identity() {
        let error = LookupError::from(StoreError::ConnectionFailed("refused".to_string()));
        assert_eq!(
            error.to_string(),
            "Authoritative store failed: Connection failed: refused"
        );
    }

    #[test]
    fn test_cache_display_carries_adapter_identity() {
        let error = LookupError::Cache(CacheError::OperationFailed("throttled".to_string()));
        assert_eq!(
            error.to_string(),
            "Cache store failed: Cache operation failed: throttled"
        );
    }
}
