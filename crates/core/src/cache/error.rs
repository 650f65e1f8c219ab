use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during cache store operations.
///
/// The cache is best effort and never authoritative: callers recover from
/// these by falling back to the authoritative store, they never retry here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Invalid cached data: {0}")]
    InvalidData(String),
    #[error("Cache call timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for cache store operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_display() {
        let error = CacheError::ConnectionFailed("endpoint unreachable".to_string());
        assert_eq!(
            error.to_string(),
            "Cache connection failed: endpoint unreachable"
        );
    }

    #[test]
    fn test_operation_failed_display() {
        let error = CacheError::OperationFailed("throughput exceeded".to_string());
        assert_eq!(
            error.to_string(),
            "Cache operation failed: throughput exceeded"
        );
    }

    #[test]
    fn test_invalid_data_display() {
        let error = CacheError::InvalidData("LoyaltyPoints is not numeric".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid cached data: LoyaltyPoints is not numeric"
        );
    }

    #[test]
    fn test_timeout_display() {
        let error = CacheError::Timeout(Duration::from_secs(10));
        assert_eq!(error.to_string(), "Cache call timed out after 10s");
    }
}
