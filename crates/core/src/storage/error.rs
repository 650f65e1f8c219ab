use std::time::Duration;

use thiserror::Error;

/// Errors that can occur against the authoritative store.
///
/// A missing row is not an error at this layer; adapters report it as
/// `Ok(None)` and the coordinator decides what not-found means.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Call timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for authoritative store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_display() {
        let error = StoreError::ConnectionFailed("host unreachable".to_string());
        assert_eq!(error.to_string(), "Connection failed: host unreachable");
    }

    #[test]
    fn test_query_failed_display() {
        let error = StoreError::QueryFailed("relation does not exist".to_string());
        assert_eq!(
            error.to_string(),
            "Query failed: relation does not exist"
        );
    }

    #[test]
    fn test_invalid_data_display() {
        let error = StoreError::InvalidData("loyaltypoints is not an integer".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid data: loyaltypoints is not an integer"
        );
    }

    #[test]
    fn test_timeout_display() {
        let error = StoreError::Timeout(Duration::from_secs(10));
        assert_eq!(error.to_string(), "Call timed out after 10s");
    }
}
