//! PostgreSQL error mapping.
//!
//! Maps `sqlx` errors to `StoreError` from `profilesync_core::storage`.

use profilesync_core::storage::StoreError;

/// Map a sqlx error to StoreError.
///
/// Transport-level failures become `ConnectionFailed`; decode problems in
/// returned rows become `InvalidData`; everything else is a failed query.
/// Row absence never reaches this function, the repository reports it as
/// `Ok(None)`.
pub fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Io(e) => StoreError::ConnectionFailed(e.to_string()),
        sqlx::Error::Tls(e) => StoreError::ConnectionFailed(e.to_string()),
        sqlx::Error::PoolTimedOut => {
            StoreError::ConnectionFailed("connection pool timed out".to_string())
        }
        sqlx::Error::PoolClosed => {
            StoreError::ConnectionFailed("connection pool closed".to_string())
        }
        sqlx::Error::Configuration(e) => StoreError::ConnectionFailed(e.to_string()),
        sqlx::Error::ColumnDecode { index, source } => {
            StoreError::InvalidData(format!("column {}: {}", index, source))
        }
        sqlx::Error::Decode(e) => StoreError::InvalidData(e.to_string()),
        sqlx::Error::TypeNotFound { type_name } => {
            StoreError::InvalidData(format!("unknown type: {}", type_name))
        }
        err => StoreError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_maps_to_connection_failed() {
        let mapped = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(mapped, StoreError::ConnectionFailed(_)));
    }

    #[test]
    fn test_row_not_found_maps_to_query_failed() {
        let mapped = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(mapped, StoreError::QueryFailed(_)));
    }
}
