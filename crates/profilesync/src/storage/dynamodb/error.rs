//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `CacheError` from `profilesync_core::cache`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use profilesync_core::cache::CacheError;

/// Map a GetItem SDK error to CacheError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> CacheError {
    if is_transport_failure(&err) {
        return CacheError::ConnectionFailed(err.to_string());
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            CacheError::OperationFailed("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            CacheError::OperationFailed("Throughput exceeded".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            CacheError::OperationFailed("Request limit exceeded".to_string())
        }
        GetItemError::InternalServerError(_) => {
            CacheError::OperationFailed("DynamoDB internal server error".to_string())
        }
        err => CacheError::OperationFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map an UpdateItem SDK error to CacheError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
) -> CacheError {
    if is_transport_failure(&err) {
        return CacheError::ConnectionFailed(err.to_string());
    }
    match err.into_service_error() {
        UpdateItemError::ResourceNotFoundException(_) => {
            CacheError::OperationFailed("Table not found".to_string())
        }
        UpdateItemError::ProvisionedThroughputExceededException(_) => {
            CacheError::OperationFailed("Throughput exceeded".to_string())
        }
        UpdateItemError::RequestLimitExceeded(_) => {
            CacheError::OperationFailed("Request limit exceeded".to_string())
        }
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            CacheError::OperationFailed("Item collection size limit exceeded".to_string())
        }
        UpdateItemError::TransactionConflictException(_) => {
            CacheError::OperationFailed("Transaction conflict".to_string())
        }
        UpdateItemError::InternalServerError(_) => {
            CacheError::OperationFailed("DynamoDB internal server error".to_string())
        }
        err => CacheError::OperationFailed(format!("UpdateItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to CacheError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> CacheError {
    if is_transport_failure(&err) {
        return CacheError::ConnectionFailed(err.to_string());
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            CacheError::OperationFailed("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            CacheError::OperationFailed("Throughput exceeded".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            CacheError::OperationFailed("Request limit exceeded".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            CacheError::OperationFailed("Transaction conflict".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            CacheError::OperationFailed("DynamoDB internal server error".to_string())
        }
        err => CacheError::OperationFailed(format!("DeleteItem failed: {:?}", err)),
    }
}

/// Whether the error never reached the service.
fn is_transport_failure<E, R>(err: &SdkError<E, R>) -> bool {
    matches!(
        err,
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)
    )
}
