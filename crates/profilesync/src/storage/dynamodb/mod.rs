//! DynamoDB cache store implementation.

mod cache;
mod conversions;
mod error;

pub use cache::DynamoCache;
