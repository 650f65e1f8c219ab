//! Storage backend implementations.
//!
//! Concrete implementations of the two capability traits from
//! `profilesync_core`: [`postgres::PostgresStore`] backs the authoritative
//! side and [`dynamodb::DynamoCache`] backs the cache side. Unlike
//! alternative backends for one role, the two coexist; a deployment wires
//! one of each into the hybrid coordinator.
//!
//! # Feature Flags
//!
//! - `postgres` (default): authoritative store over `sqlx`
//! - `dynamodb` (default): cache store over `aws-sdk-dynamodb`
//! - `inmemory` (default): in-memory doubles for either role, used by
//!   tests and local development

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoCache;

#[cfg(feature = "inmemory")]
pub use inmemory::{InMemoryAuthority, InMemoryCache};
