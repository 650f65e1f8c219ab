//! Hybrid datastore access layer for customer profiles.
//!
//! Treats a DynamoDB table as a lazily populated cache over an
//! authoritative PostgreSQL store. Reads go through
//! [`hybrid::HybridStore`], which serves field projections from the cache,
//! materializes entries on miss, and keeps the loyalty-points counter
//! read-time fresh via on-demand verification against the authoritative
//! store with opportunistic read-repair.
//!
//! Store technologies are bound at construction through the
//! `profilesync_core` capability traits; the in-memory adapters in
//! [`storage::inmemory`] stand in for either store in tests.

pub mod config;
pub mod hybrid;
pub mod storage;

pub use hybrid::{HybridStore, LookupError};
pub use profilesync_core::cache::{CacheError, CacheStore};
pub use profilesync_core::customer::{
    Address, Customer, CustomerId, CustomerView, Field, FieldValue, Projection,
};
pub use profilesync_core::storage::{AuthoritativeStore, StoreError};
