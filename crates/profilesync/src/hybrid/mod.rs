//! Hybrid access coordinator.
//!
//! The cache-aside read path over the two store adapters. Reads serve
//! field projections from the cache, materialize entries lazily on miss,
//! and verify the loyalty-points counter against the authoritative store
//! whenever a read requests it, repairing stale cache entries on the way
//! out. Every other field is served eventually consistent: staleness is
//! detected and repaired on demand, field-scoped, never by background
//! synchronization.

mod error;
mod store;

pub use error::{LookupError, Result};
pub use store::HybridStore;
