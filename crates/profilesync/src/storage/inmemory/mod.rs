//! In-memory adapter implementations.
//!
//! Thread-safe doubles for both store roles, used by tests and local
//! development. Data is not persisted and is lost on drop.

mod authority;
mod cache;

pub use authority::InMemoryAuthority;
pub use cache::InMemoryCache;
