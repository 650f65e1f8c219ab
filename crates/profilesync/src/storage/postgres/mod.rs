//! PostgreSQL authoritative store implementation.

mod error;
mod repository;

pub use repository::PostgresStore;
