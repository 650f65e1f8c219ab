//! Cache store contract.

mod error;
mod traits;

pub use error::{CacheError, Result};
pub use traits::CacheStore;
