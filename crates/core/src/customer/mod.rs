//! Customer profile domain types.

mod field;
mod types;

pub use field::{Field, FieldValue, Projection, UnknownField};
pub use types::{Address, Customer, CustomerId, CustomerView};

/// Textual format used for date-typed fields everywhere they cross a store
/// boundary (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";
