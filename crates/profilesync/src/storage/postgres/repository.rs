//! PostgreSQL repository implementation.
//!
//! Implements `AuthoritativeStore` over the `customer_info` table.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::time::timeout;

use profilesync_core::customer::{Address, Customer, CustomerId};
use profilesync_core::storage::{AuthoritativeStore, Result, StoreError};

use super::error::map_sqlx_error;

const SELECT_CUSTOMER: &str = "SELECT customerid, firstname, lastname, email, phonenumber, \
     street, city, state, postalcode, \
     dateofbirth, accountcreationdate, lastpurchasedate, loyaltypoints \
     FROM customer_info WHERE customerid = $1";

type CustomerRow = (
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    NaiveDate,
    NaiveDate,
    NaiveDate,
    i32,
);

/// PostgreSQL-backed authoritative store.
///
/// Reads exactly one row by primary key and maps the relational columns,
/// including the four address columns, into the canonical [`Customer`]
/// shape. The schema is created by external loaders; this store never
/// creates it.
pub struct PostgresStore {
    pool: PgPool,
    call_timeout: Duration,
}

impl PostgresStore {
    /// Creates a new store over an existing connection pool.
    pub fn new(pool: PgPool, call_timeout: Duration) -> Self {
        Self { pool, call_timeout }
    }

    /// Connects using the given configuration.
    pub async fn connect(config: &crate::config::PostgresConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(config.call_timeout)
            .connect(&config.url())
            .await
            .map_err(map_sqlx_error)?;

        Ok(Self::new(pool, config.call_timeout))
    }
}

#[async_trait]
impl AuthoritativeStore for PostgresStore {
    async fn fetch_customer(&self, id: &CustomerId) -> Result<Option<Customer>> {
        let query = sqlx::query_as::<_, CustomerRow>(SELECT_CUSTOMER)
            .bind(id.as_str())
            .fetch_optional(&self.pool);

        let row = timeout(self.call_timeout, query)
            .await
            .map_err(|_| StoreError::Timeout(self.call_timeout))?
            .map_err(map_sqlx_error)?;

        Ok(row.map(row_to_customer))
    }
}

fn row_to_customer(row: CustomerRow) -> Customer {
    let (
        customer_id,
        first_name,
        last_name,
        email,
        phone_number,
        street,
        city,
        state,
        postal_code,
        date_of_birth,
        account_creation_date,
        last_purchase_date,
        loyalty_points,
    ) = row;

    Customer {
        id: CustomerId::new(customer_id),
        first_name,
        last_name,
        email,
        phone_number,
        address: Address {
            street,
            city,
            state,
            postal_code,
        },
        date_of_birth,
        account_creation_date,
        last_purchase_date,
        loyalty_points: i64::from(loyalty_points),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_customer_maps_all_columns() {
        let row: CustomerRow = (
            "C000042".to_string(),
            "Grace".to_string(),
            "Hopper".to_string(),
            "grace@example.com".to_string(),
            "555-0199".to_string(),
            "1 Harbor St".to_string(),
            "Arlington".to_string(),
            "VA".to_string(),
            "22203".to_string(),
            NaiveDate::from_ymd_opt(1906, 12, 9).unwrap(),
            NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            1500,
        );

        let customer = row_to_customer(row);
        assert_eq!(customer.id.as_str(), "C000042");
        assert_eq!(customer.address.city, "Arlington");
        assert_eq!(customer.loyalty_points, 1500);
        assert_eq!(
            customer.last_purchase_date,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }
}
