//! DynamoDB cache repository implementation.
//!
//! Implements `CacheStore` over a single table keyed by `CustomerID`, with
//! the address group stored as one nested attribute map.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tokio::time::timeout;

use profilesync_core::cache::{CacheError, CacheStore, Result};
use profilesync_core::customer::{CustomerId, CustomerView, Projection};

use super::conversions::{
    address_map, item_to_view, value_to_attr, ATTR_ADDRESS, ATTR_CUSTOMER_ID,
};
use super::error::{map_delete_item_error, map_get_item_error, map_update_item_error};

/// DynamoDB-backed cache store.
///
/// Partial writes go through `UpdateItem` `SET` expressions so that fields
/// absent from the write are never replaced; a plain `PutItem` would
/// replace the whole item and silently drop every cached field outside the
/// write set.
pub struct DynamoCache {
    client: Client,
    table_name: String,
    call_timeout: Duration,
}

impl DynamoCache {
    /// Creates a new cache store with the given client and table name.
    pub fn new(client: Client, table_name: impl Into<String>, call_timeout: Duration) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            call_timeout,
        }
    }

    /// Creates a cache store from configuration.
    ///
    /// Credentials resolve through the AWS SDK default chain; the region
    /// from the configuration overrides the chain's when present.
    pub async fn from_config(config: &crate::config::DynamoConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = config.region.clone() {
            loader = loader.region(aws_config::Region::new(region));
        }
        let sdk_config = loader.load().await;

        Self::new(
            Client::new(&sdk_config),
            config.table_name.clone(),
            config.call_timeout,
        )
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(&self, id: &CustomerId) -> AttributeValue {
        AttributeValue::S(id.as_str().to_string())
    }
}

#[async_trait]
impl CacheStore for DynamoCache {
    async fn get_fields(
        &self,
        id: &CustomerId,
        projection: &Projection,
    ) -> Result<Option<CustomerView>> {
        // Alias every path segment: names like State collide with DynamoDB
        // reserved words.
        let mut names: HashMap<String, String> = HashMap::new();
        let mut paths: Vec<String> = Vec::new();
        for field in projection.iter() {
            let aliased: Vec<String> = field
                .cache_path()
                .split('.')
                .map(|segment| {
                    names.insert(format!("#{}", segment), segment.to_string());
                    format!("#{}", segment)
                })
                .collect();
            paths.push(aliased.join("."));
        }

        let mut request = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_CUSTOMER_ID, self.key(id));
        if !paths.is_empty() {
            request = request
                .projection_expression(paths.join(", "))
                .set_expression_attribute_names(Some(names));
        }

        let result = timeout(self.call_timeout, request.send())
            .await
            .map_err(|_| CacheError::Timeout(self.call_timeout))?
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_view(&item, projection)?)),
            None => Ok(None),
        }
    }

    async fn put_fields(&self, id: &CustomerId, fields: &CustomerView) -> Result<()> {
        if fields.is_empty() {
            return Ok(());
        }

        let mut names: HashMap<String, String> = HashMap::new();
        let mut values: HashMap<String, AttributeValue> = HashMap::new();
        let mut assignments: Vec<String> = Vec::new();

        // A write carrying the full address group sets the nested map as
        // one value, creating it if absent. A partial address write must
        // address the nested path, which requires the map to exist; the
        // merge contract guarantees that because repairs only follow a
        // full-record materialization.
        let address_count = fields.fields().filter(|f| f.is_address()).count();
        let full_address = address_count == 4;
        if full_address {
            names.insert(format!("#{}", ATTR_ADDRESS), ATTR_ADDRESS.to_string());
            values.insert(format!(":{}", ATTR_ADDRESS), address_map(fields));
            assignments.push(format!("#{0} = :{0}", ATTR_ADDRESS));
        }

        for (field, value) in fields.iter() {
            if field.is_address() {
                if full_address {
                    continue;
                }
                names.insert(format!("#{}", ATTR_ADDRESS), ATTR_ADDRESS.to_string());
                names.insert(format!("#{}", field.name()), field.name().to_string());
                values.insert(format!(":{}", field.name()), value_to_attr(value));
                assignments.push(format!("#{0}.#{1} = :{1}", ATTR_ADDRESS, field.name()));
            } else {
                names.insert(format!("#{}", field.name()), field.name().to_string());
                values.insert(format!(":{}", field.name()), value_to_attr(value));
                assignments.push(format!("#{0} = :{0}", field.name()));
            }
        }

        let update_expression = format!("SET {}", assignments.join(", "));

        let request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(ATTR_CUSTOMER_ID, self.key(id))
            .update_expression(update_expression)
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(values));

        timeout(self.call_timeout, request.send())
            .await
            .map_err(|_| CacheError::Timeout(self.call_timeout))?
            .map_err(map_update_item_error)?;

        Ok(())
    }

    async fn delete(&self, id: &CustomerId) -> Result<()> {
        let request = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_CUSTOMER_ID, self.key(id));

        timeout(self.call_timeout, request.send())
            .await
            .map_err(|_| CacheError::Timeout(self.call_timeout))?
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
