//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! the field/view vocabulary. Testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use profilesync_core::cache::CacheError;
use profilesync_core::customer::{CustomerView, Field, FieldValue, Projection};

/// Key attribute naming the record in the table.
pub const ATTR_CUSTOMER_ID: &str = "CustomerID";

/// Top-level attribute holding the nested address group.
pub const ATTR_ADDRESS: &str = "Address";

/// Convert a field value to its DynamoDB attribute representation.
pub fn value_to_attr(value: &FieldValue) -> AttributeValue {
    match value {
        FieldValue::Text(s) => AttributeValue::S(s.clone()),
        FieldValue::Number(n) => AttributeValue::N(n.to_string()),
    }
}

/// Convert an attribute back to a field value, checked against the field's
/// expected kind.
pub fn attr_to_value(field: Field, attr: &AttributeValue) -> Result<FieldValue, CacheError> {
    if field.is_numeric() {
        let n = attr
            .as_n()
            .map_err(|_| invalid_kind(field, "number"))?
            .parse::<i64>()
            .map_err(|e| CacheError::InvalidData(format!("{}: {}", field, e)))?;
        Ok(FieldValue::Number(n))
    } else {
        let s = attr.as_s().map_err(|_| invalid_kind(field, "string"))?;
        Ok(FieldValue::Text(s.clone()))
    }
}

fn invalid_kind(field: Field, expected: &str) -> CacheError {
    CacheError::InvalidData(format!("{} is not a {}", field, expected))
}

/// Build the nested address map from the address fields present in a view.
pub fn address_map(view: &CustomerView) -> AttributeValue {
    let mut map = HashMap::new();
    for (field, value) in view.iter() {
        if field.is_address() {
            map.insert(field.name().to_string(), value_to_attr(value));
        }
    }
    AttributeValue::M(map)
}

/// Resolve a dotted cache path against an item, descending through nested
/// maps.
pub fn lookup_path<'a>(
    item: &'a HashMap<String, AttributeValue>,
    path: &str,
) -> Option<&'a AttributeValue> {
    let mut segments = path.split('.');
    let mut current = item.get(segments.next()?)?;
    for segment in segments {
        current = current.as_m().ok()?.get(segment)?;
    }
    Some(current)
}

/// Convert an item into a view carrying the projected fields.
///
/// Projected fields absent from the item are simply omitted; existence of
/// the item itself is decided by the caller from the GetItem response.
pub fn item_to_view(
    item: &HashMap<String, AttributeValue>,
    projection: &Projection,
) -> Result<CustomerView, CacheError> {
    let mut view = CustomerView::new();
    for &field in projection.iter() {
        if let Some(attr) = lookup_path(item, field.cache_path()) {
            view.insert(field, attr_to_value(field, attr)?);
        }
    }
    Ok(view)
}
