use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Field, FieldValue, Projection, DATE_FORMAT};

/// Primary key of a customer record.
///
/// Unique and immutable once created; the same identifier keys both the
/// authoritative and the cache store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        CustomerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(s: &str) -> Self {
        CustomerId(s.to_string())
    }
}

impl From<String> for CustomerId {
    fn from(s: String) -> Self {
        CustomerId(s)
    }
}

/// Nested address group, always read and written as a unit in the
/// authoritative row and stored as one nested attribute in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// A full customer profile as the authoritative store holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: Address,
    pub date_of_birth: NaiveDate,
    pub account_creation_date: NaiveDate,
    pub last_purchase_date: NaiveDate,
    /// The volatile field: the only field mutated independently in the
    /// authoritative store without synchronous cache propagation.
    pub loyalty_points: i64,
}

impl Customer {
    /// Returns the value of a single field; dates render in `YYYY-MM-DD`.
    pub fn field_value(&self, field: Field) -> FieldValue {
        match field {
            Field::FirstName => FieldValue::Text(self.first_name.clone()),
            Field::LastName => FieldValue::Text(self.last_name.clone()),
            Field::Email => FieldValue::Text(self.email.clone()),
            Field::PhoneNumber => FieldValue::Text(self.phone_number.clone()),
            Field::Street => FieldValue::Text(self.address.street.clone()),
            Field::City => FieldValue::Text(self.address.city.clone()),
            Field::State => FieldValue::Text(self.address.state.clone()),
            Field::PostalCode => FieldValue::Text(self.address.postal_code.clone()),
            Field::DateOfBirth => {
                FieldValue::Text(self.date_of_birth.format(DATE_FORMAT).to_string())
            }
            Field::AccountCreationDate => {
                FieldValue::Text(self.account_creation_date.format(DATE_FORMAT).to_string())
            }
            Field::LastPurchaseDate => {
                FieldValue::Text(self.last_purchase_date.format(DATE_FORMAT).to_string())
            }
            Field::LoyaltyPoints => FieldValue::Number(self.loyalty_points),
        }
    }

    /// Projects the requested fields into a partial view.
    pub fn view(&self, projection: &Projection) -> CustomerView {
        projection
            .iter()
            .map(|&field| (field, self.field_value(field)))
            .collect()
    }

    /// A view carrying every field, used when materializing a cache entry.
    pub fn full_view(&self) -> CustomerView {
        self.view(&Projection::all())
    }
}

/// A partial customer record: the subset of fields a read returned or a
/// write carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerView(BTreeMap<Field, FieldValue>);

impl CustomerView {
    pub fn new() -> Self {
        CustomerView(BTreeMap::new())
    }

    pub fn insert(&mut self, field: Field, value: FieldValue) {
        self.0.insert(field, value);
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.0.get(&field)
    }

    /// Convenience accessor for text-valued fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Convenience accessor for numeric fields.
    pub fn number(&self, field: Field) -> Option<i64> {
        self.get(field).and_then(FieldValue::as_number)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Field, &FieldValue)> {
        self.0.iter()
    }

    /// Fields present in this view.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merges `other` into this view at the field level; fields absent from
    /// `other` are left untouched.
    pub fn merge(&mut self, other: &CustomerView) {
        for (field, value) in other.iter() {
            self.0.insert(*field, value.clone());
        }
    }
}

impl FromIterator<(Field, FieldValue)> for CustomerView {
    fn from_iter<I: IntoIterator<Item = (Field, FieldValue)>>(iter: I) -> Self {
        CustomerView(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customer() -> Customer {
        Customer {
            id: CustomerId::from("C000001"),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "555-0100".to_string(),
            address: Address {
                street: "12 Analytical Way".to_string(),
                city: "London".to_string(),
                state: "LDN".to_string(),
                postal_code: "EC1A".to_string(),
            },
            date_of_birth: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
            account_creation_date: NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
            last_purchase_date: NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
            loyalty_points: 420,
        }
    }

    #[test]
    fn test_dates_render_in_fixed_format() {
        let customer = sample_customer();
        assert_eq!(
            customer.field_value(Field::DateOfBirth),
            FieldValue::Text("1815-12-10".to_string())
        );
        assert_eq!(
            customer.field_value(Field::LastPurchaseDate),
            FieldValue::Text("2024-03-17".to_string())
        );
    }

    #[test]
    fn test_view_contains_only_requested_fields() {
        let customer = sample_customer();
        let view = customer.view(&Projection::from([Field::Email, Field::Street]));
        assert_eq!(view.len(), 2);
        assert_eq!(view.text(Field::Email), Some("ada@example.com"));
        assert_eq!(view.text(Field::Street), Some("12 Analytical Way"));
        assert!(!view.contains(Field::City));
    }

    #[test]
    fn test_full_view_covers_every_field() {
        let view = sample_customer().full_view();
        assert_eq!(view.len(), Field::ALL.len());
        assert_eq!(view.number(Field::LoyaltyPoints), Some(420));
    }

    #[test]
    fn test_merge_overwrites_only_named_fields() {
        let mut view = sample_customer().full_view();
        let repair: CustomerView =
            [(Field::LoyaltyPoints, FieldValue::Number(10001))].into_iter().collect();
        view.merge(&repair);
        assert_eq!(view.number(Field::LoyaltyPoints), Some(10001));
        assert_eq!(view.text(Field::FirstName), Some("Ada"));
        assert_eq!(view.len(), Field::ALL.len());
    }
}
