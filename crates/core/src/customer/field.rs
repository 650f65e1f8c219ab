use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named field of the customer record.
///
/// The four address sub-fields form a nested group: in the cache store they
/// live under a single `Address` attribute and are addressed by the dotted
/// path returned from [`Field::cache_path`]. Everywhere else they behave
/// like ordinary scalar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Street,
    City,
    State,
    PostalCode,
    DateOfBirth,
    AccountCreationDate,
    LastPurchaseDate,
    LoyaltyPoints,
}

impl Field {
    /// Every field, in canonical column order.
    pub const ALL: [Field; 12] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::PhoneNumber,
        Field::Street,
        Field::City,
        Field::State,
        Field::PostalCode,
        Field::DateOfBirth,
        Field::AccountCreationDate,
        Field::LastPurchaseDate,
        Field::LoyaltyPoints,
    ];

    /// Canonical attribute name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "FirstName",
            Field::LastName => "LastName",
            Field::Email => "Email",
            Field::PhoneNumber => "PhoneNumber",
            Field::Street => "Street",
            Field::City => "City",
            Field::State => "State",
            Field::PostalCode => "PostalCode",
            Field::DateOfBirth => "DateOfBirth",
            Field::AccountCreationDate => "AccountCreationDate",
            Field::LastPurchaseDate => "LastPurchaseDate",
            Field::LoyaltyPoints => "LoyaltyPoints",
        }
    }

    /// Projection path in the cache store.
    ///
    /// Address sub-fields resolve to their dotted form (`Address.Street`);
    /// every other field projects under its own name.
    pub fn cache_path(&self) -> &'static str {
        match self {
            Field::Street => "Address.Street",
            Field::City => "Address.City",
            Field::State => "Address.State",
            Field::PostalCode => "Address.PostalCode",
            other => other.name(),
        }
    }

    /// Whether this field belongs to the nested address group.
    pub fn is_address(&self) -> bool {
        matches!(
            self,
            Field::Street | Field::City | Field::State | Field::PostalCode
        )
    }

    /// Whether this field carries a numeric value.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::LoyaltyPoints)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a field name cannot be resolved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Parses a field from its canonical name or its dotted cache path.
    ///
    /// The dotted form is only valid for address sub-fields; `Address.Email`
    /// is rejected even though `Email` exists.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dotted, name) = match s.strip_prefix("Address.") {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let field = Field::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| UnknownField(s.to_string()))?;
        if dotted && !field.is_address() {
            return Err(UnknownField(s.to_string()));
        }
        Ok(field)
    }
}

/// A single field's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    /// Returns the textual payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    /// Returns the numeric payload, if any.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n)
    }
}

/// A caller-specified subset of the record's fields to retrieve.
///
/// Preserves request order and drops duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection(Vec<Field>);

impl Projection {
    /// Builds a projection from the given fields, deduplicating while
    /// preserving first-seen order.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        let mut seen = Vec::new();
        for field in fields {
            if !seen.contains(&field) {
                seen.push(field);
            }
        }
        Projection(seen)
    }

    /// A projection covering every field.
    pub fn all() -> Self {
        Projection(Field::ALL.to_vec())
    }

    /// Resolves a projection from field names, accepting both canonical
    /// names and dotted cache paths.
    pub fn parse<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Result<Self, UnknownField> {
        let mut fields = Vec::new();
        for name in names {
            fields.push(name.as_ref().parse::<Field>()?);
        }
        Ok(Projection::new(fields))
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[Field]> for Projection {
    fn from(fields: &[Field]) -> Self {
        Projection::new(fields.iter().copied())
    }
}

impl<const N: usize> From<[Field; N]> for Projection {
    fn from(fields: [Field; N]) -> Self {
        Projection::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_fields_use_dotted_cache_path() {
        assert_eq!(Field::Street.cache_path(), "Address.Street");
        assert_eq!(Field::City.cache_path(), "Address.City");
        assert_eq!(Field::State.cache_path(), "Address.State");
        assert_eq!(Field::PostalCode.cache_path(), "Address.PostalCode");
    }

    #[test]
    fn test_scalar_fields_project_under_own_name() {
        assert_eq!(Field::FirstName.cache_path(), "FirstName");
        assert_eq!(Field::LoyaltyPoints.cache_path(), "LoyaltyPoints");
    }

    #[test]
    fn test_parse_accepts_name_and_dotted_path() {
        assert_eq!("Street".parse::<Field>().unwrap(), Field::Street);
        assert_eq!("Address.Street".parse::<Field>().unwrap(), Field::Street);
        assert_eq!("LoyaltyPoints".parse::<Field>().unwrap(), Field::LoyaltyPoints);
    }

    #[test]
    fn test_parse_rejects_unknown_name() {
        let err = "MiddleName".parse::<Field>().unwrap_err();
        assert_eq!(err.to_string(), "unknown field: MiddleName");
    }

    #[test]
    fn test_parse_rejects_dotted_form_for_non_address_fields() {
        let err = "Address.FirstName".parse::<Field>().unwrap_err();
        assert_eq!(err.to_string(), "unknown field: Address.FirstName");
        assert!("Address.LoyaltyPoints".parse::<Field>().is_err());
        assert!("Address.MiddleName".parse::<Field>().is_err());
    }

    #[test]
    fn test_projection_dedupes_preserving_order() {
        let projection = Projection::new([
            Field::Email,
            Field::FirstName,
            Field::Email,
            Field::Street,
        ]);
        let fields: Vec<_> = projection.iter().copied().collect();
        assert_eq!(fields, vec![Field::Email, Field::FirstName, Field::Street]);
    }

    #[test]
    fn test_projection_parse_mixed_names() {
        let projection = Projection::parse(["FirstName", "Address.City"]).unwrap();
        assert!(projection.contains(Field::FirstName));
        assert!(projection.contains(Field::City));
        assert_eq!(projection.len(), 2);
    }

    #[test]
    fn test_only_loyalty_points_is_numeric() {
        for field in Field::ALL {
            assert_eq!(field.is_numeric(), field == Field::LoyaltyPoints);
        }
    }
}
