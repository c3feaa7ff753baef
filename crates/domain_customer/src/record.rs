//! Raw batch records
//!
//! Batch requests arrive as JSON objects with the keys `id`, `first`,
//! `name` (the last name) and `contacts` (a single contact string). The
//! decoding layer hands them over untyped so rejected records can be echoed
//! back exactly as they were received.

use serde_json::{Map, Value};

use core_kernel::EntityId;

use crate::error::CustomerError;

/// Untyped key-value record as received from the decoding layer
pub type RawRecord = Map<String, Value>;

pub const ID_KEY: &str = "id";
pub const FIRST_NAME_KEY: &str = "first";
pub const LAST_NAME_KEY: &str = "name";
pub const CONTACTS_KEY: &str = "contacts";

/// Typed view of a raw record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerRecord {
    pub id: Option<EntityId>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub contact: Option<String>,
}

impl CustomerRecord {
    /// Reads the known keys of `raw`, ignoring any others
    ///
    /// `null` values and an empty-string id count as absent. Values of the
    /// wrong JSON type are a `BadRequest`.
    pub fn parse(raw: &RawRecord) -> Result<Self, CustomerError> {
        Ok(Self {
            id: id_field(raw)?,
            first: string_field(raw, FIRST_NAME_KEY)?,
            last: string_field(raw, LAST_NAME_KEY)?,
            contact: string_field(raw, CONTACTS_KEY)?,
        })
    }

    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref()
    }
}

/// Returns whether both name keys are present, regardless of their values
pub fn has_names(raw: &RawRecord) -> bool {
    raw.contains_key(FIRST_NAME_KEY) && raw.contains_key(LAST_NAME_KEY)
}

fn string_field(raw: &RawRecord, key: &str) -> Result<Option<String>, CustomerError> {
    match raw.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(CustomerError::bad_request(format!(
            "field '{}' must be a string, got {}",
            key, other
        ))),
    }
}

fn id_field(raw: &RawRecord) -> Result<Option<EntityId>, CustomerError> {
    match raw.get(ID_KEY) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) if value.trim().is_empty() => Ok(None),
        // fractional ids are truncated, out-of-range ids saturate
        Some(Value::Number(number)) => Ok(number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f as EntityId))),
        Some(other) => Err(CustomerError::bad_request(format!(
            "field '{}' must be numeric, got {}",
            ID_KEY, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_parse_full_record() {
        let record = CustomerRecord::parse(&raw(json!({
            "id": 7,
            "first": "Eric",
            "name": "Meyer",
            "contacts": "e@x.com",
            "ignored": true
        })))
        .unwrap();

        assert_eq!(record.id, Some(7));
        assert_eq!(record.first(), Some("Eric"));
        assert_eq!(record.last(), Some("Meyer"));
        assert_eq!(record.contact(), Some("e@x.com"));
    }

    #[test]
    fn test_parse_absent_values() {
        let record = CustomerRecord::parse(&raw(json!({ "id": null, "first": null }))).unwrap();
        assert_eq!(record, CustomerRecord::default());

        let record = CustomerRecord::parse(&raw(json!({ "id": "" }))).unwrap();
        assert_eq!(record.id, None);
    }

    #[test]
    fn test_parse_fractional_id_truncates() {
        let record = CustomerRecord::parse(&raw(json!({ "id": 3.9 }))).unwrap();
        assert_eq!(record.id, Some(3));
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        assert!(CustomerRecord::parse(&raw(json!({ "id": "seven" }))).is_err());
        assert!(CustomerRecord::parse(&raw(json!({ "first": 1 }))).is_err());
        assert!(CustomerRecord::parse(&raw(json!({ "contacts": ["a", "b"] }))).is_err());
    }

    #[test]
    fn test_has_names_checks_keys_only() {
        assert!(has_names(&raw(json!({ "first": null, "name": "Meyer" }))));
        assert!(!has_names(&raw(json!({ "name": "Meyer" }))));
    }
}
