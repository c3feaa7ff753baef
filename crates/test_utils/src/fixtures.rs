//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for customers and batch records.
//! These fixtures are designed to be consistent and predictable for unit tests.

use domain_customer::{Customer, RawRecord};
use serde_json::{json, Value};

use crate::builders::TestCustomerBuilder;

/// Fixture for customer test data
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// Customer 1: Eric Meyer with e-mail and phone contacts
    pub fn eric_meyer() -> Customer {
        TestCustomerBuilder::new()
            .with_id(1)
            .with_name("Eric", "Meyer")
            .with_contact("eric98@yahoo.com")
            .with_contact("(030) 3945-642298")
            .build()
    }

    /// Customer 2: Anne Bayer with e-mail and phone contacts
    pub fn anne_bayer() -> Customer {
        TestCustomerBuilder::new()
            .with_id(2)
            .with_name("Anne", "Bayer")
            .with_contact("anne24@yahoo.de")
            .with_contact("(030) 3481-23352")
            .build()
    }

    /// Customer 3: Tim Schulz-Mueller with a single contact
    pub fn tim_schulz_mueller() -> Customer {
        TestCustomerBuilder::new()
            .with_id(3)
            .with_name("Tim", "Schulz-Mueller")
            .with_contact("tim2346@gmx.de")
            .build()
    }

    /// All three standard customers, ids 1 to 3
    pub fn all() -> Vec<Customer> {
        vec![Self::eric_meyer(), Self::anne_bayer(), Self::tim_schulz_mueller()]
    }
}

/// Fixture for raw batch records
pub struct RecordFixtures;

impl RecordFixtures {
    /// Converts a JSON object into a raw record
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a JSON object
    pub fn raw(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("expected JSON object, got {}", other),
        }
    }

    /// Converts a JSON array of objects into raw records
    ///
    /// # Panics
    ///
    /// Panics if `value` is not an array of objects
    pub fn batch(value: Value) -> Vec<RawRecord> {
        match value {
            Value::Array(items) => items.into_iter().map(Self::raw).collect(),
            other => panic!("expected JSON array, got {}", other),
        }
    }

    /// Create record without id
    pub fn create(first: &str, last: &str, contact: &str) -> RawRecord {
        Self::raw(json!({ "first": first, "name": last, "contacts": contact }))
    }

    /// Create record with an explicit id
    pub fn create_with_id(id: i64, first: &str, last: &str) -> RawRecord {
        Self::raw(json!({ "id": id, "first": first, "name": last }))
    }

    /// Update record setting both names and adding one contact
    pub fn update(first: &str, last: &str, contact: &str) -> RawRecord {
        Self::create(first, last, contact)
    }
}
