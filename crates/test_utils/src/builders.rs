//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{EntityId, UNASSIGNED_ID};
use domain_customer::{Customer, CustomerStatus};

/// Builder for constructing test customers
pub struct TestCustomerBuilder {
    id: EntityId,
    first_name: String,
    last_name: String,
    contacts: Vec<String>,
    status: CustomerStatus,
}

impl Default for TestCustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCustomerBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: UNASSIGNED_ID,
            first_name: "Eric".to_string(),
            last_name: "Meyer".to_string(),
            contacts: Vec::new(),
            status: CustomerStatus::New,
        }
    }

    /// Sets the customer ID
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    /// Sets first and last name
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// Adds a contact entry
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contacts.push(contact.into());
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: CustomerStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the customer through the entity's own setters
    pub fn build(self) -> Customer {
        let mut customer = Customer::new();
        customer
            .set_id(self.id)
            .set_name(Some(&self.first_name), Some(&self.last_name))
            .set_status(self.status);
        for contact in &self.contacts {
            customer.add_contact(Some(contact));
        }
        customer
    }
}
