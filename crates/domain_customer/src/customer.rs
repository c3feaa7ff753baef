//! Customer entity
//!
//! A customer is an individual who acts as holder of a business relationship.
//! The entity is created with an unassigned id, receives its id exactly once,
//! and is then mutated in place by the update path.
//!
//! # Examples
//!
//! ```rust
//! use domain_customer::customer::{Customer, CustomerStatus};
//!
//! let mut customer = Customer::new();
//! customer
//!     .set_id(1)
//!     .set_name(Some("Eric"), Some("Meyer"))
//!     .add_contact(Some("eric98@yahoo.com"))
//!     .set_status(CustomerStatus::Active);
//!
//! assert_eq!(customer.name(), "Meyer, Eric");
//! assert_eq!(customer.contacts_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

use core_kernel::{is_assigned, EntityId, UNASSIGNED_ID};

use crate::name::split_name_with;

/// Lifecycle status of a customer
///
/// Any status may be set at any time; deletion is a store operation and is
/// not implied by `Deleted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerStatus {
    #[default]
    New,
    InRegistration,
    Active,
    Suspended,
    Deleted,
}

/// Customer entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Identity, `< 0` while unassigned, immutable once assigned
    id: EntityId,
    /// Non-surname name parts, `""` when empty
    first_name: String,
    /// Surname, `""` when empty
    last_name: String,
    /// Contact entries in insertion order, trimmed and unique
    contacts: Vec<String>,
    status: CustomerStatus,
}

impl Default for Customer {
    fn default() -> Self {
        Self {
            id: UNASSIGNED_ID,
            first_name: String::new(),
            last_name: String::new(),
            contacts: Vec::new(),
            status: CustomerStatus::New,
        }
    }
}

impl Customer {
    /// Creates an unassigned customer with empty name parts
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the customer id, negative while unassigned
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns whether the id has been assigned
    pub fn has_id(&self) -> bool {
        is_assigned(self.id)
    }

    /// Sets the id once
    ///
    /// The id is only taken when it is valid (`>= 0`) and the customer is
    /// still unassigned; every other call leaves the id unchanged.
    pub fn set_id(&mut self, id: EntityId) -> &mut Self {
        if !self.has_id() && is_assigned(id) {
            self.id = id;
        }
        self
    }

    /// Returns the first name, `""` when unset
    ///
    /// Holds every name part except the surname, space-separated.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the surname, `""` when unset
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the single-string name `"last, first"`, or `"last"` when the
    /// first name is empty
    pub fn name(&self) -> String {
        if self.first_name.is_empty() {
            self.last_name.clone()
        } else {
            format!("{}, {}", self.last_name, self.first_name)
        }
    }

    /// Splits a single-string name such as `"Eric Meyer"` into first and last
    /// name and assigns both parts
    ///
    /// `None` or an empty string leaves both parts unchanged.
    pub fn set_full_name(&mut self, name: Option<&str>) -> &mut Self {
        if let Some(name) = name {
            let (first, last) = split_name_with(name, &self.first_name, &self.last_name);
            self.set_name(Some(&first), Some(&last));
        }
        self
    }

    /// Assigns first and last name independently
    ///
    /// A `None` part leaves the corresponding name unchanged; provided values
    /// are trimmed.
    pub fn set_name(&mut self, first: Option<&str>, last: Option<&str>) -> &mut Self {
        if let Some(first) = first {
            self.first_name = first.trim().to_string();
        }
        if let Some(last) = last {
            self.last_name = last.trim().to_string();
        }
        self
    }

    /// Returns the contact entries in insertion order
    ///
    /// Entries are trimmed and unique.
    pub fn contacts(&self) -> &[String] {
        &self.contacts
    }

    /// Returns the number of contact entries
    pub fn contacts_count(&self) -> usize {
        self.contacts.len()
    }

    /// Adds a contact entry
    ///
    /// Entries are trimmed; `None`, blank and duplicate entries are ignored.
    pub fn add_contact(&mut self, contact: Option<&str>) -> &mut Self {
        let Some(contact) = contact.map(str::trim).filter(|c| !c.is_empty()) else {
            return self;
        };
        if !self.contacts.iter().any(|existing| existing == contact) {
            self.contacts.push(contact.to_string());
        }
        self
    }

    /// Deletes the contact at `index`; out-of-range indices have no effect
    pub fn delete_contact(&mut self, index: usize) {
        if index < self.contacts.len() {
            self.contacts.remove(index);
        }
    }

    /// Removes every contact entry
    pub fn delete_all_contacts(&mut self) {
        self.contacts.clear();
    }

    /// Returns the lifecycle status, `New` for fresh customers
    pub fn status(&self) -> CustomerStatus {
        self.status
    }

    /// Sets the lifecycle status
    ///
    /// Any status may follow any other; `Deleted` does not remove the
    /// customer from a store.
    pub fn set_status(&mut self, status: CustomerStatus) -> &mut Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_is_unassigned() {
        let customer = Customer::new();
        assert_eq!(customer.id(), UNASSIGNED_ID);
        assert!(!customer.has_id());
        assert_eq!(customer.first_name(), "");
        assert_eq!(customer.last_name(), "");
        assert_eq!(customer.contacts_count(), 0);
        assert_eq!(customer.status(), CustomerStatus::New);
    }

    #[test]
    fn test_set_id_once() {
        let mut customer = Customer::new();
        customer.set_id(5);
        assert_eq!(customer.id(), 5);

        customer.set_id(6);
        customer.set_id(UNASSIGNED_ID);
        assert_eq!(customer.id(), 5);
    }

    #[test]
    fn test_set_id_rejects_negative() {
        let mut customer = Customer::new();
        customer.set_id(-10);
        assert!(!customer.has_id());

        customer.set_id(0);
        assert_eq!(customer.id(), 0);
    }

    #[test]
    fn test_name_format() {
        let mut customer = Customer::new();
        customer.set_name(Some("Eric"), Some("Meyer"));
        assert_eq!(customer.name(), "Meyer, Eric");

        customer.set_name(Some(""), None);
        assert_eq!(customer.name(), "Meyer");
    }

    #[test]
    fn test_set_name_trims_and_keeps_absent_parts() {
        let mut customer = Customer::new();
        customer.set_name(Some("  Anne "), Some(" Bayer  "));
        customer.set_name(None, Some("Meyer"));

        assert_eq!(customer.first_name(), "Anne");
        assert_eq!(customer.last_name(), "Meyer");
    }

    #[test]
    fn test_set_full_name() {
        let mut customer = Customer::new();
        customer.set_full_name(Some("Nadine Ulla Blumenfeld"));
        assert_eq!(customer.first_name(), "Nadine Ulla");
        assert_eq!(customer.last_name(), "Blumenfeld");

        customer.set_full_name(Some("Meyer, Anne"));
        assert_eq!(customer.first_name(), "Anne");
        assert_eq!(customer.last_name(), "Meyer");
    }

    #[test]
    fn test_set_full_name_absent_is_noop() {
        let mut customer = Customer::new();
        customer.set_name(Some("Eric"), Some("Meyer"));

        customer.set_full_name(None);
        customer.set_full_name(Some(""));

        assert_eq!(customer.name(), "Meyer, Eric");
    }

    #[test]
    fn test_add_contact_ignores_empty_and_duplicates() {
        let mut customer = Customer::new();
        customer
            .add_contact(Some("eric98@yahoo.com"))
            .add_contact(Some("  eric98@yahoo.com  "))
            .add_contact(Some(""))
            .add_contact(None)
            .add_contact(Some("(030) 3945-642298"));

        assert_eq!(customer.contacts(), ["eric98@yahoo.com", "(030) 3945-642298"]);
    }

    #[test]
    fn test_delete_contact() {
        let mut customer = Customer::new();
        customer.add_contact(Some("a")).add_contact(Some("b")).add_contact(Some("c"));

        customer.delete_contact(1);
        assert_eq!(customer.contacts(), ["a", "c"]);

        customer.delete_contact(2);
        assert_eq!(customer.contacts_count(), 2);

        customer.delete_all_contacts();
        assert_eq!(customer.contacts_count(), 0);
    }

    #[test]
    fn test_any_status_can_be_set() {
        let mut customer = Customer::new();
        customer.set_status(CustomerStatus::Deleted);
        assert_eq!(customer.status(), CustomerStatus::Deleted);

        customer.set_status(CustomerStatus::InRegistration);
        assert_eq!(customer.status(), CustomerStatus::InRegistration);
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let mut customer = Customer::new();
        customer.set_id(1).set_name(Some("Eric"), Some("Meyer"));

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["firstName"], "Eric");
        assert_eq!(json["lastName"], "Meyer");
        assert_eq!(json["status"], "New");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn set_id_is_idempotent_once(first in 0i64..1_000_000i64, later in proptest::collection::vec(any::<i64>(), 0..10)) {
            let mut customer = Customer::new();
            customer.set_id(first);
            for id in later {
                customer.set_id(id);
            }
            prop_assert_eq!(customer.id(), first);
        }

        #[test]
        fn contacts_stay_unique(contacts in proptest::collection::vec("[ ]{0,2}[a-c]{1,2}[ ]{0,2}", 0..30)) {
            let mut customer = Customer::new();
            for contact in &contacts {
                customer.add_contact(Some(contact));
            }

            let mut seen = std::collections::HashSet::new();
            for contact in customer.contacts() {
                prop_assert_eq!(contact.trim(), contact.as_str());
                prop_assert!(seen.insert(contact.clone()));
            }
        }

        #[test]
        fn delete_out_of_range_keeps_length(count in 0usize..10, offset in 0usize..10) {
            let mut customer = Customer::new();
            for i in 0..count {
                customer.add_contact(Some(&format!("contact-{}", i)));
            }
            customer.delete_contact(count + offset);
            prop_assert_eq!(customer.contacts_count(), count);
        }
    }
}
