//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_customer::{BatchReport, Customer, Outcome};

/// Asserts the first and last name of a customer
///
/// # Panics
///
/// Panics if either part differs
pub fn assert_customer_name(customer: &Customer, first: &str, last: &str) {
    assert_eq!(
        (customer.first_name(), customer.last_name()),
        (first, last),
        "Name mismatch for customer {}: got '{}'",
        customer.id(),
        customer.name()
    );
}

/// Asserts that a customer holds `contact`
pub fn assert_has_contact(customer: &Customer, contact: &str) {
    assert!(
        customer.contacts().iter().any(|c| c == contact),
        "Customer {} has no contact '{}', contacts: {:?}",
        customer.id(),
        contact,
        customer.contacts()
    );
}

/// Asserts that a contact list holds no duplicates and only trimmed entries
pub fn assert_contacts_normalized(customer: &Customer) {
    let contacts = customer.contacts();
    for (i, contact) in contacts.iter().enumerate() {
        assert_eq!(contact.trim(), contact, "Contact '{}' is not trimmed", contact);
        assert!(
            !contacts[i + 1..].contains(contact),
            "Duplicate contact '{}' in {:?}",
            contact,
            contacts
        );
    }
}

/// Asserts a batch outcome and the number of rejected records
pub fn assert_batch_outcome(report: &BatchReport, outcome: Outcome, rejected: usize) {
    assert_eq!(
        report.outcome, outcome,
        "Unexpected batch outcome, error: {:?}",
        report.error
    );
    assert_eq!(
        report.rejected.len(),
        rejected,
        "Unexpected number of rejected records: {:?}",
        report.rejected
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::CustomerFixtures;

    #[test]
    fn test_name_and_contact_assertions() {
        let eric = CustomerFixtures::eric_meyer();
        assert_customer_name(&eric, "Eric", "Meyer");
        assert_has_contact(&eric, "eric98@yahoo.com");
        assert_contacts_normalized(&eric);
    }

    #[test]
    #[should_panic(expected = "Name mismatch")]
    fn test_name_assertion_fails() {
        assert_customer_name(&CustomerFixtures::anne_bayer(), "Eric", "Meyer");
    }
}
