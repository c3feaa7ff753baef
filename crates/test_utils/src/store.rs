//! Store Test Utilities
//!
//! Seeded repositories and services for tests that need existing customers.

use domain_customer::{Customer, CustomerRepository, CustomerService, InMemoryCustomerStore};

use crate::fixtures::CustomerFixtures;

/// Store holding the three standard fixture customers
pub fn seeded_store() -> InMemoryCustomerStore {
    store_with(CustomerFixtures::all())
}

/// Store holding exactly `customers`
///
/// # Panics
///
/// Panics if any customer has an unassigned id
pub fn store_with(customers: Vec<Customer>) -> InMemoryCustomerStore {
    InMemoryCustomerStore::with_customers(customers).expect("fixture customers must have ids")
}

/// Service over a store holding the three standard fixture customers
pub fn seeded_service() -> CustomerService<InMemoryCustomerStore> {
    CustomerService::new(seeded_store())
}

/// Ids of all stored customers in insertion order
pub fn stored_ids<R: CustomerRepository>(store: &R) -> Vec<i64> {
    store.find_all().iter().map(Customer::id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = seeded_store();
        assert_eq!(store.count(), 3);
        assert_eq!(stored_ids(&store), vec![1, 2, 3]);
    }
}
