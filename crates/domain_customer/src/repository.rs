//! Customer repository port and in-memory adapter
//!
//! `CustomerRepository` is the CRUD surface over customers, keyed by id.
//! Ids are the only way to address stored customers. An unassigned (negative)
//! id is never stored: lookups with it find nothing and deletes ignore it.
//! Saving a customer with an unassigned id is rejected with `InvalidArgument`.
//!
//! # Invariants
//!
//! - No two stored customers share an id. Saving a customer whose id is
//!   already stored replaces the stored entry and keeps its position.
//! - `find_all` returns customers in insertion order.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use core_kernel::{is_assigned, next_id, DomainPort, EntityId, HealthCheckResult, HealthCheckable};

use crate::customer::Customer;
use crate::error::CustomerError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, CustomerError>;

/// Repository interface for customer CRUD operations
pub trait CustomerRepository: DomainPort {
    /// Saves a customer, replacing any stored customer with the same id
    fn save(&mut self, customer: Customer) -> RepoResult<Customer>;

    /// Saves all customers in order; the first unassigned id aborts
    fn save_all(&mut self, customers: Vec<Customer>) -> RepoResult<Vec<Customer>> {
        customers.into_iter().map(|customer| self.save(customer)).collect()
    }

    fn exists_by_id(&self, id: EntityId) -> RepoResult<bool>;

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Customer>>;

    /// Returns all customers in insertion order
    fn find_all(&self) -> Vec<Customer>;

    /// Returns the customers matching `ids`, in the order of `ids`
    fn find_all_by_id(&self, ids: &[EntityId]) -> RepoResult<Vec<Customer>>;

    fn count(&self) -> usize;

    /// Largest stored id, `None` when empty
    fn max_id(&self) -> Option<EntityId>;

    /// Id the next created customer receives when the caller supplies none
    fn next_id(&self) -> EntityId {
        next_id(self.max_id())
    }

    /// Deletes by id; a missing or unassigned id is a no-op
    fn delete_by_id(&mut self, id: EntityId) -> RepoResult<()>;

    /// Deletes the stored customer carrying this customer's id
    fn delete(&mut self, customer: &Customer) -> RepoResult<()> {
        self.delete_by_id(customer.id())
    }

    fn delete_all_by_id(&mut self, ids: &[EntityId]) -> RepoResult<()> {
        ids.iter().try_for_each(|id| self.delete_by_id(*id))
    }

    fn delete_all_entities(&mut self, customers: &[Customer]) -> RepoResult<()> {
        customers.iter().try_for_each(|customer| self.delete(customer))
    }

    fn delete_all(&mut self);
}

fn require_id(id: EntityId) -> RepoResult<EntityId> {
    if is_assigned(id) {
        Ok(id)
    } else {
        Err(CustomerError::invalid_argument(format!(
            "customer id must be assigned, got {}",
            id
        )))
    }
}

/// In-memory customer store
///
/// Backed by an id-keyed map plus the insertion order of ids.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCustomerStore {
    customers: HashMap<EntityId, Customer>,
    order: Vec<EntityId>,
}

impl InMemoryCustomerStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a store, for tests and demo data
    pub fn with_customers(customers: Vec<Customer>) -> RepoResult<Self> {
        let mut store = Self::new();
        store.save_all(customers)?;
        Ok(store)
    }
}

impl DomainPort for InMemoryCustomerStore {}

impl CustomerRepository for InMemoryCustomerStore {
    fn save(&mut self, customer: Customer) -> RepoResult<Customer> {
        let id = require_id(customer.id())?;
        if self.customers.insert(id, customer.clone()).is_none() {
            self.order.push(id);
            debug!(customer_id = id, "customer inserted");
        } else {
            debug!(customer_id = id, "customer replaced");
        }
        Ok(customer)
    }

    fn exists_by_id(&self, id: EntityId) -> RepoResult<bool> {
        Ok(self.customers.contains_key(&id))
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Customer>> {
        Ok(self.customers.get(&id).cloned())
    }

    fn find_all(&self) -> Vec<Customer> {
        self.order
            .iter()
            .filter_map(|id| self.customers.get(id).cloned())
            .collect()
    }

    fn find_all_by_id(&self, ids: &[EntityId]) -> RepoResult<Vec<Customer>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.customers.get(id).cloned())
            .collect())
    }

    fn count(&self) -> usize {
        self.customers.len()
    }

    fn max_id(&self) -> Option<EntityId> {
        self.customers.keys().copied().max()
    }

    fn delete_by_id(&mut self, id: EntityId) -> RepoResult<()> {
        if self.customers.remove(&id).is_some() {
            self.order.retain(|stored| *stored != id);
            debug!(customer_id = id, "customer deleted");
        }
        Ok(())
    }

    fn delete_all(&mut self) {
        self.customers.clear();
        self.order.clear();
    }
}

#[async_trait]
impl HealthCheckable for InMemoryCustomerStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::new(
            "in-memory-customer-store",
            Some(format!("{} customers", self.count())),
        )
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn count_tracks_distinct_ids(
            saved in proptest::collection::vec(0i64..20i64, 0..40),
            removed in proptest::collection::vec(0i64..20i64, 0..10)
        ) {
            let mut store = InMemoryCustomerStore::new();
            for id in &saved {
                let mut customer = Customer::new();
                customer.set_id(*id);
                store.save(customer).unwrap();
            }
            store.delete_all_by_id(&removed).unwrap();

            let expected: std::collections::HashSet<_> = saved
                .iter()
                .filter(|id| !removed.contains(id))
                .collect();
            prop_assert_eq!(store.count(), expected.len());
            prop_assert_eq!(store.find_all().len(), expected.len());
        }
    }
}
