//! Customer application service
//!
//! `CustomerService` owns one repository instance behind an async `RwLock`
//! and is the surface the transport layer calls. Every mutation runs under
//! the write lock; a batch holds the lock for its whole duration, so the
//! "largest id + 1" assignment of concurrent bulk creates cannot race.
//!
//! # Usage
//!
//! ```rust
//! use domain_customer::{CustomerService, InMemoryCustomerStore, Outcome};
//! use serde_json::json;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let service = CustomerService::new(InMemoryCustomerStore::new());
//! let records = serde_json::from_value(json!([{ "first": "Eric", "name": "Meyer" }])).unwrap();
//!
//! let report = service.create_batch(records).await;
//! assert_eq!(report.outcome, Outcome::Created);
//! assert_eq!(service.count().await, 1);
//! # });
//! ```

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use core_kernel::{EntityId, HealthCheckResult, HealthCheckable};

use crate::batch::{self, BatchReport, Outcome};
use crate::customer::Customer;
use crate::error::CustomerError;
use crate::record::RawRecord;
use crate::repository::CustomerRepository;

/// Lock-guarded facade over a customer repository
///
/// Cloning is cheap and yields a handle to the same repository.
#[derive(Debug)]
pub struct CustomerService<R> {
    repo: Arc<RwLock<R>>,
}

impl<R> Clone for CustomerService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(RwLock::new(repo)),
        }
    }

    /// Returns all customers in insertion order
    pub async fn list(&self) -> Vec<Customer> {
        self.repo.read().await.find_all()
    }

    /// Returns the customer with `id`
    pub async fn get(&self, id: EntityId) -> Result<Customer, CustomerError> {
        self.repo
            .read()
            .await
            .find_by_id(id)?
            .ok_or_else(|| CustomerError::not_found(id))
    }

    pub async fn count(&self) -> usize {
        self.repo.read().await.count()
    }

    /// Runs a bulk create under the write lock
    pub async fn create_batch(&self, records: Vec<RawRecord>) -> BatchReport {
        let mut repo = self.repo.write().await;
        batch::create_batch(&mut *repo, records)
    }

    /// Runs a bulk update of customer `id` under the write lock
    pub async fn update_batch(&self, id: EntityId, records: Vec<RawRecord>) -> BatchReport {
        let mut repo = self.repo.write().await;
        batch::update_batch(&mut *repo, id, records)
    }

    /// Deletes the customer with `id`
    ///
    /// Returns `Accepted` when a customer was removed and `NotFound` when
    /// none was stored under `id`.
    pub async fn delete(&self, id: EntityId) -> Outcome {
        let mut repo = self.repo.write().await;
        match repo.exists_by_id(id) {
            Ok(true) => {}
            Ok(false) => return Outcome::NotFound,
            Err(error) => return Outcome::from(&error),
        }
        match repo.delete_by_id(id) {
            Ok(()) => {
                info!(customer_id = id, "customer deleted");
                Outcome::Accepted
            }
            Err(error) => Outcome::from(&error),
        }
    }

    /// Saves `customers` only if the repository is empty
    ///
    /// Returns the number of stored customers afterwards.
    pub async fn seed(&self, customers: Vec<Customer>) -> Result<usize, CustomerError> {
        let mut repo = self.repo.write().await;
        if repo.count() == 0 {
            repo.save_all(customers)?;
        }
        let count = repo.count();
        info!(count, "customer repository ready");
        Ok(count)
    }
}

impl<R: CustomerRepository + HealthCheckable> CustomerService<R> {
    /// Health of the underlying repository
    pub async fn health_check(&self) -> HealthCheckResult {
        self.repo.read().await.health_check().await
    }
}
