//! Batch upsert protocol
//!
//! Bulk create and bulk update over a [`CustomerRepository`]. Records are
//! processed in order and the first failing record aborts the call. The
//! protocol is not transactional: records committed before the abort stay
//! in the store.
//!
//! The returned [`BatchReport`] lists the committed customers and, on abort,
//! the rejected raw records: the record that failed followed by every record
//! that was not processed.

use std::iter;

use serde::Serialize;
use tracing::{info, warn};

use core_kernel::EntityId;

use crate::customer::Customer;
use crate::error::CustomerError;
use crate::record::{has_names, CustomerRecord, RawRecord};
use crate::repository::CustomerRepository;

/// Aggregate classification of an operation, mapped to response codes by
/// the transport layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ok,
    Created,
    Accepted,
    BadRequest,
    Conflict,
    NotFound,
}

impl From<&CustomerError> for Outcome {
    fn from(error: &CustomerError) -> Self {
        match error {
            CustomerError::InvalidArgument(_) | CustomerError::BadRequest(_) => Outcome::BadRequest,
            CustomerError::NotFound(_) => Outcome::NotFound,
            CustomerError::Conflict(_) => Outcome::Conflict,
        }
    }
}

/// Result of a batch call
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub outcome: Outcome,
    /// Customers committed by this call, in record order
    pub accepted: Vec<Customer>,
    /// Raw records that were not applied, empty on success
    pub rejected: Vec<RawRecord>,
    /// The error that aborted the call
    pub error: Option<CustomerError>,
}

impl BatchReport {
    fn completed(outcome: Outcome, accepted: Vec<Customer>) -> Self {
        Self {
            outcome,
            accepted,
            rejected: Vec::new(),
            error: None,
        }
    }

    fn aborted(error: CustomerError, accepted: Vec<Customer>, rejected: Vec<RawRecord>) -> Self {
        Self {
            outcome: Outcome::from(&error),
            accepted,
            rejected,
            error: Some(error),
        }
    }
}

/// Creates one customer per record
///
/// Each record needs both name keys (`first`, `name`). A supplied `id` must
/// be positive; without one the next id after the largest stored id is
/// assigned. An id that is already stored aborts the call with `Conflict`.
/// Only a single contact string is read per record.
pub fn create_batch<R>(repo: &mut R, records: Vec<RawRecord>) -> BatchReport
where
    R: CustomerRepository + ?Sized,
{
    let mut accepted = Vec::with_capacity(records.len());
    let mut pending = records.into_iter();

    while let Some(raw) = pending.next() {
        let result = accept(&*repo, &raw).and_then(|customer| repo.save(customer));
        match result {
            Ok(customer) => accepted.push(customer),
            Err(error) => {
                warn!(error = %error, committed = accepted.len(), "bulk create aborted");
                let rejected = iter::once(raw).chain(pending).collect();
                return BatchReport::aborted(error, accepted, rejected);
            }
        }
    }

    info!(count = accepted.len(), "bulk create completed");
    BatchReport::completed(Outcome::Created, accepted)
}

/// Applies every record to the customer with `id`
///
/// Each record may set `first`, `name` and add one contact; absent fields
/// leave the customer unchanged. A missing customer aborts the call with
/// `NotFound`. An empty batch succeeds without looking the customer up.
pub fn update_batch<R>(repo: &mut R, id: EntityId, records: Vec<RawRecord>) -> BatchReport
where
    R: CustomerRepository + ?Sized,
{
    let mut accepted = Vec::with_capacity(records.len());
    let mut pending = records.into_iter();

    while let Some(raw) = pending.next() {
        match apply_update(repo, id, &raw) {
            Ok(customer) => accepted.push(customer),
            Err(error) => {
                warn!(customer_id = id, error = %error, "bulk update aborted");
                let rejected = iter::once(raw).chain(pending).collect();
                return BatchReport::aborted(error, accepted, rejected);
            }
        }
    }

    info!(customer_id = id, count = accepted.len(), "bulk update completed");
    BatchReport::completed(Outcome::Ok, accepted)
}

fn accept<R>(repo: &R, raw: &RawRecord) -> Result<Customer, CustomerError>
where
    R: CustomerRepository + ?Sized,
{
    if !has_names(raw) {
        return Err(CustomerError::bad_request("record requires 'first' and 'name'"));
    }
    let record = CustomerRecord::parse(raw)?;

    let id = match record.id {
        Some(id) if id <= 0 => {
            return Err(CustomerError::bad_request(format!("id must be positive, got {}", id)));
        }
        Some(id) => id,
        None => repo.next_id(),
    };
    if repo.exists_by_id(id)? {
        return Err(CustomerError::conflict(id));
    }

    let mut customer = Customer::new();
    customer
        .set_id(id)
        .set_name(record.first(), record.last())
        .add_contact(record.contact());
    Ok(customer)
}

fn apply_update<R>(repo: &mut R, id: EntityId, raw: &RawRecord) -> Result<Customer, CustomerError>
where
    R: CustomerRepository + ?Sized,
{
    let record = CustomerRecord::parse(raw)?;
    let mut customer = repo
        .find_by_id(id)?
        .ok_or_else(|| CustomerError::not_found(id))?;

    customer
        .set_name(record.first(), record.last())
        .add_contact(record.contact());
    repo.save(customer)
}
