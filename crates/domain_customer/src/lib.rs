//! Customer Domain
//!
//! This crate maintains customer records in memory and implements the
//! batch upsert protocol used to create and update them.
//!
//! # Components
//!
//! - **name**: splits free-text names into first and last name
//! - **customer**: the customer entity with its one-time id and contact list
//! - **repository**: the `CustomerRepository` port and its in-memory adapter
//! - **record** / **batch**: raw batch records and the bulk create/update protocol
//! - **service**: lock-guarded facade used by the HTTP layer
//!
//! # Examples
//!
//! ```rust
//! use domain_customer::{batch, CustomerRepository, InMemoryCustomerStore, Outcome};
//! use serde_json::json;
//!
//! let mut store = InMemoryCustomerStore::new();
//! let records = serde_json::from_value(json!([
//!     { "first": "Eric", "name": "Meyer", "contacts": "eric98@yahoo.com" },
//!     { "id": 1, "first": "Anne", "name": "Bayer" }
//! ])).unwrap();
//!
//! let report = batch::create_batch(&mut store, records);
//!
//! // the second record collides with the id assigned to the first
//! assert_eq!(report.outcome, Outcome::Conflict);
//! assert_eq!(store.count(), 1);
//! ```

pub mod batch;
pub mod customer;
pub mod error;
pub mod name;
pub mod record;
pub mod repository;
pub mod service;

pub use batch::{create_batch, update_batch, BatchReport, Outcome};
pub use customer::{Customer, CustomerStatus};
pub use error::CustomerError;
pub use name::{split_name, split_name_with};
pub use record::{CustomerRecord, RawRecord};
pub use repository::{CustomerRepository, InMemoryCustomerStore, RepoResult};
pub use service::CustomerService;
