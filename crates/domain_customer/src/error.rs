//! Customer domain errors
//!
//! Every failure in this crate is a deterministic validation outcome, never a
//! transient fault, so none of these errors is worth retrying.

use thiserror::Error;

use core_kernel::EntityId;

/// Errors that can occur in the customer domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    /// A required argument was missing or unassigned
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Customer with the given ID was not found
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// Attempted to create a customer whose id is already taken
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A batch record was malformed or incomplete
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl CustomerError {
    /// Creates an InvalidArgument error with a message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CustomerError::InvalidArgument(message.into())
    }

    /// Creates a NotFound error for a customer id
    pub fn not_found(id: EntityId) -> Self {
        CustomerError::NotFound(id.to_string())
    }

    /// Creates a Conflict error for an id that is already in use
    pub fn conflict(id: EntityId) -> Self {
        CustomerError::Conflict(format!("customer with id {} already exists", id))
    }

    /// Creates a BadRequest error with a message
    pub fn bad_request(message: impl Into<String>) -> Self {
        CustomerError::BadRequest(message.into())
    }

    /// Returns true if this error indicates the customer was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, CustomerError::NotFound(_))
    }
}
