//! Ports and Adapters Infrastructure
//!
//! Foundational traits for the hexagonal layout of the workspace. Each domain
//! defines its own repository trait extending [`DomainPort`]; storage adapters
//! implement it and may report their state through [`HealthCheckable`].
//!
//! ```text
//! ┌──────────────────────────────┐
//! │   HTTP layer (interface_api) │
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │   Repository trait (port)    │
//! │   CustomerRepository         │
//! └──────────────────────────────┘
//!                ▲
//!                │
//! ┌──────────────────────────────┐
//! │   In-memory adapter          │
//! └──────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Marker trait for all domain ports
///
/// Port implementations must be shareable across the request handlers of
/// the async runtime.
pub trait DomainPort: Send + Sync + 'static {}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    /// Creates a result stamped with the current time
    pub fn new(adapter_id: impl Into<String>, message: Option<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            message,
            checked_at: chrono::Utc::now(),
        }
    }
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    ///
    /// # Returns
    ///
    /// A `HealthCheckResult` indicating the current health status
    async fn health_check(&self) -> HealthCheckResult;
}
