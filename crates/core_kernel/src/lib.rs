//! Core Kernel - Foundational types for the customer registry
//!
//! This crate provides the building blocks used across the workspace:
//! - Identity policy for integer entity ids (unassigned sentinel, next-id assignment)
//! - Port marker and health-check traits implemented by storage adapters

pub mod identifiers;
pub mod ports;

pub use identifiers::{is_assigned, next_id, EntityId, UNASSIGNED_ID};
pub use ports::{DomainPort, HealthCheckResult, HealthCheckable};
