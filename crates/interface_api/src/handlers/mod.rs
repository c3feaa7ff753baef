//! Request handlers

pub mod customers;
pub mod health;
