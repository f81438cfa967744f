//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod migration;
pub mod payment;
