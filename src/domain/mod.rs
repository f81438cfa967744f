//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (validation errors)
//! - `payment` - Checkout return handshake (session reference, result, notifications)
//! - `migration` - SQL script splitting and batch outcomes
//! - `manifest` - Web app manifest bundled with the site

pub mod foundation;
pub mod manifest;
pub mod migration;
pub mod payment;
