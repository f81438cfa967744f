//! Creator Platform - Payment verification and database tooling
//!
//! This crate implements the server side of the creator support flow:
//! verifying checkout sessions after a supporter returns from checkout,
//! applying SQL migrations to the hosted database, and serving the web app
//! manifest.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
