//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `supabase` - Edge Function verifier and remote SQL executor
//! - `stripe` - Checkout session lookup
//! - `http` - Axum routes
//! - `notify` - Notification presenters
//! - `browser` - Browser location stand-in

pub mod browser;
pub mod http;
pub mod notify;
pub mod stripe;
pub mod supabase;
