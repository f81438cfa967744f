//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Payment Ports
//!
//! - `PaymentVerifier` - Client side of the checkout return handshake
//! - `CheckoutSessionReader` - Server side lookup at the payment provider
//!
//! ## Browser Ports
//!
//! - `Notifier` - Transient user-facing messages
//! - `BrowserLocation` - Visible URL and history rewriting
//!
//! ## Database Ports
//!
//! - `SqlExecutor` - Remote SQL execution for migrations

mod browser_location;
mod checkout_session_reader;
mod notifier;
mod payment_verifier;
mod sql_executor;

pub use browser_location::BrowserLocation;
pub use checkout_session_reader::{CheckoutSessionReader, CheckoutSessionSummary};
pub use notifier::Notifier;
pub use payment_verifier::{PaymentError, PaymentErrorCode, PaymentVerifier};
pub use sql_executor::{SqlError, SqlExecutor};
