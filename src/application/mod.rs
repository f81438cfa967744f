//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::migration::{
    CheckConnectivityHandler, ConnectivityReport, MigrationError, RunMigrationHandler,
};
pub use handlers::payment::{
    PaymentReturnHandler, PaymentReturnOutcome, VerifyCheckoutSessionCommand,
    VerifyCheckoutSessionHandler, VerifyPaymentError,
};
