//! Migration handlers.
//!
//! - Running a SQL script statement by statement
//! - Probing the database without side effects

mod check_connectivity;
mod run_migration;

pub use check_connectivity::{CheckConnectivityHandler, ConnectivityReport};
pub use run_migration::{
    completion_message, MigrationError, RunMigrationHandler,
};
