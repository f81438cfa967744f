//! CheckConnectivityHandler - Read-only check of the remote database.

use std::fmt;
use std::sync::Arc;

use crate::ports::SqlExecutor;

/// Result of a connectivity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectivityReport {
    Reachable { table: String, row_count: u64 },
    Unreachable { table: String, error: String },
}

impl ConnectivityReport {
    pub fn is_reachable(&self) -> bool {
        matches!(self, ConnectivityReport::Reachable { .. })
    }
}

impl fmt::Display for ConnectivityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectivityReport::Reachable { table, row_count } => {
                write!(f, "Connection OK: table '{}' has {} rows", table, row_count)
            }
            ConnectivityReport::Unreachable { table, error } => {
                write!(f, "Connection failed for table '{}': {}", table, error)
            }
        }
    }
}

/// Handler that counts rows of one table to confirm credentials and reachability.
pub struct CheckConnectivityHandler {
    executor: Arc<dyn SqlExecutor>,
}

impl CheckConnectivityHandler {
    pub fn new(executor: Arc<dyn SqlExecutor>) -> Self {
        Self { executor }
    }

    pub async fn check(&self, table: &str) -> ConnectivityReport {
        match self.executor.count_rows(table).await {
            Ok(row_count) => {
                tracing::info!(table, row_count, "Database reachable");
                ConnectivityReport::Reachable {
                    table: table.to_string(),
                    row_count,
                }
            }
            Err(error) => {
                tracing::error!(table, error = %error, "Database connectivity check failed");
                ConnectivityReport::Unreachable {
                    table: table.to_string(),
                    error: error.to_string(),
                }
            }
        }
    }
}
