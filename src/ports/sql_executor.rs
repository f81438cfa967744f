//! SQL execution port used by the migration runner.
//!
//! The hosted database only accepts SQL through a remote RPC, so statements
//! are submitted one at a time and every call is independent. There is no
//! transaction spanning calls.

use async_trait::async_trait;
use thiserror::Error;

/// Port for submitting SQL to the remote database.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Execute one statement. Success carries no payload.
    async fn execute(&self, sql: &str) -> Result<(), SqlError>;

    /// Count rows of `table` without modifying anything.
    async fn count_rows(&self, table: &str) -> Result<u64, SqlError>;
}

/// Errors from the remote SQL endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Database rejected statement: {message}")]
    Rejected {
        message: String,
        code: Option<String>,
        hint: Option<String>,
    },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl SqlError {
    pub fn rejected(message: impl Into<String>) -> Self {
        SqlError::Rejected {
            message: message.into(),
            code: None,
            hint: None,
        }
    }
}
