//! RunMigrationHandler - Applies a SQL script one statement at a time.
//!
//! The remote endpoint has no transactions across calls, so the runner is
//! best-effort: every statement is submitted in file order and a failure is
//! recorded without stopping the batch.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::domain::migration::{MigrationReport, SplitStrategy, StatementBatch, StatementOutcome};
use crate::ports::SqlExecutor;

/// Banner printed once the statement loop is over, whatever the outcome.
pub const COMPLETION_BANNER: &str = "Migration completed!";

/// Console output for a finished run: the banner, then the one-line summary.
///
/// Failed statements do not suppress the banner.
pub fn completion_message(report: &MigrationReport) -> String {
    format!("{}\n{}", COMPLETION_BANNER, report)
}

/// Hard failures of a migration run. Statement errors are not among them.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Failed to read migration file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Handler for running migration scripts.
pub struct RunMigrationHandler {
    executor: Arc<dyn SqlExecutor>,
    strategy: SplitStrategy,
}

impl RunMigrationHandler {
    pub fn new(executor: Arc<dyn SqlExecutor>, strategy: SplitStrategy) -> Self {
        Self { executor, strategy }
    }

    /// Reads `path` and runs every statement in it.
    pub async fn run_file(&self, path: impl AsRef<Path>) -> Result<MigrationReport, MigrationError> {
        let path = path.as_ref();
        let script = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| MigrationError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(file = %path.display(), strategy = ?self.strategy, "Running migration");
        Ok(self.run_script(&script).await)
    }

    /// Splits `script` with the configured strategy and runs the result.
    pub async fn run_script(&self, script: &str) -> MigrationReport {
        let batch = StatementBatch::parse(script, self.strategy);
        self.run_batch(&batch).await
    }

    /// Executes each statement in order, awaiting one before the next.
    pub async fn run_batch(&self, batch: &StatementBatch) -> MigrationReport {
        let started_at = Utc::now();
        let mut outcomes = Vec::with_capacity(batch.len());

        for statement in batch {
            let outcome = match self.executor.execute(&statement.sql).await {
                Ok(()) => {
                    tracing::info!(statement = statement.number(), "statement {} executed", statement.number());
                    StatementOutcome::Succeeded {
                        index: statement.index,
                    }
                }
                Err(error) => {
                    tracing::error!(
                        statement = statement.number(),
                        error = %error,
                        "statement {} failed",
                        statement.number()
                    );
                    StatementOutcome::Failed {
                        index: statement.index,
                        error: error.to_string(),
                    }
                }
            };
            outcomes.push(outcome);
        }

        let report = MigrationReport::new(outcomes, started_at, Utc::now());
        tracing::info!(
            total = report.total(),
            succeeded = report.succeeded(),
            failed = report.failed(),
            elapsed_ms = report.elapsed().num_milliseconds(),
            "Migration batch finished"
        );
        report
    }
}
