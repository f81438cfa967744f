//! Per-statement outcomes and the aggregate batch summary.
//!
//! A failing statement never aborts a batch. The runner folds every call into
//! a `StatementOutcome` and the report classifies the whole run.

use chrono::{DateTime, Utc};
use std::fmt;

/// Result of submitting one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementOutcome {
    Succeeded { index: usize },
    Failed { index: usize, error: String },
}

impl StatementOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StatementOutcome::Succeeded { .. })
    }
}

/// A statement the remote endpoint rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedStatement {
    pub index: usize,
    pub error: String,
}

/// Aggregate classification of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchSummary {
    /// Every statement succeeded. Also the summary of an empty batch.
    AllSucceeded,
    PartiallyFailed(Vec<FailedStatement>),
    AllFailed(Vec<FailedStatement>),
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[StatementOutcome]) -> Self {
        let failed: Vec<FailedStatement> = outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                StatementOutcome::Failed { index, error } => Some(FailedStatement {
                    index: *index,
                    error: error.clone(),
                }),
                StatementOutcome::Succeeded { .. } => None,
            })
            .collect();

        if failed.is_empty() {
            BatchSummary::AllSucceeded
        } else if failed.len() == outcomes.len() {
            BatchSummary::AllFailed(failed)
        } else {
            BatchSummary::PartiallyFailed(failed)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BatchSummary::AllSucceeded)
    }

    pub fn failures(&self) -> &[FailedStatement] {
        match self {
            BatchSummary::AllSucceeded => &[],
            BatchSummary::PartiallyFailed(failed) | BatchSummary::AllFailed(failed) => failed,
        }
    }
}

/// Full account of one migration run.
#[derive(Debug, Clone)]
pub struct MigrationReport {
    pub outcomes: Vec<StatementOutcome>,
    pub summary: BatchSummary,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl MigrationReport {
    pub fn new(
        outcomes: Vec<StatementOutcome>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let summary = BatchSummary::from_outcomes(&outcomes);
        Self {
            outcomes,
            summary,
            started_at,
            finished_at,
        }
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} statements succeeded",
            self.succeeded(),
            self.total()
        )?;
        let failures = self.summary.failures();
        if !failures.is_empty() {
            let numbers: Vec<String> = failures.iter().map(|f| format!("#{}", f.index + 1)).collect();
            write!(f, "; failed: {}", numbers.join(", "))?;
        }
        Ok(())
    }
}
