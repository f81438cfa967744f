//! Migration module - SQL script batches and their outcomes.
//!
//! - `SplitStrategy` - how a script is cut into statements
//! - `StatementBatch` / `SqlStatement` - ordered statements, file order kept
//! - `StatementOutcome` / `BatchSummary` / `MigrationReport` - best-effort run results

mod report;
mod splitter;
mod statement;

pub use report::{BatchSummary, FailedStatement, MigrationReport, StatementOutcome};
pub use splitter::{SplitStrategy, TERMINATOR};
pub use statement::{SqlStatement, StatementBatch};
