//! Statement batch derived from a migration script.

use super::splitter::{SplitStrategy, TERMINATOR};

/// One statement of a migration batch, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    /// Zero-based position in file order.
    pub index: usize,
    pub sql: String,
}

impl SqlStatement {
    /// One-based position, as shown in operator logs.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Ordered statements of a migration script. File order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementBatch {
    statements: Vec<SqlStatement>,
}

impl StatementBatch {
    /// Splits a script and re-appends the terminator to every statement.
    pub fn parse(script: &str, strategy: SplitStrategy) -> Self {
        let statements = strategy
            .split(script)
            .into_iter()
            .enumerate()
            .map(|(index, body)| SqlStatement {
                index,
                sql: format!("{body}{TERMINATOR}"),
            })
            .collect();
        Self { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SqlStatement> {
        self.statements.iter()
    }
}

impl<'a> IntoIterator for &'a StatementBatch {
    type Item = &'a SqlStatement;
    type IntoIter = std::slice::Iter<'a, SqlStatement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
