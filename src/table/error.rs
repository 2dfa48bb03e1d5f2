//! Table construction errors

use thiserror::Error;

/// Errors raised while assembling a `Table`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Two columns share a name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Columns disagree on row count
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;
