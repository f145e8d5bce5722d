use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("Failed to serialize the UI tree: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A table was assembled inconsistently. This is a bug in the calling report,
/// not a data problem, so it is never silently tolerated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Table '{table}': row {row} references undeclared column '{key}'")]
    UnknownColumn {
        table: String,
        row: usize,
        key: String,
    },

    #[error("Table '{table}': row {row} sets cell '{key}' more than once")]
    DuplicateCell {
        table: String,
        row: usize,
        key: String,
    },

    #[error("Table '{table}': column '{key}' is declared more than once")]
    DuplicateColumn { table: String, key: String },

    #[error("Table '{table}': id column '{key}' is not a declared column")]
    UndeclaredIdColumn { table: String, key: String },

    #[error("Table '{table}': sort column '{key}' is not a declared column")]
    UndeclaredSortColumn { table: String, key: String },
}
