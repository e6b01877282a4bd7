//! Error types for vsafe-core.

use thiserror::Error;

/// Result type alias using vsafe-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for vsafe database maintenance
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Table {0} does not exist in this database")]
    MissingTable(&'static str),

    #[error("Table {0} already exists")]
    TableExists(&'static str),

    #[error("Column {column} already exists on table {table}")]
    ColumnExists {
        table: &'static str,
        column: &'static str,
    },
}
