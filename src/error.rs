//! Error types for sql-movies.

use thiserror::Error;

/// Result type alias for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Error types for fixture loading and query execution.
#[derive(Debug, Error)]
pub enum DbError {
    /// SQLite execution error (bad SQL, missing table, constraint fault).
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A single-row query returned no rows.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Row value could not be decoded into the requested shape.
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Fixture stage is unknown or could not be applied.
    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl DbError {
    /// Create a decode error for a specific column.
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Check if this is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
