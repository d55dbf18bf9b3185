/// Structured error types for the prodctl libraries.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (prodctl-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.

use thiserror::Error;

/// Main error type for catalog storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database driver reported a failure (connection, statement, decode)
    #[error("database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },

    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for catalog storage operations
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// True when the error came from the database driver rather than
    /// from local configuration.
    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database { .. })
    }
}
