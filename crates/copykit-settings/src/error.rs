//! Error types for settings persistence.

use thiserror::Error;

/// Primary error type for settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Underlying database operation failed.
    #[error("database operation failed")]
    Database {
        /// Operation identifier.
        operation: &'static str,
        /// Source database error.
        source: sqlx::Error,
    },
    /// The settings record could not be serialized for storage.
    #[error("failed to serialize settings record")]
    Serialize {
        /// Source serialization error.
        source: serde_json::Error,
    },
}

/// Convenience alias for settings results.
pub type SettingsResult<T> = Result<T, SettingsError>;
