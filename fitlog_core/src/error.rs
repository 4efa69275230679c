//! Error types for the fitlog_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitlog_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backup document could not be parsed at all
    #[error("Backup parse error: {0}")]
    BackupUnreadable(String),

    /// Backup document parsed but is missing required keys
    #[error("Invalid backup file: {0}")]
    BackupInvalid(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
