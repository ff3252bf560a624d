// Rust guideline compliant 2026-10-17

//! Error types for the Petstore core library.

use thiserror::Error;

/// Result type alias for Petstore operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Petstore operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid Pet data.
    #[error("Invalid Pet: {0}")]
    InvalidPet(String),

    /// Pet identifier is not a positive integer.
    #[error("Invalid ID supplied: {0}")]
    InvalidId(String),

    /// Pet not found.
    #[error("Pet not found: {0}")]
    NotFound(i64),

    /// Uploaded file name cannot be stored safely.
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    /// Configuration value is missing or malformed.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
