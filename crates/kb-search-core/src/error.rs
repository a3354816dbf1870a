//! Error types for kb-search-core

use thiserror::Error;

/// Result type alias using kb-search-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kb-search-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Search document could not be loaded
    #[error("Index error: {0}")]
    Index(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
