//! Error types for the web front end

use thiserror::Error;

/// Errors raised while loading the index or navigating
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed
    #[error("Search index request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Index endpoint answered with a non-success status
    #[error("Search index endpoint returned HTTP {0}")]
    Status(u16),

    /// Core library error
    #[error(transparent)]
    Core(#[from] kb_search_core::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Script evaluation in the page failed
    #[error("Navigation failed: {0}")]
    Navigation(String),
}
