//! Error types for the skimmer crate

use thiserror::Error;

/// Result type for skimmer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for skimmer operations
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Scrape orchestration error
    #[error("Scrape error: {0}")]
    Scrape(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
