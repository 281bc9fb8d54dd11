//! Error types for the scrape module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for scrape orchestration
///
/// Per-page failures never surface here; they are folded into the
/// `PageResult` sentinels inside each fetch task. This type covers only
/// run-level failures, such as being unable to build the HTTP client.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<ScrapeError> for CrateError {
    fn from(err: ScrapeError) -> Self {
        match err {
            ScrapeError::Http(e) => CrateError::Http(e),
            ScrapeError::Other(msg) => CrateError::Scrape(msg),
        }
    }
}
