//! # Page Skimming Module
//!
//! This module fetches web pages concurrently and skims each into a
//! `PageResult`: the page title plus a bounded number of words of visible
//! body text. It is the whole pipeline of the crate, from HTTP GET to the
//! collected result set.
//!
//! ## Key Components
//!
//! - `PageResult`: the immutable per-URL outcome record
//! - `fetch_page`: one bounded-time GET plus extraction for a single URL
//! - `extract`: title and leading-text extraction from a parsed document
//! - `scrape_all`: one concurrent task per URL, unordered collection
//! - `ScrapeConfig`: timeout, user agent, and word-cap configuration
//!
//! Failures never escape a fetch task. A timeout or transport error is
//! folded into the returned `PageResult` as a sentinel title plus a
//! human-readable message, so every input URL yields exactly one result.

mod batch;
mod config;
mod error;
mod extract;
mod fetch;

// Re-export important types and functions
pub use batch::scrape_all;
pub use config::{ScrapeConfig, ScrapeConfigBuilder};
pub use error::ScrapeError;
pub use extract::{DEFAULT_MAX_WORDS, extract};
pub use fetch::fetch_page;

use serde::{Deserialize, Serialize};

/// Outcome of skimming a single page
///
/// Exactly one exists per requested URL, produced when the fetch attempt
/// concludes and never mutated afterwards. `url` echoes the original
/// request target verbatim, not the post-redirect URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// URL the fetch was asked for
    pub url: String,

    /// Text of the page's `<title>` element, or a failure sentinel
    ///
    /// A structurally valid page without a `<title>` yields an empty
    /// string here; that is expected, not an error.
    pub title: String,

    /// Leading words of visible body text, or a failure description
    pub content: String,
}

impl PageResult {
    /// Title sentinel for a fetch that exceeded its deadline
    pub const TIMEOUT_TITLE: &'static str = "Timeout";

    /// Title sentinel for any other fetch failure
    pub const ERROR_TITLE: &'static str = "Error";

    /// Content sentinel for a page whose body has no eligible text
    pub const NO_CONTENT: &'static str = "No content found";

    const TIMEOUT_MESSAGE: &'static str = "The request timed out.";

    /// Result for a fetch that did not complete within its deadline
    pub(crate) fn timed_out(url: &str) -> Self {
        Self {
            url: url.to_string(),
            title: Self::TIMEOUT_TITLE.to_string(),
            content: Self::TIMEOUT_MESSAGE.to_string(),
        }
    }

    /// Result for any non-timeout fetch failure
    pub(crate) fn failed(url: &str, message: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            title: Self::ERROR_TITLE.to_string(),
            content: message.into(),
        }
    }

    /// Whether this result records a failed fetch rather than page content
    ///
    /// Failures are signaled through the title field, so a page whose real
    /// title happens to be one of the sentinel strings is indistinguishable
    /// from a failure.
    pub fn is_failure(&self) -> bool {
        self.title == Self::TIMEOUT_TITLE || self.title == Self::ERROR_TITLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_results() {
        let timeout = PageResult::timed_out("https://example.com");
        assert_eq!(timeout.url, "https://example.com");
        assert_eq!(timeout.title, "Timeout");
        assert_eq!(timeout.content, "The request timed out.");
        assert!(timeout.is_failure());

        let error = PageResult::failed("https://example.com", "connection refused");
        assert_eq!(error.title, "Error");
        assert_eq!(error.content, "connection refused");
        assert!(error.is_failure());
    }

    #[test]
    fn test_successful_result_is_not_failure() {
        let page = PageResult {
            url: "https://example.com".to_string(),
            title: "Example Domain".to_string(),
            content: "This domain is for use in illustrative examples.".to_string(),
        };

        assert!(!page.is_failure());
    }
}
