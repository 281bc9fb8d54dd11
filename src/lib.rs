//! # Skimmer - Concurrent Web Page Skimming
//!
//! This crate fetches a set of web pages concurrently, each under its own
//! deadline, and skims each page into a bounded summary: the page title and
//! the first words of visible body text.
//!
//! ## Features
//!
//! - One independent tokio task per URL, each with a per-request timeout
//! - Failure classification into data-carrying sentinel results; a timed-out
//!   fetch and any other failure are both ordinary results, never errors
//!   crossing a task boundary
//! - HTML parsing with `scraper` and extraction via an explicit tree walk
//!   that skips script/style text and anything outside the `<body>`
//! - Async API with Tokio
//!
//! ## Example
//!
//! ```rust,no_run
//! use skimmer::scrape::{scrape_all, ScrapeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let urls = vec![
//!         "https://example.com".to_string(),
//!         "https://www.rust-lang.org".to_string(),
//!     ];
//!
//!     let config = ScrapeConfig::builder().timeout_ms(3000).build();
//!
//!     for page in scrape_all(&urls, &config).await? {
//!         println!("Page: {}\nTitle: {}\nContent: {}\n", page.url, page.title, page.content);
//!     }
//!     Ok(())
//! }
//! ```

mod error;

pub mod scrape;

pub use error::Error;

/// Re-export of common types for public use
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::error::Result;
    pub use crate::scrape::{PageResult, ScrapeConfig, scrape_all};
}
