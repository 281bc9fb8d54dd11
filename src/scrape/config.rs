//! # Scrape Configuration Module
//!
//! This module provides configuration options for a scrape run: the
//! per-request timeout, the user agent, and the cap on extracted words.
//! It uses a builder pattern for flexible configuration.

use std::time::Duration;

use crate::scrape::extract::DEFAULT_MAX_WORDS;

/// Configuration for a scrape run
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Timeout in milliseconds applied independently to each request
    pub timeout_ms: u64,

    /// User agent to use for requests
    pub user_agent: String,

    /// Maximum number of words to extract from each page body
    pub max_words: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 3000,
            user_agent: format!("skimmer/{}", env!("CARGO_PKG_VERSION")),
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

/// Builder for ScrapeConfig
#[derive(Debug, Default)]
pub struct ScrapeConfigBuilder {
    config: ScrapeConfig,
}

impl ScrapeConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ScrapeConfig::default(),
        }
    }

    /// Set the per-request timeout in milliseconds
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    /// Set the user agent to use for requests
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the maximum number of words to extract from each page body
    pub fn max_words(mut self, max_words: usize) -> Self {
        self.config.max_words = max_words;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ScrapeConfig {
        self.config
    }
}

impl ScrapeConfig {
    /// Create a new builder
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::new()
    }

    /// Get the per-request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
