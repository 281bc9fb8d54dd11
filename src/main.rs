//! # Skimmer CLI
//!
//! Command-line driver for the page skimmer. Takes a list of URLs and a
//! shared per-request timeout, fetches all pages concurrently, and prints
//! one result block per page as text or JSON. Per-page failures are
//! reported inside the results, never as a process failure.

use anyhow::Result;
use clap::Parser;
use skimmer::scrape::{ScrapeConfig, scrape_all};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Fetch web pages concurrently and skim each into a title and leading text",
    long_about = None
)]
struct Cli {
    /// URLs to fetch
    #[arg(required = true)]
    urls: Vec<String>,

    /// Per-request timeout in milliseconds
    #[arg(short, long, default_value = "3000")]
    timeout: u64,

    /// Maximum number of words to keep from each page body
    #[arg(short = 'w', long, default_value = "100")]
    max_words: usize,

    /// Emit results as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the results on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skimmer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ScrapeConfig::builder()
        .timeout_ms(cli.timeout)
        .max_words(cli.max_words)
        .build();

    let results = scrape_all(&cli.urls, &config).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!(
                "Page: {}\nTitle: {}\nContent: {}\n",
                result.url, result.title, result.content
            );
        }
    }

    let failures = results.iter().filter(|r| r.is_failure()).count();
    if failures > 0 {
        info!("{} of {} pages failed", failures, results.len());
    }

    Ok(())
}
