//! Concurrent per-URL scrape orchestration

use reqwest::Client;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::scrape::error::ScrapeError;
use crate::scrape::fetch::fetch_page;
use crate::scrape::{PageResult, ScrapeConfig};

/// Fetch every URL concurrently and collect one result per URL
///
/// Each URL gets its own tokio task with an independent deadline; a slow or
/// failing page never delays or disturbs the others. Results arrive in
/// completion order, not input order, so consumers must correlate by the
/// `url` field rather than by position.
///
/// All tasks are fired at once, with no limit on in-flight requests. That
/// is adequate for the small URL lists this crate targets and is a known
/// limitation for anything larger.
#[instrument(skip(urls, config), fields(count = urls.len()))]
pub async fn scrape_all(
    urls: &[String],
    config: &ScrapeConfig,
) -> Result<Vec<PageResult>, ScrapeError> {
    info!("Scraping {} pages", urls.len());
    debug!("Scrape config: {:?}", config);

    let client = Client::builder()
        .user_agent(config.user_agent.clone())
        .build()?;

    let (tx, mut rx) = mpsc::channel(urls.len().max(1));
    for url in urls {
        let client = client.clone();
        let url = url.clone();
        let tx = tx.clone();
        let timeout = config.timeout();
        let max_words = config.max_words;

        tokio::spawn(async move {
            let result = fetch_page(&client, &url, timeout, max_words).await;
            // Fails only if the receiver was dropped, i.e. collection was
            // abandoned; the result is discarded in that case.
            let _ = tx.send(result).await;
        });
    }
    drop(tx);

    let mut results = Vec::with_capacity(urls.len());
    while let Some(result) = rx.recv().await {
        debug!("Collected result for {}", result.url);
        results.push(result);
    }

    info!("Scraped {} pages", results.len());
    Ok(results)
}
