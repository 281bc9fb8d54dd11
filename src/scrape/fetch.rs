//! Single-page fetch with a deadline and failure classification

use std::time::Duration;

use reqwest::Client;
use scraper::Html;
use tracing::{debug, instrument};

use crate::scrape::PageResult;
use crate::scrape::extract::extract;

/// Fetch a single page and skim it into a `PageResult`
///
/// The timeout covers the whole request, from connect to the end of the
/// body. Failures are classified into exactly two buckets: a timeout
/// anywhere in the request yields the `Timeout` sentinel, and everything
/// else (DNS failure, connection refused, TLS failure, malformed URL)
/// yields the `Error` sentinel with the transport error's message as
/// content. This function never fails and never retries; every call
/// produces exactly one result.
///
/// A page whose body has no eligible text reports the `No content found`
/// sentinel instead of an empty string.
#[instrument(skip(client))]
pub async fn fetch_page(
    client: &Client,
    url: &str,
    timeout: Duration,
    max_words: usize,
) -> PageResult {
    match fetch_body(client, url, timeout).await {
        Ok(body) => {
            let document = Html::parse_document(&body);
            let (title, content) = extract(&document, max_words);
            debug!("Extracted {} characters of content", content.len());

            let content = if content.is_empty() {
                PageResult::NO_CONTENT.to_string()
            } else {
                content
            };

            PageResult {
                url: url.to_string(),
                title,
                content,
            }
        }
        Err(err) if err.is_timeout() => {
            debug!("Request timed out after {:?}", timeout);
            PageResult::timed_out(url)
        }
        Err(err) => {
            debug!("Request failed: {}", err);
            PageResult::failed(url, err.to_string())
        }
    }
}

/// GET the raw body under a single deadline covering connect and read.
///
/// The status code is deliberately not inspected: non-2xx responses still
/// carry a parseable body. The response is fully consumed and dropped on
/// every path.
async fn fetch_body(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<String, reqwest::Error> {
    let response = client.get(url).timeout(timeout).send().await?;
    response.text().await
}
