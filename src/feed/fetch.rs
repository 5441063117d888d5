//! Feed retrieval.

use crate::error::{Error, Result};
use crate::http::HttpClient;

/// Fetch the feed body. Transport errors and non-2xx statuses are fatal.
pub async fn fetch_feed(client: &HttpClient, rss_url: &str) -> Result<Vec<u8>> {
    let response = client
        .get(rss_url)
        .await
        .map_err(|e| Error::FeedFetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::FeedFetch(format!("bad status: {}", status)));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| Error::FeedFetch(format!("error reading body: {}", e)))?;

    tracing::debug!("Feed body: {} bytes", body.len());
    Ok(body.to_vec())
}
