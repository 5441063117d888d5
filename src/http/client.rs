//! Shared HTTP client.

use std::time::Duration;

use reqwest::{header, Client, Response};

use crate::error::{Error, Result};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("rss-grabber/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over a configured `reqwest::Client`.
///
/// Every call is awaited by the caller before the next one is issued, so a
/// single client is shared by the feed fetch, the downloads and the webhook.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a client. Without a timeout, requests wait indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Issue a plain GET. The status is not checked here.
    pub async fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        tracing::debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// POST an already serialized JSON body.
    pub async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<Response> {
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        tracing::debug!("Response status: {}", response.status());
        Ok(response)
    }
}
