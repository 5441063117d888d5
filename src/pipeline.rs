//! The fetch → parse → download → notify run.

use crate::config::Config;
use crate::download::{download_file, ItemOutcome};
use crate::error::{Error, Result};
use crate::feed::{fetch_feed, parse_feed, FeedItem};
use crate::fs::ensure_dir;
use crate::http::HttpClient;
use crate::notify::DiscordNotifier;

/// One pass over the feed.
///
/// Items are processed strictly one after another, in feed order. Setup
/// failures abort the run; item failures become [`ItemOutcome::Skipped`].
pub struct Pipeline {
    config: Config,
    client: HttpClient,
    notifier: DiscordNotifier,
    show_progress: bool,
}

impl Pipeline {
    pub fn new(config: Config, client: HttpClient) -> Self {
        let notifier = DiscordNotifier::new(client.clone(), config.discord.clone());
        Self {
            config,
            client,
            notifier,
            show_progress: false,
        }
    }

    /// Render progress bars for large downloads.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run the whole pass and return one outcome per feed item.
    pub async fn run(&self) -> Result<Vec<ItemOutcome>> {
        let output_dir = &self.config.output_dir;
        ensure_dir(output_dir)
            .map_err(|e| Error::OutputDir(format!("{}: {}", output_dir.display(), e)))?;

        let body = fetch_feed(&self.client, &self.config.rss_url).await?;
        let items = parse_feed(&body)?;
        tracing::debug!(url = %self.config.rss_url, items = items.len(), "Parsed feed");

        let mut outcomes = Vec::with_capacity(items.len());
        for item in &items {
            outcomes.push(self.process_item(item).await);
        }

        Ok(outcomes)
    }

    /// Download one item and announce it. Never fails the run.
    pub async fn process_item(&self, item: &FeedItem) -> ItemOutcome {
        match download_file(
            &self.client,
            &self.config.output_dir,
            &item.link,
            self.show_progress,
        )
        .await
        {
            Ok(file) => {
                tracing::info!(
                    path = %file.path.display(),
                    bytes = file.bytes,
                    "Successfully downloaded file"
                );
                self.notifier.notify_download(&file.filename).await;

                ItemOutcome::Downloaded {
                    link: item.link.clone(),
                    path: file.path,
                }
            }
            Err(e) => {
                tracing::error!(url = %item.link, error = %e, "Failed to download file");
                ItemOutcome::skipped(item.link.as_str(), &e)
            }
        }
    }
}
