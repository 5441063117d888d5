//! rss-grabber - download everything an RSS feed links to.
//!
//! A single-pass batch job meant to be scheduled externally. Each run:
//!
//! - Loads `config.yaml` from beside the executable
//! - Fetches the feed and extracts every `<item><link>`
//! - Downloads each link into the output directory, one at a time
//! - Optionally announces each download on a Discord webhook
//!
//! Failed items are logged and skipped; nothing is remembered between runs.
//!
//! # Example
//!
//! ```no_run
//! use rss_grabber::{Config, HttpClient, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(&Config::default_path()?)?;
//!     let client = HttpClient::new(None)?;
//!
//!     let outcomes = Pipeline::new(config, client).run().await?;
//!     println!("{} items processed", outcomes.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod feed;
pub mod fs;
pub mod http;
pub mod logging;
pub mod notify;
pub mod output;
pub mod pipeline;

// Re-exports for convenience
pub use config::{Config, DiscordConfig};
pub use download::{ItemOutcome, SkipReason};
pub use error::{Error, Result};
pub use feed::FeedItem;
pub use http::HttpClient;
pub use notify::DiscordNotifier;
pub use pipeline::Pipeline;
