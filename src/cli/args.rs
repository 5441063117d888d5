//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// RSS feed grabber CLI.
#[derive(Parser, Debug, Default)]
#[command(
    name = "rss-grabber",
    version,
    about = "Download every file linked from an RSS feed",
    long_about = "Fetches an RSS feed once, downloads the file behind each item link into the \
                  output directory, and optionally announces each download on a Discord webhook.\n\n\
                  Intended to be run from cron or a systemd timer."
)]
pub struct Args {
    /// Path to configuration file (defaults to config.yaml next to the executable).
    #[arg(short, long, env = "RSS_GRABBER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the feed URL.
    #[arg(long = "rss-url")]
    pub rss_url: Option<String>,

    /// Override the output directory.
    #[arg(short, long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Never send Discord notifications.
    #[arg(long)]
    pub no_notify: bool,

    /// Per-request timeout in seconds. Requests wait indefinitely by default.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Show a progress bar for large downloads.
    #[arg(long)]
    pub progress: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(rss_url) = &self.rss_url {
            config.rss_url = rss_url.clone();
        }

        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }

        if self.no_notify {
            config.discord.enabled = false;
        }
    }
}
