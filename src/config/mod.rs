//! Configuration module for rss-grabber.
//!
//! This module handles:
//! - Loading `config.yaml` from beside the executable
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, DiscordConfig, CONFIG_FILE_NAME};
pub use validation::{validate_config, validate_rss_url};
