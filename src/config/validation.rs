//! Configuration validation logic.

use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_rss_url(&config.rss_url)?;

    if config.output_dir.as_os_str().is_empty() {
        return Err(Error::MissingConfig("output_dir".to_string()));
    }

    if config.discord.enabled && config.discord.webhook_url.trim().is_empty() {
        tracing::warn!("Discord notifications enabled but no webhook_url set, skipping them");
    }

    Ok(())
}

/// Validate the feed URL.
pub fn validate_rss_url(rss_url: &str) -> Result<()> {
    if rss_url.trim().is_empty() {
        return Err(Error::MissingConfig("rss_url".to_string()));
    }

    Url::parse(rss_url).map_err(|e| Error::ConfigValidation {
        field: "rss_url".to_string(),
        message: format!("'{}' is not a valid URL: {}", rss_url, e),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiscordConfig;
    use std::path::PathBuf;

    fn make_config(rss_url: &str, output_dir: &str) -> Config {
        Config {
            rss_url: rss_url.to_string(),
            output_dir: PathBuf::from(output_dir),
            discord: DiscordConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&make_config("https://example.com/rss", "out")).is_ok());
    }

    #[test]
    fn test_empty_rss_url() {
        assert!(matches!(
            validate_config(&make_config("  ", "out")),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_relative_rss_url() {
        assert!(matches!(
            validate_config(&make_config("feed.xml", "out")),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_empty_output_dir() {
        assert!(matches!(
            validate_config(&make_config("https://example.com/rss", "")),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_enabled_without_webhook_is_not_an_error() {
        let mut config = make_config("https://example.com/rss", "out");
        config.discord.enabled = true;
        assert!(validate_config(&config).is_ok());
    }
}
