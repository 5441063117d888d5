//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RSS feed to poll.
    pub rss_url: String,

    /// Directory downloaded files are written to.
    pub output_dir: PathBuf,

    #[serde(default)]
    pub discord: DiscordConfig,
}

/// Discord webhook notification configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Webhook endpoint. Notifications are skipped when empty.
    #[serde(default)]
    pub webhook_url: String,

    /// Whether to post a notification after each download.
    #[serde(default)]
    pub enabled: bool,

    /// Display name override for the webhook message.
    #[serde(default)]
    pub username: Option<String>,

    /// Avatar override for the webhook message.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl DiscordConfig {
    /// Notifications go out only when enabled and an endpoint is set.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.webhook_url.trim().is_empty()
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Config(format!(
                    "Error reading config file {}: {}",
                    path.display(),
                    e
                ))
            }
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Path of `config.yaml` in the directory of the running executable.
    pub fn default_path() -> Result<PathBuf> {
        let exe = std::env::current_exe().map_err(Error::ExecutablePath)?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(dir.join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
rss_url: https://example.com/feed.xml
output_dir: /srv/torrents
discord:
  enabled: true
  webhook_url: https://discord.com/api/webhooks/1/abc
  username: grabber
  avatar_url: https://example.com/a.png
"#,
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.rss_url, "https://example.com/feed.xml");
        assert_eq!(config.output_dir, PathBuf::from("/srv/torrents"));
        assert!(config.discord.enabled);
        assert_eq!(config.discord.username.as_deref(), Some("grabber"));
        assert!(config.discord.is_active());
    }

    #[test]
    fn test_discord_block_is_optional() {
        let file = write_config("rss_url: https://example.com/feed.xml\noutput_dir: out\n");

        let config = Config::load(file.path()).unwrap();
        assert!(!config.discord.enabled);
        assert!(config.discord.webhook_url.is_empty());
        assert!(!config.discord.is_active());
    }

    #[test]
    fn test_enabled_without_endpoint_is_inactive() {
        let file = write_config(
            "rss_url: https://example.com/feed.xml\noutput_dir: out\ndiscord:\n  enabled: true\n",
        );

        let config = Config::load(file.path()).unwrap();
        assert!(config.discord.enabled);
        assert!(!config.discord.is_active());
    }

    #[test]
    fn test_missing_required_key_fails() {
        let file = write_config("output_dir: out\n");
        assert!(matches!(
            Config::load(file.path()),
            Err(Error::YamlParse(_))
        ));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join(CONFIG_FILE_NAME));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_default_path_is_next_to_executable() {
        let path = Config::default_path().unwrap();
        assert_eq!(path.file_name().unwrap(), CONFIG_FILE_NAME);
        let exe = std::env::current_exe().unwrap();
        assert_eq!(path.parent(), exe.parent());
    }
}
