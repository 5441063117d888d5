//! Discord webhook payload types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Embed title for a completed download.
pub const EMBED_TITLE: &str = "🧲 Torrent Downloaded Successfully";

/// Embed accent color (green).
pub const EMBED_COLOR: u32 = 0x00ff00;

/// Suffix hidden from the announced name.
const TORRENT_SUFFIX: &str = ".torrent";

/// Body of a webhook execution request.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    pub embeds: Vec<Embed>,
}

/// A single rich embed.
#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub timestamp: DateTime<Utc>,
}

impl WebhookPayload {
    /// Payload announcing that `filename` was downloaded.
    pub fn download_complete(
        filename: &str,
        username: Option<&str>,
        avatar_url: Option<&str>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            username: non_empty(username),
            avatar_url: non_empty(avatar_url),
            embeds: vec![Embed {
                title: EMBED_TITLE.to_string(),
                description: format!("**{}**", display_name(filename)),
                color: EMBED_COLOR,
                timestamp,
            }],
        }
    }
}

/// Filename without its `.torrent` suffix.
pub fn display_name(filename: &str) -> &str {
    filename.strip_suffix(TORRENT_SUFFIX).unwrap_or(filename)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("foo.torrent"), "foo");
        assert_eq!(display_name("foo.torrent.torrent"), "foo.torrent");
        assert_eq!(display_name("foo.zip"), "foo.zip");
        assert_eq!(display_name("foo.torrent.zip"), "foo.torrent.zip");
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = WebhookPayload::download_complete(
            "Show S01E01.torrent",
            Some("grabber"),
            Some("https://example.com/a.png"),
            fixed_time(),
        );

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "username": "grabber",
                "avatar_url": "https://example.com/a.png",
                "embeds": [{
                    "title": "🧲 Torrent Downloaded Successfully",
                    "description": "**Show S01E01**",
                    "color": 65280,
                    "timestamp": "2024-05-01T12:30:00Z"
                }]
            })
        );
    }

    #[test]
    fn test_empty_presentation_fields_are_omitted() {
        let payload = WebhookPayload::download_complete("a.torrent", Some(""), None, fixed_time());

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("username"));
        assert!(!object.contains_key("avatar_url"));
        assert_eq!(value["embeds"].as_array().unwrap().len(), 1);
    }
}
