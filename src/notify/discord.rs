//! Discord webhook notifier.

use chrono::Utc;

use crate::config::DiscordConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::notify::payload::WebhookPayload;

/// Posts a message to a Discord webhook for every completed download.
#[derive(Debug, Clone)]
pub struct DiscordNotifier {
    client: HttpClient,
    config: DiscordConfig,
}

impl DiscordNotifier {
    pub fn new(client: HttpClient, config: DiscordConfig) -> Self {
        Self { client, config }
    }

    /// Whether notifications will actually be sent.
    pub fn is_active(&self) -> bool {
        self.config.is_active()
    }

    /// Announce a download. Failures are logged and never returned.
    pub async fn notify_download(&self, filename: &str) {
        if !self.is_active() {
            return;
        }

        match self.send(filename).await {
            Ok(()) => {
                tracing::info!(filename = %filename, "Discord notification sent successfully");
            }
            Err(e) => {
                tracing::error!(filename = %filename, error = %e, "Failed to send Discord webhook");
            }
        }
    }

    async fn send(&self, filename: &str) -> Result<()> {
        let payload = WebhookPayload::download_complete(
            filename,
            self.config.username.as_deref(),
            self.config.avatar_url.as_deref(),
            Utc::now(),
        );
        let body = serde_json::to_vec(&payload)?;

        let response = self
            .client
            .post_json(&self.config.webhook_url, body)
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Notification(format!(
                "webhook returned non-success status {}",
                status.as_u16()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn notifier(webhook_url: String, enabled: bool) -> DiscordNotifier {
        DiscordNotifier::new(
            HttpClient::new(None).unwrap(),
            DiscordConfig {
                webhook_url,
                enabled,
                username: Some("grabber".into()),
                avatar_url: None,
            },
        )
    }

    #[tokio::test]
    async fn test_notify_posts_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(serde_json::json!({
                "username": "grabber",
                "embeds": [{
                    "description": "**foo**",
                    "color": 65280
                }]
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        notifier(format!("{}/hook", server.uri()), true)
            .notify_download("foo.torrent")
            .await;
    }

    #[tokio::test]
    async fn test_disabled_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let notifier = notifier(format!("{}/hook", server.uri()), false);
        assert!(!notifier.is_active());
        notifier.notify_download("foo.torrent").await;
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_inactive() {
        let notifier = notifier(String::new(), true);
        assert!(!notifier.is_active());
        notifier.notify_download("foo.torrent").await;
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = notifier(format!("{}/hook", server.uri()), true);
        assert!(matches!(
            notifier.send("foo.torrent").await,
            Err(Error::Notification(_))
        ));
    }

    #[tokio::test]
    async fn test_transport_error_is_swallowed() {
        notifier("http://127.0.0.1:1/hook".into(), true)
            .notify_download("foo.torrent")
            .await;
    }
}
