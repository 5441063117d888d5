//! Notification module.
//!
//! Provides:
//! - Discord webhook payloads
//! - A notifier that never fails the run

pub mod discord;
pub mod payload;

pub use discord::DiscordNotifier;
pub use payload::{display_name, Embed, WebhookPayload};
