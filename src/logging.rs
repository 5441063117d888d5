//! Process-wide logging setup.

use std::fmt;

use chrono::Local;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

/// Timestamp layout used on every log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Logging settings, fixed at startup.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Default level when `RUST_LOG` is not set.
    pub level: &'static str,
    /// strftime layout for the timestamp column.
    pub timestamp_format: &'static str,
    /// Whether to print the module path of each event.
    pub show_target: bool,
}

impl LogSettings {
    pub fn new(debug: bool) -> Self {
        Self {
            level: if debug { "debug" } else { "info" },
            ..Default::default()
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info",
            timestamp_format: TIMESTAMP_FORMAT,
            show_target: false,
        }
    }
}

/// Local wall-clock timestamps in a fixed layout.
#[derive(Debug, Clone, Copy)]
pub struct LocalTimestamp {
    format: &'static str,
}

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(self.format))
    }
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init(settings: &LogSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(settings.show_target)
        .with_timer(LocalTimestamp {
            format: settings.timestamp_format,
        })
        .init();
}
