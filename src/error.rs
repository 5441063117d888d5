//! Error types for the rss-grabber application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    #[error("Could not resolve executable path: {0}")]
    ExecutablePath(std::io::Error),

    // Feed errors
    #[error("Failed to fetch feed: {0}")]
    FeedFetch(String),

    #[error("Failed to parse feed: {0}")]
    FeedParse(String),

    #[error("Error creating output directory: {0}")]
    OutputDir(String),

    // Download errors
    #[error("Feed item has no link")]
    MissingLink,

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Bad status: {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("Unexpected content type: {0}")]
    UnexpectedContentType(String),

    #[error("Could not determine filename")]
    MissingFilename,

    #[error("Invalid filename (path traversal attempt): {0}")]
    InvalidFilename(String),

    #[error("Error writing file: {0}")]
    Write(String),

    // Notification errors
    #[error("Notification failed: {0}")]
    Notification(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for a fatal error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::MissingConfig(_)
            | Error::ExecutablePath(_)
            | Error::YamlParse(_) => exit_codes::CONFIG_ERROR,
            Error::FeedFetch(_) | Error::FeedParse(_) => exit_codes::FEED_ERROR,
            _ => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FEED_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const UNEXPECTED_ERROR: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            Error::MissingConfig("rss_url".into()).exit_code(),
            exit_codes::CONFIG_ERROR
        );
        assert_eq!(
            Error::FeedParse("eof".into()).exit_code(),
            exit_codes::FEED_ERROR
        );
        assert_eq!(
            Error::Io(std::io::Error::other("disk")).exit_code(),
            exit_codes::UNEXPECTED_ERROR
        );
    }
}
