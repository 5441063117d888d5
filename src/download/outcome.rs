//! Per-item download outcomes.

use std::fmt;
use std::path::PathBuf;

use crate::error::Error;

/// Why an item was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The feed item carried no link.
    Link,
    /// The request could not be sent or the connection failed.
    Request,
    /// The server answered with a non-2xx status.
    Status,
    /// The response was not an `application/*` body.
    ContentType,
    /// No usable filename could be derived.
    Filename,
    /// The file could not be created or written.
    Write,
}

impl SkipReason {
    /// Classify a download error.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::MissingLink => SkipReason::Link,
            Error::BadStatus(_) => SkipReason::Status,
            Error::UnexpectedContentType(_) => SkipReason::ContentType,
            Error::MissingFilename | Error::InvalidFilename(_) => SkipReason::Filename,
            Error::Write(_) | Error::Io(_) => SkipReason::Write,
            _ => SkipReason::Request,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Link => write!(f, "link"),
            SkipReason::Request => write!(f, "request"),
            SkipReason::Status => write!(f, "status"),
            SkipReason::ContentType => write!(f, "content type"),
            SkipReason::Filename => write!(f, "filename"),
            SkipReason::Write => write!(f, "write"),
        }
    }
}

/// Result of processing one feed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Downloaded {
        link: String,
        path: PathBuf,
    },
    Skipped {
        link: String,
        reason: SkipReason,
        error: String,
    },
}

impl ItemOutcome {
    /// Build a skipped outcome from the error that caused it.
    pub fn skipped(link: impl Into<String>, err: &Error) -> Self {
        ItemOutcome::Skipped {
            link: link.into(),
            reason: SkipReason::from_error(err),
            error: err.to_string(),
        }
    }

    pub fn link(&self) -> &str {
        match self {
            ItemOutcome::Downloaded { link, .. } | ItemOutcome::Skipped { link, .. } => link,
        }
    }

    pub fn is_downloaded(&self) -> bool {
        matches!(self, ItemOutcome::Downloaded { .. })
    }
}
