//! Download module.
//!
//! This module provides:
//! - Validated, streamed file downloads
//! - Per-item outcome values

pub mod file;
pub mod outcome;

pub use file::{download_file, DownloadedFile};
pub use outcome::{ItemOutcome, SkipReason};
