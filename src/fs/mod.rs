//! Filesystem module.
//!
//! Provides:
//! - Output directory management
//! - Filename derivation and validation

pub mod naming;
pub mod paths;

pub use naming::{
    filename_from_content_disposition, filename_from_url, resolve_filename, sanitize_filename,
};
pub use paths::{ensure_dir, output_path};
