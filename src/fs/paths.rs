//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Ensure a directory exists, creating it and any parents if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Destination path for a downloaded file.
pub fn output_path(output_dir: &Path, filename: &str) -> PathBuf {
    output_dir.join(filename)
}
