//! Output module for console output and progress.
//!
//! Provides:
//! - Colored fatal error output
//! - Download progress bars

pub mod console;
pub mod progress;

pub use console::print_error;
pub use progress::create_download_bar;
