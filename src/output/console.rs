//! Console output utilities.

use console::style;

/// Print a fatal error message to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}
