//! Console output for ranking runs.
//!
//! The coloured report goes to stdout; JSON output bypasses colouring entirely
//! so it can be piped.

pub mod console;
pub mod shared;

pub use console::print_report;

use anyhow::Result;

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
