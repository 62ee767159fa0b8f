//! # Command Handlers
//!
//! One module per subcommand group. Handlers validate input with
//! navalha-core, call into the owning crate, and render the result as text
//! or pretty JSON.

pub mod backup;
pub mod outflow;
pub mod product;
pub mod report;
pub mod sale;

use anyhow::Result;
use serde::Serialize;

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Right-aligns a rendered money value for table output.
pub fn money_cell(value: navalha_core::Money) -> String {
    format!("{:>12}", value.to_string())
}
