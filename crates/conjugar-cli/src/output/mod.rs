//! Output formatting for CLI commands.

mod diagnostic;
mod table;

pub use diagnostic::TableDiagnostic;
pub use table::{format_conjugation_table, format_sections_table, ConjugationRow};

use miette::IntoDiagnostic;
use serde::Serialize;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> miette::Result<()> {
    let json_output = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{}", json_output);
    Ok(())
}
