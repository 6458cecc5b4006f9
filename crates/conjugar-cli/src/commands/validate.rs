//! Implementation of the `conjugar validate` command.

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::TableSource;
use crate::output::print_json;

/// Arguments for the validate command.
#[derive(Debug, clap::Args)]
pub struct ValidateArgs {
    /// Exit with non-zero code if any warning is found
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a validation run.
#[derive(Debug, Serialize)]
struct ValidateJson {
    table: String,
    verbs: usize,
    endings: Vec<String>,
    warnings: Vec<String>,
}

/// Run the validate command.
pub fn run_validate(source: &TableSource, args: ValidateArgs) -> miette::Result<i32> {
    let table = source.load_table()?;
    let warnings: Vec<String> = table.validate().iter().map(ToString::to_string).collect();

    if args.json {
        print_json(&ValidateJson {
            table: source.describe(),
            verbs: table.verbs().len(),
            endings: table.ending_classes().map(|c| c.to_string()).collect(),
            warnings: warnings.clone(),
        })?;
    } else {
        println!(
            "{}: {} verbs, endings {}",
            source.describe(),
            table.verbs().len(),
            table
                .ending_classes()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        if warnings.is_empty() {
            println!("{}", "no warnings".if_supports_color(Stream::Stdout, |t| t.green()));
        } else {
            println!("{} warning(s):", warnings.len());
            for warning in &warnings {
                println!(
                    "  {} {}",
                    "warning:".if_supports_color(Stream::Stdout, |t| t.yellow()),
                    warning
                );
            }
        }
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
