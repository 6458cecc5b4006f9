//! Implementation of the `conjugar verbs` command.

use conjugar::quiz::quiz_sections;

use super::TableSource;
use crate::output::{format_sections_table, print_json};

/// Arguments for the verbs command.
#[derive(Debug, clap::Args)]
pub struct VerbsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the verbs command.
pub fn run_verbs(source: &TableSource, args: VerbsArgs) -> miette::Result<i32> {
    let conjugator = source.conjugator()?;
    let sections = quiz_sections(&conjugator);

    if args.json {
        print_json(&sections)?;
    } else {
        println!("{}", format_sections_table(&sections));
    }
    Ok(exitcode::OK)
}
