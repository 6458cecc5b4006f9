//! Implementation of the `conjugar table` command.

use conjugar::{Person, Tense};
use serde::Serialize;

use super::{report_resolve_error, TableSource};
use crate::output::{format_conjugation_table, print_json, ConjugationRow};

/// Arguments for the table command.
#[derive(Debug, clap::Args)]
pub struct TableArgs {
    /// Infinitive (e.g. tener)
    pub verb: String,

    /// Tense name or alias
    pub tense: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a full person table.
#[derive(Serialize)]
struct TableJson<'a> {
    verb: &'a str,
    tense: Tense,
    forms: Vec<ConjugationRow>,
}

/// Run the table command.
pub fn run_table(source: &TableSource, args: TableArgs) -> miette::Result<i32> {
    let conjugator = source.conjugator()?;

    let tense: Tense = match conjugator
        .verb(&args.verb)
        .and_then(|_| args.tense.parse())
    {
        Ok(tense) => tense,
        Err(e) => return report_resolve_error(&e, args.json),
    };

    let mut rows = Vec::new();
    for person in Person::all() {
        match conjugator.resolve_detailed(&args.verb, tense, person) {
            Ok(conjugation) => rows.push(ConjugationRow {
                person,
                form: conjugation.form,
                source: conjugation.source,
            }),
            Err(e) => return report_resolve_error(&e, args.json),
        }
    }

    if args.json {
        print_json(&TableJson {
            verb: &args.verb,
            tense,
            forms: rows,
        })?;
    } else {
        println!("{} ({})", args.verb, tense.name());
        println!("{}", format_conjugation_table(&rows));
    }
    Ok(exitcode::OK)
}
