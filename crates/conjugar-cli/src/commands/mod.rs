//! CLI command implementations.

mod check;
mod conjugate;
mod question;
mod source;
mod table;
mod validate;
mod verbs;

pub use check::{run_check, CheckArgs};
pub use conjugate::{run_conjugate, ConjugateArgs};
pub use question::{run_question, QuestionArgs};
pub use source::TableSource;
pub use table::{run_table, TableArgs};
pub use validate::{run_validate, ValidateArgs};
pub use verbs::{run_verbs, VerbsArgs};

use conjugar::{Conjugator, Person, ResolveError, Tense};

use crate::output::print_json;

/// A verb, tense and person given on the command line.
#[derive(Debug, clap::Args)]
pub struct RequestArgs {
    /// Infinitive (e.g. tener)
    pub verb: String,

    /// Tense name or alias (e.g. present, preterito, futuro)
    pub tense: String,

    /// Person name or pronoun (e.g. first_singular, yo, nosotros)
    pub person: String,
}

impl RequestArgs {
    /// Validates verb, then tense, then person.
    pub fn parse(&self, conjugator: &Conjugator) -> Result<(Tense, Person), ResolveError> {
        conjugator.verb(&self.verb)?;
        Ok((self.tense.parse()?, self.person.parse()?))
    }
}

/// Prints a resolution error and returns the exit code for bad input.
pub fn report_resolve_error(error: &ResolveError, json: bool) -> miette::Result<i32> {
    if json {
        print_json(&serde_json::json!({ "error": error.to_string() }))?;
    } else {
        eprintln!("error: {}", error);
    }
    Ok(exitcode::DATAERR)
}
