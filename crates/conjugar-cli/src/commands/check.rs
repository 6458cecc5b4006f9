//! Implementation of the `conjugar check` command.

use conjugar::Question;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::{report_resolve_error, RequestArgs, TableSource};
use crate::output::print_json;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// The submitted answer
    pub answer: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a graded answer.
#[derive(Serialize)]
struct CheckJson<'a> {
    correct: bool,
    submitted: &'a str,
    expected: &'a str,
}

/// Run the check command.
///
/// Exits with `OK` for a correct answer and `DATAERR` otherwise.
pub fn run_check(source: &TableSource, args: CheckArgs) -> miette::Result<i32> {
    let conjugator = source.conjugator()?;
    let request = &args.request;

    let question = match request
        .parse(&conjugator)
        .and_then(|(tense, person)| Question::new(&conjugator, &request.verb, tense, person))
    {
        Ok(question) => question,
        Err(e) => return report_resolve_error(&e, args.json),
    };
    let correct = question.check(&args.answer);

    if args.json {
        print_json(&CheckJson {
            correct,
            submitted: &args.answer,
            expected: &question.answer,
        })?;
    } else if correct {
        println!("{}", "correct".if_supports_color(Stream::Stdout, |t| t.green()));
    } else {
        println!(
            "{} expected '{}'",
            "incorrect:".if_supports_color(Stream::Stdout, |t| t.red()),
            question.answer
        );
    }

    Ok(if correct { exitcode::OK } else { exitcode::DATAERR })
}
