//! Implementation of the `conjugar conjugate` command.

use conjugar::FormSource;
use serde::Serialize;

use super::{report_resolve_error, RequestArgs, TableSource};
use crate::output::print_json;

/// Arguments for the conjugate command.
#[derive(Debug, clap::Args)]
pub struct ConjugateArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Also show the regular form when an override applies
    #[arg(long)]
    pub explain: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a resolved form.
#[derive(Serialize)]
struct ConjugateJson<'a> {
    verb: &'a str,
    tense: &'static str,
    person: &'static str,
    form: String,
    source: FormSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    regular_form: Option<String>,
}

/// Run the conjugate command.
pub fn run_conjugate(source: &TableSource, args: ConjugateArgs) -> miette::Result<i32> {
    let conjugator = source.conjugator()?;
    let request = &args.request;

    let (tense, person) = match request.parse(&conjugator) {
        Ok(parsed) => parsed,
        Err(e) => return report_resolve_error(&e, args.json),
    };

    let conjugation = match conjugator.resolve_detailed(&request.verb, tense, person) {
        Ok(conjugation) => conjugation,
        Err(e) => return report_resolve_error(&e, args.json),
    };

    // The regular form may be unavailable (e.g. unsupported ending); that is
    // only worth showing when it exists.
    let regular_form = (args.explain && conjugation.source == FormSource::Override)
        .then(|| conjugator.regular_form(&request.verb, tense, person).ok())
        .flatten();

    if args.json {
        print_json(&ConjugateJson {
            verb: &request.verb,
            tense: tense.name(),
            person: person.name(),
            form: conjugation.form,
            source: conjugation.source,
            regular_form,
        })?;
    } else {
        println!("{}", conjugation.form);
        if let Some(regular) = regular_form {
            println!("(irregular; the regular rule would give '{}')", regular);
        }
    }
    Ok(exitcode::OK)
}
