//! Implementation of the `conjugar question` command.

use conjugar::Question;

use super::{report_resolve_error, RequestArgs, TableSource};
use crate::output::print_json;

/// Arguments for the question command.
#[derive(Debug, clap::Args)]
pub struct QuestionArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Include the expected answer
    #[arg(long)]
    pub show_answer: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the question command.
pub fn run_question(source: &TableSource, args: QuestionArgs) -> miette::Result<i32> {
    let conjugator = source.conjugator()?;
    let request = &args.request;

    let question = match request
        .parse(&conjugator)
        .and_then(|(tense, person)| Question::new(&conjugator, &request.verb, tense, person))
    {
        Ok(question) => question,
        Err(e) => return report_resolve_error(&e, args.json),
    };

    if args.json {
        if args.show_answer {
            print_json(&question)?;
        } else {
            print_json(&serde_json::json!({
                "verb": question.verb,
                "tense": question.tense,
                "person": question.person,
                "prompt": question.prompt,
                "context": question.context,
            }))?;
        }
    } else {
        println!("{}", question.context);
        println!("{}", question.prompt);
        if args.show_answer {
            println!("answer: {}", question.answer);
        }
    }
    Ok(exitcode::OK)
}
