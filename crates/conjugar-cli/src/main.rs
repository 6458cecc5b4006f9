//! conjugar CLI entry point.
//!
//! Command-line front end over the conjugation resolver:
//! - `conjugar conjugate` - Resolve one form
//! - `conjugar table` - Show every person for a verb and tense
//! - `conjugar question` / `conjugar check` - Quiz prompts and grading
//! - `conjugar verbs` - Quiz groups per tense
//! - `conjugar validate` - Lint a table file

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_conjugate, run_question, run_table, run_validate, run_verbs, CheckArgs,
    ConjugateArgs, QuestionArgs, TableArgs, TableSource, ValidateArgs, VerbsArgs,
};
use tracing_subscriber::EnvFilter;

/// Spanish verb conjugation tools.
#[derive(Debug, Parser)]
#[command(name = "conjugar")]
#[command(about = "Spanish verb conjugation tools", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub source: TableSource,

    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve the conjugated form for a verb, tense and person
    Conjugate(ConjugateArgs),
    /// Show the full person table for a verb and tense
    Table(TableArgs),
    /// Print the fill-in-the-blank prompt for a verb, tense and person
    Question(QuestionArgs),
    /// Grade an answer
    Check(CheckArgs),
    /// List the verb groups offered for each tense
    Verbs(VerbsArgs),
    /// Load a table and report lint warnings
    Validate(ValidateArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_directive = if verbose { "conjugar=debug" } else { "conjugar=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Conjugate(args) => run_conjugate(&cli.source, args),
        Commands::Table(args) => run_table(&cli.source, args),
        Commands::Question(args) => run_question(&cli.source, args),
        Commands::Check(args) => run_check(&cli.source, args),
        Commands::Verbs(args) => run_verbs(&cli.source, args),
        Commands::Validate(args) => run_validate(&cli.source, args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
