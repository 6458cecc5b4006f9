//! Error and warning types for table loading and conjugation resolution.

use std::io;
use std::ops::Range;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{EndingClass, Person, Tense};

/// Errors that occur while loading a conjugation table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a table file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not valid TOML or does not match the table layout.
    #[error("{}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
        /// Byte range of the offending input, when the parser reports one.
        span: Option<Range<usize>>,
    },

    /// A verb appears in both the regular and irregular lists.
    #[error("verb '{verb}' is listed as both regular and irregular")]
    OverlappingVerb { verb: String },

    /// A verb appears twice in the same list.
    #[error("verb '{verb}' is listed more than once")]
    DuplicateVerb { verb: String },

    /// A declared ending class lacks a suffix for some tense and person.
    #[error("suffix table for {ending} is missing {tense} {person}")]
    MissingSuffix {
        ending: EndingClass,
        tense: Tense,
        person: Person,
    },

    /// Overrides were given for a verb that is in neither verb list.
    #[error("overrides given for unknown verb '{verb}'")]
    UnknownOverrideVerb { verb: String },

    /// An override cell holds an empty string.
    #[error("override for '{verb}' {tense} {person} is empty")]
    EmptyForm {
        verb: String,
        tense: Tense,
        person: Person,
    },
}

/// Non-fatal findings reported by table validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// The verb's ending has no suffix set, so its regular cells cannot resolve.
    #[error("verb '{verb}' ends in '-{ending}', which has no suffix table")]
    UnsupportedVerbEnding { verb: String, ending: String },

    /// An override stores exactly what the regular rule would produce.
    #[error("override for '{verb}' {tense} {person} ('{form}') matches the regular form")]
    RedundantOverride {
        verb: String,
        tense: Tense,
        person: Person,
        form: String,
    },

    /// A verb declared irregular has no override cells.
    #[error("irregular verb '{verb}' has no overrides")]
    IrregularWithoutOverrides { verb: String },

    /// A verb declared regular carries override cells.
    #[error("regular verb '{verb}' has {cells} override(s)")]
    RegularWithOverrides { verb: String, cells: usize },
}

/// An error raised while resolving a conjugation request.
///
/// Every variant is an input-validation failure: permanent, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The verb is not in the table.
    #[error("unknown verb '{verb}'{}, expected one of: {}", did_you_mean(suggestions), available.join(", "))]
    UnknownVerb {
        verb: String,
        available: Vec<String>,
        suggestions: Vec<String>,
    },

    /// The tense name is not recognized.
    #[error("unknown tense '{tense}'{}, expected one of: {}", did_you_mean(suggestions), available.join(", "))]
    UnknownTense {
        tense: String,
        available: Vec<String>,
        suggestions: Vec<String>,
    },

    /// The person name is not recognized.
    #[error("unknown person '{person}'{}, expected one of: {}", did_you_mean(suggestions), available.join(", "))]
    UnknownPerson {
        person: String,
        available: Vec<String>,
        suggestions: Vec<String>,
    },

    /// The verb is known, but its ending has no regular suffix rules here.
    #[error("verb '{verb}' has unsupported ending '-{ending}', supported: {}", supported.join(", "))]
    UnsupportedEnding {
        verb: String,
        ending: String,
        supported: Vec<String>,
    },
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean '{}'?)", suggestions.join("' or '"))
    }
}

/// Returns up to three names from `available` within a small edit distance
/// of `key`, closest first.
///
/// Keys of three characters or fewer allow distance 1; longer keys allow 2.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

/// Converts a byte offset into 1-based line and column numbers.
pub(crate) fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before.chars().count(), |newline| {
            before[newline + 1..].chars().count()
        })
        + 1;
    (line, column)
}
