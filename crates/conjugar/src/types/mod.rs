mod ending;
mod person;
mod tense;
mod verb;

pub use ending::EndingClass;
pub use person::Person;
pub use tense::Tense;
pub use verb::{Verb, VerbCategory, infinitive_ending, stem};

/// Folds a user-supplied grammar name into the form used by alias tables.
///
/// Lowercases, trims, and treats spaces and hyphens as underscores, so
/// `"First Singular"`, `"first-singular"` and `"first_singular"` all compare
/// equal.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}
