use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use super::EndingClass;

/// Which of the two disjoint verb lists a verb was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbCategory {
    Regular,
    Irregular,
}

impl VerbCategory {
    pub fn name(self) -> &'static str {
        match self {
            VerbCategory::Regular => "regular",
            VerbCategory::Irregular => "irregular",
        }
    }
}

impl Display for VerbCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// A known verb: its infinitive and declared category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Verb {
    infinitive: String,
    category: VerbCategory,
}

impl Verb {
    pub fn new(infinitive: impl Into<String>, category: VerbCategory) -> Self {
        Self {
            infinitive: infinitive.into(),
            category,
        }
    }

    pub fn infinitive(&self) -> &str {
        &self.infinitive
    }

    pub fn category(&self) -> VerbCategory {
        self.category
    }

    pub fn is_irregular(&self) -> bool {
        self.category == VerbCategory::Irregular
    }

    /// The final two characters of the infinitive.
    pub fn ending(&self) -> &str {
        infinitive_ending(&self.infinitive)
    }

    pub fn ending_class(&self) -> Option<EndingClass> {
        EndingClass::of(&self.infinitive)
    }

    /// The infinitive with its two-character ending removed.
    pub fn stem(&self) -> &str {
        stem(&self.infinitive)
    }
}

impl Display for Verb {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.infinitive)
    }
}

/// Byte offset where the last two characters of `infinitive` begin.
fn ending_start(infinitive: &str) -> usize {
    infinitive
        .char_indices()
        .rev()
        .nth(1)
        .map_or(0, |(index, _)| index)
}

/// Returns the final two characters of an infinitive (e.g. `"er"` for
/// `"deber"`). Strings shorter than two characters are returned whole.
pub fn infinitive_ending(infinitive: &str) -> &str {
    &infinitive[ending_start(infinitive)..]
}

/// Returns the infinitive minus its final two characters (e.g. `"deb"` for
/// `"deber"`, `""` for `"ir"`).
pub fn stem(infinitive: &str) -> &str {
    &infinitive[..ending_start(infinitive)]
}
