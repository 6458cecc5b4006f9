use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use super::infinitive_ending;

/// Conjugation class of a verb, named by its infinitive ending.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EndingClass {
    Ar,
    Er,
    Ir,
}

impl EndingClass {
    pub fn all() -> impl Iterator<Item = EndingClass> {
        EndingClass::iter()
    }

    /// The two-letter ending, without a leading hyphen.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Classifies an infinitive by its final two characters.
    ///
    /// Returns `None` when the ending is not one of `-ar`, `-er`, `-ir`.
    pub fn of(infinitive: &str) -> Option<EndingClass> {
        Self::from_ending(infinitive_ending(infinitive))
    }

    /// Parses a bare ending such as `"er"` or `"-er"`.
    pub fn from_ending(ending: &str) -> Option<EndingClass> {
        let ending = ending.strip_prefix('-').unwrap_or(ending);
        EndingClass::all().find(|class| class.as_str() == ending)
    }
}

impl Display for EndingClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "-{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_final_two_characters() {
        assert_eq!(EndingClass::of("hablar"), Some(EndingClass::Ar));
        assert_eq!(EndingClass::of("deber"), Some(EndingClass::Er));
        assert_eq!(EndingClass::of("ir"), Some(EndingClass::Ir));
        assert_eq!(EndingClass::of("reír"), None);
        assert_eq!(EndingClass::of("x"), None);
    }

    #[test]
    fn displays_with_hyphen() {
        assert_eq!(EndingClass::Er.to_string(), "-er");
        assert_eq!(EndingClass::from_ending("-ir"), Some(EndingClass::Ir));
    }
}
