use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use super::normalize_name;
use crate::error::{ResolveError, compute_suggestions};

/// A grammatical person of the conjugation grid.
///
/// Declaration order (and therefore `Ord`) follows the traditional
/// yo, tú, él, nosotros, vosotros, ellos listing.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Person {
    /// Iterates every person in grammatical order.
    pub fn all() -> impl Iterator<Item = Person> {
        Person::iter()
    }

    /// Canonical snake_case name, as used in table files.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Spanish subject pronoun(s) for this person, capitalized.
    pub fn label(self) -> &'static str {
        match self {
            Person::FirstSingular => "Yo",
            Person::SecondSingular => "Tú",
            Person::ThirdSingular => "Él/Ella/Usted",
            Person::FirstPlural => "Nosotros",
            Person::SecondPlural => "Vosotros",
            Person::ThirdPlural => "Ellos/Ellas/Ustedes",
        }
    }

    pub fn is_plural(self) -> bool {
        matches!(
            self,
            Person::FirstPlural | Person::SecondPlural | Person::ThirdPlural
        )
    }
}

/// Maps pronouns and short codes onto canonical names.
fn canonicalize_alias(name: &str) -> &str {
    match name {
        "yo" | "1s" | "1sg" => "first_singular",
        "tú" | "tu" | "2s" | "2sg" => "second_singular",
        "él" | "el" | "ella" | "usted" | "él/ella/usted" | "3s" | "3sg" => "third_singular",
        "nosotros" | "nosotras" | "1p" | "1pl" => "first_plural",
        "vosotros" | "vosotras" | "2p" | "2pl" => "second_plural",
        "ellos" | "ellas" | "ustedes" | "ellos/ellas/ustedes" | "3p" | "3pl" => "third_plural",
        other => other,
    }
}

impl FromStr for Person {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_name(s);
        let canonical = canonicalize_alias(&normalized);
        Person::all()
            .find(|person| person.name() == canonical)
            .ok_or_else(|| {
                let available: Vec<String> =
                    Person::all().map(|p| p.name().to_string()).collect();
                ResolveError::UnknownPerson {
                    person: s.to_string(),
                    suggestions: compute_suggestions(&normalized, &available),
                    available,
                }
            })
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}
