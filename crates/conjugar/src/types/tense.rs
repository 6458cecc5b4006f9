use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use super::normalize_name;
use crate::error::{ResolveError, compute_suggestions};

/// A tense of the fixed conjugation grid.
///
/// Variants are declared in teaching order, which is also their `Ord` order.
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
pub enum Tense {
    Present,
    Preterite,
    Imperfect,
    Future,
    Conditional,
    /// Present subjunctive.
    Subjunctive,
}

impl Tense {
    /// Iterates every tense in declaration order.
    pub fn all() -> impl Iterator<Item = Tense> {
        Tense::iter()
    }

    /// Canonical snake_case name, as used in table files.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Title-cased name for quiz headings (e.g. "Conditional").
    pub fn title(self) -> &'static str {
        match self {
            Tense::Present => "Present",
            Tense::Preterite => "Preterite",
            Tense::Imperfect => "Imperfect",
            Tense::Future => "Future",
            Tense::Conditional => "Conditional",
            Tense::Subjunctive => "Subjunctive",
        }
    }

    /// Whether regular forms attach the suffix to the whole infinitive
    /// rather than to the stem.
    ///
    /// Spanish builds the future and conditional on the infinitive
    /// (`hablar` + `é` = `hablaré`); every other tense uses the stem.
    pub fn uses_full_infinitive(self) -> bool {
        matches!(self, Tense::Future | Tense::Conditional)
    }
}

/// Maps Spanish tense names and common abbreviations onto canonical names.
fn canonicalize_alias(name: &str) -> &str {
    match name {
        "presente" | "pres" => "present",
        "preterito" | "pretérito" | "preterit" | "pret" | "past" | "indefinido" => "preterite",
        "imperfecto" | "imperf" | "impf" => "imperfect",
        "futuro" | "fut" => "future",
        "condicional" | "cond" => "conditional",
        "subjuntivo" | "present_subjunctive" | "presente_de_subjuntivo" | "subj" => "subjunctive",
        other => other,
    }
}

impl FromStr for Tense {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_name(s);
        let canonical = canonicalize_alias(&normalized);
        Tense::all()
            .find(|tense| tense.name() == canonical)
            .ok_or_else(|| {
                let available: Vec<String> = Tense::all().map(|t| t.name().to_string()).collect();
                ResolveError::UnknownTense {
                    tense: s.to_string(),
                    suggestions: compute_suggestions(&normalized, &available),
                    available,
                }
            })
    }
}

impl Display for Tense {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_infinitive_tenses() {
        let full: Vec<Tense> = Tense::all().filter(|t| t.uses_full_infinitive()).collect();
        assert_eq!(full, vec![Tense::Future, Tense::Conditional]);
    }

    #[test]
    fn parses_canonical_and_spanish_names() {
        assert_eq!("preterite".parse::<Tense>().unwrap(), Tense::Preterite);
        assert_eq!("Pretérito".parse::<Tense>().unwrap(), Tense::Preterite);
        assert_eq!(" FUTURO ".parse::<Tense>().unwrap(), Tense::Future);
        assert_eq!(
            "present-subjunctive".parse::<Tense>().unwrap(),
            Tense::Subjunctive
        );
    }

    #[test]
    fn unknown_tense_suggests_close_names() {
        let Err(ResolveError::UnknownTense { suggestions, .. }) = "futur".parse::<Tense>() else {
            panic!("expected UnknownTense");
        };
        assert_eq!(suggestions, vec!["future"]);
    }
}
