//! Lint rules for loaded conjugation tables.
//!
//! These findings never stop a table from loading. They point at data that
//! is legal but probably not what the author meant.

use tracing::warn;

use super::ConjugationTable;
use crate::error::LoadWarning;
use crate::resolver::regular;
use crate::types::{EndingClass, VerbCategory, infinitive_ending};

/// Checks every verb in declaration order and returns the findings.
pub(super) fn lint_table(table: &ConjugationTable) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();
    for verb in table.verbs() {
        let infinitive = verb.infinitive();
        let class = EndingClass::of(infinitive).filter(|&c| table.has_ending_class(c));

        if class.is_none() {
            warnings.push(LoadWarning::UnsupportedVerbEnding {
                verb: infinitive.to_string(),
                ending: infinitive_ending(infinitive).to_string(),
            });
        }

        let cells = table.override_count(infinitive);
        match verb.category() {
            VerbCategory::Irregular if cells == 0 => {
                warnings.push(LoadWarning::IrregularWithoutOverrides {
                    verb: infinitive.to_string(),
                });
            }
            VerbCategory::Regular if cells > 0 => {
                warnings.push(LoadWarning::RegularWithOverrides {
                    verb: infinitive.to_string(),
                    cells,
                });
            }
            VerbCategory::Regular | VerbCategory::Irregular => {}
        }

        let Some(class) = class else {
            continue;
        };
        for (tense, person, form) in table.overrides_for(infinitive) {
            let Some(suffix) = table.suffix(class, tense, person) else {
                continue;
            };
            if regular::derive(infinitive, tense, suffix) == form {
                warnings.push(LoadWarning::RedundantOverride {
                    verb: infinitive.to_string(),
                    tense,
                    person,
                    form: form.to_string(),
                });
            }
        }
    }

    for warning in &warnings {
        warn!(%warning, "conjugation table lint");
    }
    warnings
}
