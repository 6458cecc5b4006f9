//! Serde shapes for the TOML table format and their validation.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Deserialize;

use super::{Cells, ConjugationTable};
use crate::error::LoadError;
use crate::types::{EndingClass, Person, Tense, Verb, VerbCategory};

type RawCells = BTreeMap<Tense, BTreeMap<Person, String>>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawTable {
    verbs: RawVerbs,
    #[serde(default)]
    suffixes: BTreeMap<EndingClass, RawCells>,
    #[serde(default)]
    overrides: BTreeMap<String, RawCells>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVerbs {
    #[serde(default)]
    regular: Vec<String>,
    #[serde(default)]
    irregular: Vec<String>,
}

fn flatten(raw: RawCells) -> Cells {
    raw.into_iter()
        .flat_map(|(tense, persons)| {
            persons
                .into_iter()
                .map(move |(person, form)| ((tense, person), form))
        })
        .collect()
}

impl RawTable {
    pub(super) fn into_table(self) -> Result<ConjugationTable, LoadError> {
        let RawTable {
            verbs,
            suffixes,
            overrides,
        } = self;

        let (verbs, index) = collect_verbs(verbs)?;

        let mut suffix_sets = BTreeMap::new();
        for (class, raw) in suffixes {
            let cells = flatten(raw);
            for tense in Tense::all() {
                for person in Person::all() {
                    if !cells.contains_key(&(tense, person)) {
                        return Err(LoadError::MissingSuffix {
                            ending: class,
                            tense,
                            person,
                        });
                    }
                }
            }
            suffix_sets.insert(class, cells);
        }

        let mut override_sets = HashMap::new();
        for (verb, raw) in overrides {
            if !index.contains_key(&verb) {
                return Err(LoadError::UnknownOverrideVerb { verb });
            }
            let cells = flatten(raw);
            if let Some(&(tense, person)) = cells
                .iter()
                .find(|(_, form)| form.trim().is_empty())
                .map(|(key, _)| key)
            {
                return Err(LoadError::EmptyForm {
                    verb,
                    tense,
                    person,
                });
            }
            if !cells.is_empty() {
                override_sets.insert(verb, cells);
            }
        }

        Ok(ConjugationTable {
            verbs,
            index,
            suffixes: suffix_sets,
            overrides: override_sets,
        })
    }
}

/// Builds the verb list and index, rejecting duplicates and verbs that sit in
/// both lists.
fn collect_verbs(raw: RawVerbs) -> Result<(Vec<Verb>, HashMap<String, usize>), LoadError> {
    let irregular: HashSet<&str> = raw.irregular.iter().map(String::as_str).collect();
    if let Some(verb) = raw.regular.iter().find(|v| irregular.contains(v.as_str())) {
        return Err(LoadError::OverlappingVerb { verb: verb.clone() });
    }

    let mut verbs = Vec::with_capacity(raw.regular.len() + raw.irregular.len());
    let mut index = HashMap::new();
    let lists = [
        (VerbCategory::Regular, raw.regular),
        (VerbCategory::Irregular, raw.irregular),
    ];
    for (category, list) in lists {
        for infinitive in list {
            if index.contains_key(&infinitive) {
                return Err(LoadError::DuplicateVerb { verb: infinitive });
            }
            index.insert(infinitive.clone(), verbs.len());
            verbs.push(Verb::new(infinitive, category));
        }
    }
    Ok((verbs, index))
}
