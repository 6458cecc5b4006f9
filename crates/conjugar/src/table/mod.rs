//! Static conjugation data: verb lists, regular suffixes, irregular overrides.
//!
//! A [`ConjugationTable`] is loaded once from TOML and never mutated
//! afterwards. Loading validates the structural invariants (disjoint verb
//! lists, complete suffix sets, overrides only for known verbs); softer
//! problems are reported by [`ConjugationTable::validate`].

mod builtin;
mod lint;
mod raw;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{LoadError, LoadWarning, line_column};
use crate::types::{EndingClass, Person, Tense, Verb, VerbCategory};

pub use builtin::{BUILTIN_SPANISH_TOML, builtin_spanish};

/// Cells of a conjugation grid keyed by (tense, person).
pub type Cells = BTreeMap<(Tense, Person), String>;

/// Immutable conjugation data for one language configuration.
#[derive(Debug, Clone, Default)]
pub struct ConjugationTable {
    /// Verbs in declaration order: regular list first, then irregular.
    verbs: Vec<Verb>,
    /// Infinitive to position in `verbs`.
    index: HashMap<String, usize>,
    /// Regular suffixes per declared ending class. Every (tense, person)
    /// cell is present for each class.
    suffixes: BTreeMap<EndingClass, Cells>,
    /// Sparse irregular overrides per infinitive. A missing verb or cell
    /// means the regular rule applies.
    overrides: HashMap<String, Cells>,
}

impl ConjugationTable {
    /// Parses and validates a table from TOML text.
    ///
    /// # Example
    ///
    /// ```
    /// use conjugar::ConjugationTable;
    ///
    /// let table = ConjugationTable::from_toml_str(conjugar::BUILTIN_SPANISH_TOML).unwrap();
    /// assert!(table.contains_verb("tener"));
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        Self::load_internal(content, None)
    }

    /// Reads, parses, and validates a table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::load_internal(&content, Some(path))
    }

    fn load_internal(content: &str, path: Option<&Path>) -> Result<Self, LoadError> {
        let raw: raw::RawTable = toml::from_str(content).map_err(|e| {
            let span = e.span();
            let (line, column) = span
                .as_ref()
                .map_or((0, 0), |span| line_column(content, span.start));
            LoadError::Parse {
                path: path.map_or_else(|| PathBuf::from("<string>"), Path::to_path_buf),
                line,
                column,
                message: e.message().to_string(),
                span,
            }
        })?;
        let table = raw.into_table()?;
        info!(
            verbs = table.verbs.len(),
            endings = table.suffixes.len(),
            overridden_verbs = table.overrides.len(),
            "loaded conjugation table"
        );
        Ok(table)
    }

    // =========================================================================
    // Verbs
    // =========================================================================

    /// All known verbs, regular verbs first, each list in declared order.
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn verb(&self, infinitive: &str) -> Option<&Verb> {
        self.index.get(infinitive).map(|&i| &self.verbs[i])
    }

    pub fn contains_verb(&self, infinitive: &str) -> bool {
        self.index.contains_key(infinitive)
    }

    /// Verbs of one category, in declared order.
    pub fn verbs_in(&self, category: VerbCategory) -> impl Iterator<Item = &Verb> {
        self.verbs.iter().filter(move |v| v.category() == category)
    }

    /// Infinitives of all known verbs, for error messages.
    pub fn infinitives(&self) -> Vec<String> {
        self.verbs.iter().map(|v| v.infinitive().to_string()).collect()
    }

    // =========================================================================
    // Suffixes
    // =========================================================================

    /// Ending classes that have a suffix set, in `-ar`, `-er`, `-ir` order.
    pub fn ending_classes(&self) -> impl Iterator<Item = EndingClass> + '_ {
        self.suffixes.keys().copied()
    }

    pub fn has_ending_class(&self, class: EndingClass) -> bool {
        self.suffixes.contains_key(&class)
    }

    /// The regular suffix for a cell, or `None` if the class is not declared.
    pub fn suffix(&self, class: EndingClass, tense: Tense, person: Person) -> Option<&str> {
        self.suffixes
            .get(&class)
            .and_then(|cells| cells.get(&(tense, person)))
            .map(String::as_str)
    }

    // =========================================================================
    // Overrides
    // =========================================================================

    /// The stored irregular form for exactly this cell, if one exists.
    pub fn override_form(&self, infinitive: &str, tense: Tense, person: Person) -> Option<&str> {
        self.overrides
            .get(infinitive)
            .and_then(|cells| cells.get(&(tense, person)))
            .map(String::as_str)
    }

    /// Every override cell for a verb, ordered by tense then person.
    pub fn overrides_for(&self, infinitive: &str) -> impl Iterator<Item = (Tense, Person, &str)> {
        self.overrides
            .get(infinitive)
            .into_iter()
            .flat_map(BTreeMap::iter)
            .map(|(&(tense, person), form)| (tense, person, form.as_str()))
    }

    pub fn override_count(&self, infinitive: &str) -> usize {
        self.overrides.get(infinitive).map_or(0, BTreeMap::len)
    }

    /// Runs the table lint rules and returns any findings.
    ///
    /// # Example
    ///
    /// ```
    /// use conjugar::{ConjugationTable, LoadWarning};
    ///
    /// let table = ConjugationTable::from_toml_str(r#"
    ///     [verbs]
    ///     regular = ["reír"]
    /// "#).unwrap();
    ///
    /// let warnings = table.validate();
    /// assert!(matches!(warnings[0], LoadWarning::UnsupportedVerbEnding { .. }));
    /// ```
    pub fn validate(&self) -> Vec<LoadWarning> {
        lint::lint_table(self)
    }
}
