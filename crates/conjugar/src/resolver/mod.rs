//! Conjugation resolution: irregular override first, regular rule second.
//!
//! A [`Conjugator`] pairs a [`ConjugationTable`] with a [`ResolverConfig`]
//! describing which ending classes it derives regular forms for and how it
//! exposes verb categories to the quiz layer. Both are immutable, so one
//! conjugator can serve any number of threads.

pub mod regular;

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::LazyLock;

use bon::Builder;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{ResolveError, compute_suggestions};
use crate::table::{ConjugationTable, builtin_spanish};
use crate::types::{EndingClass, Person, Tense, Verb, infinitive_ending};

/// How verb categories are presented to the quiz layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryMode {
    /// One group holding every verb.
    #[default]
    Combined,
    /// Separate regular and irregular groups.
    Split,
}

/// Deployment options for a [`Conjugator`].
///
/// # Example
///
/// ```
/// use conjugar::{CategoryMode, EndingClass, ResolverConfig};
///
/// let config = ResolverConfig::builder()
///     .endings(vec![EndingClass::Er])
///     .categories(CategoryMode::Split)
///     .build();
/// assert!(config.allows(EndingClass::Er));
/// assert!(!config.allows(EndingClass::Ar));
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct ResolverConfig {
    /// Ending classes to derive regular forms for. When unset, every class
    /// the table declares is supported.
    endings: Option<Vec<EndingClass>>,

    #[builder(default)]
    categories: CategoryMode,
}

impl ResolverConfig {
    /// Configuration limited to one ending class with regular and irregular
    /// verbs exposed as separate groups.
    pub fn single_class(class: EndingClass) -> Self {
        ResolverConfig::builder()
            .endings(vec![class])
            .categories(CategoryMode::Split)
            .build()
    }

    pub fn endings(&self) -> Option<&[EndingClass]> {
        self.endings.as_deref()
    }

    pub fn categories(&self) -> CategoryMode {
        self.categories
    }

    /// Whether this configuration permits regular derivation for `class`.
    pub fn allows(&self, class: EndingClass) -> bool {
        self.endings
            .as_ref()
            .is_none_or(|endings| endings.contains(&class))
    }
}

/// Where a resolved form came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSource {
    /// Stored literal from the irregular override table.
    Override,
    /// Derived as base + regular suffix.
    Regular,
}

/// A resolved conjugation together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conjugation {
    pub form: String,
    pub source: FormSource,
}

impl Display for Conjugation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.form)
    }
}

/// Resolves (verb, tense, person) requests against a conjugation table.
///
/// # Example
///
/// ```
/// use conjugar::{Person, Tense};
///
/// let conjugator = conjugar::spanish();
/// assert_eq!(conjugator.resolve("ir", Tense::Present, Person::FirstSingular).unwrap(), "voy");
/// assert_eq!(conjugator.resolve("deber", Tense::Present, Person::FirstSingular).unwrap(), "debo");
/// assert_eq!(conjugator.resolve("hablar", Tense::Future, Person::FirstSingular).unwrap(), "hablaré");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Conjugator {
    table: ConjugationTable,

    #[builder(default)]
    config: ResolverConfig,
}

static SPANISH: LazyLock<Conjugator> = LazyLock::new(|| Conjugator::new(builtin_spanish().clone()));

/// The process-wide conjugator over the built-in Spanish table, with every
/// ending class supported and categories combined.
pub fn spanish() -> &'static Conjugator {
    &SPANISH
}

impl Conjugator {
    /// Create a conjugator with the default configuration.
    pub fn new(table: ConjugationTable) -> Self {
        Conjugator::builder().table(table).build()
    }

    pub fn table(&self) -> &ConjugationTable {
        &self.table
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    // =========================================================================
    // Verb Lookup
    // =========================================================================

    /// Known verbs in declaration order.
    pub fn verbs(&self) -> &[Verb] {
        self.table.verbs()
    }

    /// Looks up a verb, failing with [`ResolveError::UnknownVerb`].
    pub fn verb(&self, infinitive: &str) -> Result<&Verb, ResolveError> {
        self.table.verb(infinitive).ok_or_else(|| {
            let available = self.table.infinitives();
            ResolveError::UnknownVerb {
                verb: infinitive.to_string(),
                suggestions: compute_suggestions(infinitive, &available),
                available,
            }
        })
    }

    pub fn is_irregular(&self, infinitive: &str) -> Result<bool, ResolveError> {
        self.verb(infinitive).map(Verb::is_irregular)
    }

    // =========================================================================
    // Ending Classes
    // =========================================================================

    /// Ending classes this conjugator derives regular forms for.
    pub fn supported_endings(&self) -> Vec<EndingClass> {
        self.table
            .ending_classes()
            .filter(|&class| self.config.allows(class))
            .collect()
    }

    pub fn supports(&self, class: EndingClass) -> bool {
        self.table.has_ending_class(class) && self.config.allows(class)
    }

    /// The verb's ending class, failing with
    /// [`ResolveError::UnsupportedEnding`] when it has no regular rules here.
    pub fn ending_class(&self, infinitive: &str) -> Result<EndingClass, ResolveError> {
        let verb = self.verb(infinitive)?;
        verb.ending_class()
            .filter(|&class| self.supports(class))
            .ok_or_else(|| self.unsupported_ending(infinitive))
    }

    fn unsupported_ending(&self, infinitive: &str) -> ResolveError {
        ResolveError::UnsupportedEnding {
            verb: infinitive.to_string(),
            ending: infinitive_ending(infinitive).to_string(),
            supported: self
                .supported_endings()
                .into_iter()
                .map(|class| class.to_string())
                .collect(),
        }
    }

    /// The base a regular suffix attaches to for this verb and tense.
    pub fn base<'a>(&self, infinitive: &'a str, tense: Tense) -> Result<&'a str, ResolveError> {
        self.verb(infinitive)?;
        Ok(regular::base(infinitive, tense))
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Derives the regular form for a cell, ignoring any override.
    pub fn regular_form(
        &self,
        infinitive: &str,
        tense: Tense,
        person: Person,
    ) -> Result<String, ResolveError> {
        let class = self.ending_class(infinitive)?;
        let suffix = self
            .table
            .suffix(class, tense, person)
            .ok_or_else(|| self.unsupported_ending(infinitive))?;
        let form = regular::derive(infinitive, tense, suffix);
        trace!(verb = infinitive, %tense, %person, %class, %form, "derived regular form");
        Ok(form)
    }

    /// Resolves a cell and reports whether the form was stored or derived.
    ///
    /// An override for the exact (tense, person) cell wins outright; only
    /// when there is none does the verb's ending class matter.
    pub fn resolve_detailed(
        &self,
        infinitive: &str,
        tense: Tense,
        person: Person,
    ) -> Result<Conjugation, ResolveError> {
        self.verb(infinitive)?;

        if let Some(form) = self.table.override_form(infinitive, tense, person) {
            debug!(verb = infinitive, %tense, %person, form, "irregular override");
            return Ok(Conjugation {
                form: form.to_string(),
                source: FormSource::Override,
            });
        }

        Ok(Conjugation {
            form: self.regular_form(infinitive, tense, person)?,
            source: FormSource::Regular,
        })
    }

    /// Resolves the conjugated form of `infinitive` for `tense` and `person`.
    pub fn resolve(
        &self,
        infinitive: &str,
        tense: Tense,
        person: Person,
    ) -> Result<String, ResolveError> {
        self.resolve_detailed(infinitive, tense, person)
            .map(|conjugation| conjugation.form)
    }

    /// Resolves a request given as free-form names.
    ///
    /// Validation runs verb first, then tense, then person, so each kind of
    /// bad input reports its own error.
    ///
    /// # Example
    ///
    /// ```
    /// use conjugar::ResolveError;
    ///
    /// let conjugator = conjugar::spanish();
    /// assert_eq!(conjugator.resolve_str("tener", "future", "nosotros").unwrap(), "tendremos");
    /// assert!(matches!(
    ///     conjugator.resolve_str("tener", "pluperfect", "yo"),
    ///     Err(ResolveError::UnknownTense { .. })
    /// ));
    /// ```
    pub fn resolve_str(
        &self,
        infinitive: &str,
        tense: &str,
        person: &str,
    ) -> Result<String, ResolveError> {
        self.verb(infinitive)?;
        let tense: Tense = tense.parse()?;
        let person: Person = person.parse()?;
        self.resolve(infinitive, tense, person)
    }

    /// Resolves every person for one verb and tense, in grammatical order.
    pub fn full_table(
        &self,
        infinitive: &str,
        tense: Tense,
    ) -> Result<BTreeMap<Person, String>, ResolveError> {
        Person::all()
            .map(|person| Ok((person, self.resolve(infinitive, tense, person)?)))
            .collect()
    }
}
