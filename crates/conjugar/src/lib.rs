//! Spanish verb conjugation for fill-in-the-blank quizzes.
//!
//! Answers are resolved lookup-first: an irregular override stored for the
//! exact (verb, tense, person) cell wins, otherwise the form is derived from
//! the verb's `-ar`/`-er`/`-ir` class as base + suffix.
//!
//! ```
//! use conjugar::{Person, Tense};
//!
//! let es = conjugar::spanish();
//! assert_eq!(es.resolve("tener", Tense::Future, Person::FirstPlural).unwrap(), "tendremos");
//! ```

pub mod error;
pub mod quiz;
pub mod resolver;
pub mod table;
pub mod types;

pub use error::{LoadError, LoadWarning, ResolveError, compute_suggestions};
pub use quiz::{Question, answers_match, format_context, format_question_text};
pub use resolver::{
    CategoryMode, Conjugation, Conjugator, FormSource, ResolverConfig, spanish,
};
pub use table::{BUILTIN_SPANISH_TOML, ConjugationTable, builtin_spanish};
pub use types::{EndingClass, Person, Tense, Verb, VerbCategory};
