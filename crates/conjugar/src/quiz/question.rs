use serde::Serialize;

use super::{answers_match, format_context, format_question_text};
use crate::error::ResolveError;
use crate::resolver::Conjugator;
use crate::types::{Person, Tense};

/// One fill-in-the-blank question with its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub verb: String,
    pub tense: Tense,
    pub person: Person,
    /// Prompt with the blank, e.g. `"ayer yo (ir) [...]"`.
    pub prompt: String,
    /// Instruction line naming verb, tense and person.
    pub context: String,
    pub answer: String,
}

impl Question {
    /// Builds a question, resolving the expected answer up front so that a
    /// bad request fails here rather than at grading time.
    ///
    /// # Example
    ///
    /// ```
    /// use conjugar::{Person, Question, Tense};
    ///
    /// let q = Question::new(conjugar::spanish(), "ir", Tense::Preterite, Person::FirstSingular).unwrap();
    /// assert_eq!(q.prompt, "ayer yo (ir) [...]");
    /// assert!(q.check(" Fui "));
    /// ```
    pub fn new(
        conjugator: &Conjugator,
        verb: &str,
        tense: Tense,
        person: Person,
    ) -> Result<Self, ResolveError> {
        let answer = conjugator.resolve(verb, tense, person)?;
        Ok(Self {
            verb: verb.to_string(),
            tense,
            person,
            prompt: format_question_text(person, verb, tense),
            context: format_context(person, verb, tense),
            answer,
        })
    }

    /// Grades a submitted answer.
    pub fn check(&self, submitted: &str) -> bool {
        answers_match(submitted, &self.answer)
    }
}
