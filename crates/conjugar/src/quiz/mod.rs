//! Fill-in-the-blank question building for a quiz host.
//!
//! The host picks a verb and person, shows [`format_question_text`] and
//! [`format_context`], and grades the reply with [`answers_match`] against
//! the resolver's answer. [`Question`] bundles those steps.

mod answer;
mod format;
mod groups;
mod question;

pub use answer::answers_match;
pub use format::{format_context, format_question_text, marker_follows_blank, tense_marker};
pub use groups::{
    ALL_VERBS_GROUP, IRREGULAR_VERBS_GROUP, QuizGroup, QuizSection, REGULAR_VERBS_GROUP,
    quiz_groups, quiz_sections,
};
pub use question::Question;
