//! Verb groups offered per tense, shaped by the configured category mode.

use serde::Serialize;
use tracing::debug;

use crate::resolver::{CategoryMode, Conjugator};
use crate::types::{Tense, Verb, VerbCategory};

pub const ALL_VERBS_GROUP: &str = "all verbs";
pub const REGULAR_VERBS_GROUP: &str = "regular verbs";
pub const IRREGULAR_VERBS_GROUP: &str = "irregular verbs";

/// A titled set of verbs the quiz host may sample from.
#[derive(Debug, Clone, Serialize)]
pub struct QuizGroup<'a> {
    pub title: &'static str,
    pub verbs: Vec<&'a Verb>,
}

/// All groups for one tense.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSection<'a> {
    pub tense: Tense,
    /// Path segment the host mounts this quiz under.
    pub subpath: &'static str,
    pub title: &'static str,
    pub groups: Vec<QuizGroup<'a>>,
}

/// Groups the verbs that resolve in every person for `tense`.
///
/// Verbs that would fail (for example an `-ar` verb under a configuration
/// limited to `-er`) are left out. Empty groups are dropped.
pub fn quiz_groups(conjugator: &Conjugator, tense: Tense) -> Vec<QuizGroup<'_>> {
    let usable: Vec<&Verb> = conjugator
        .verbs()
        .iter()
        .filter(|verb| match conjugator.full_table(verb.infinitive(), tense) {
            Ok(_) => true,
            Err(e) => {
                debug!(verb = verb.infinitive(), %tense, error = %e, "verb left out of quiz");
                false
            }
        })
        .collect();

    let groups = match conjugator.config().categories() {
        CategoryMode::Combined => vec![QuizGroup {
            title: ALL_VERBS_GROUP,
            verbs: usable,
        }],
        CategoryMode::Split => {
            let (irregular, regular): (Vec<&Verb>, Vec<&Verb>) =
                usable.into_iter().partition(|verb| verb.is_irregular());
            vec![
                QuizGroup {
                    title: REGULAR_VERBS_GROUP,
                    verbs: regular,
                },
                QuizGroup {
                    title: IRREGULAR_VERBS_GROUP,
                    verbs: irregular,
                },
            ]
        }
    };
    groups.into_iter().filter(|g| !g.verbs.is_empty()).collect()
}

/// One section per tense, in tense order.
pub fn quiz_sections(conjugator: &Conjugator) -> Vec<QuizSection<'_>> {
    Tense::all()
        .map(|tense| QuizSection {
            tense,
            subpath: tense.name(),
            title: tense.title(),
            groups: quiz_groups(conjugator, tense),
        })
        .collect()
}

impl QuizGroup<'_> {
    /// Category shared by every verb in the group, if there is one.
    pub fn category(&self) -> Option<VerbCategory> {
        match self.title {
            REGULAR_VERBS_GROUP => Some(VerbCategory::Regular),
            IRREGULAR_VERBS_GROUP => Some(VerbCategory::Irregular),
            _ => None,
        }
    }
}
