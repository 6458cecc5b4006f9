use crate::types::{Person, Tense};

/// Context word that cues the tense in a prompt.
pub fn tense_marker(tense: Tense) -> &'static str {
    match tense {
        Tense::Present => "ahora",
        Tense::Preterite => "ayer",
        Tense::Imperfect => "cuando",
        Tense::Future => "mañana",
        Tense::Conditional => "si...",
        Tense::Subjunctive => "espero que",
    }
}

/// Whether the tense marker is placed after the blank instead of before.
///
/// Only the conditional reads naturally this way ("yo (tener) [...] si...").
pub fn marker_follows_blank(tense: Tense) -> bool {
    tense == Tense::Conditional
}

/// Formats the fill-in-the-blank prompt, e.g. `"ahora yo (tener) [...]"`.
pub fn format_question_text(person: Person, verb: &str, tense: Tense) -> String {
    let marker = tense_marker(tense);
    let person = person.label().to_lowercase();
    if marker_follows_blank(tense) {
        format!("{person} ({verb}) [...] {marker}")
    } else {
        format!("{marker} {person} ({verb}) [...]")
    }
}

/// Formats the one-line instruction shown with a prompt.
pub fn format_context(person: Person, verb: &str, tense: Tense) -> String {
    format!(
        "Conjugate '{verb}' in the {} tense for '{}'",
        tense.name(),
        person.label()
    )
}
