//! The regular-derivation rule: base + suffix.

use crate::types::{Tense, stem};

/// The part of the infinitive a regular suffix attaches to.
///
/// Future and conditional use the whole infinitive; every other tense uses
/// the stem (the infinitive minus its final two characters).
pub fn base(infinitive: &str, tense: Tense) -> &str {
    if tense.uses_full_infinitive() {
        infinitive
    } else {
        stem(infinitive)
    }
}

/// Builds a regular form from an infinitive and the suffix for its cell.
pub fn derive(infinitive: &str, tense: Tense, suffix: &str) -> String {
    let base = base(infinitive, tense);
    let mut form = String::with_capacity(base.len() + suffix.len());
    form.push_str(base);
    form.push_str(suffix);
    form
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn future_and_conditional_keep_infinitive() {
        assert_eq!(base("hablar", Tense::Future), "hablar");
        assert_eq!(base("hablar", Tense::Conditional), "hablar");
        assert_eq!(base("hablar", Tense::Present), "habl");
        assert_eq!(base("ir", Tense::Imperfect), "");
    }

    #[test]
    fn derive_concatenates() {
        assert_eq!(derive("hablar", Tense::Future, "é"), "hablaré");
        assert_eq!(derive("deber", Tense::Present, "o"), "debo");
        assert_eq!(derive("vivir", Tense::Conditional, "íamos"), "viviríamos");
    }
}
