/// Compares a submitted answer with the expected form, ignoring case and
/// surrounding whitespace.
///
/// Case folding is Unicode-aware, so `"HABLARÉ"` matches `"hablaré"`.
/// Accents are significant: `"hablare"` does not match.
pub fn answers_match(submitted: &str, expected: &str) -> bool {
    submitted.trim().to_lowercase() == expected.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_and_whitespace() {
        assert!(answers_match("  Voy\n", "voy"));
        assert!(answers_match("HABLARÉ", "hablaré"));
        assert!(answers_match("Él", "él"));
    }

    #[test]
    fn accents_are_significant() {
        assert!(!answers_match("hablare", "hablaré"));
        assert!(!answers_match("", "voy"));
    }
}
