//! The Spanish table shipped with the crate.

use std::sync::LazyLock;

use super::ConjugationTable;

/// Source of the built-in Spanish table: five regular and five irregular
/// verbs across the `-ar`, `-er` and `-ir` classes.
pub const BUILTIN_SPANISH_TOML: &str = include_str!("../../data/spanish.toml");

static BUILTIN_SPANISH: LazyLock<ConjugationTable> = LazyLock::new(|| {
    ConjugationTable::from_toml_str(BUILTIN_SPANISH_TOML)
        .expect("built-in Spanish table is valid")
});

/// The built-in Spanish table, parsed on first use and shared afterwards.
pub fn builtin_spanish() -> &'static ConjugationTable {
    &BUILTIN_SPANISH
}
