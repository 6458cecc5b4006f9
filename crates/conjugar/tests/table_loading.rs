//! Integration tests for loading and validating conjugation tables.

use std::fmt::Write as _;
use std::io::Write;

use conjugar::{
    BUILTIN_SPANISH_TOML, ConjugationTable, EndingClass, LoadError, LoadWarning, Person, Tense,
    VerbCategory, builtin_spanish,
};
use tempfile::NamedTempFile;

/// A complete suffix set for `class` where every cell holds `suffix`.
fn uniform_suffixes(class: &str, suffix: &str) -> String {
    let mut out = String::new();
    for tense in Tense::all() {
        writeln!(out, "[suffixes.{class}.{tense}]").unwrap();
        for person in Person::all() {
            writeln!(out, "{person} = \"{suffix}\"").unwrap();
        }
    }
    out
}

fn table_with(verbs: &str, rest: &str) -> String {
    format!("[verbs]\n{verbs}\n{}\n{rest}", uniform_suffixes("er", "o"))
}

// =========================================================================
// Built-in Table
// =========================================================================

#[test]
fn builtin_table_has_ten_verbs_in_two_lists() {
    let table = builtin_spanish();
    assert_eq!(table.verbs().len(), 10);
    let regular: Vec<&str> = table
        .verbs_in(VerbCategory::Regular)
        .map(|v| v.infinitive())
        .collect();
    assert_eq!(regular, vec!["hablar", "trabajar", "deber", "comer", "vivir"]);
    let irregular: Vec<&str> = table
        .verbs_in(VerbCategory::Irregular)
        .map(|v| v.infinitive())
        .collect();
    assert_eq!(irregular, vec!["ser", "estar", "ir", "tener", "hacer"]);
}

#[test]
fn builtin_table_declares_all_three_classes() {
    let classes: Vec<EndingClass> = builtin_spanish().ending_classes().collect();
    assert_eq!(classes, vec![EndingClass::Ar, EndingClass::Er, EndingClass::Ir]);
}

#[test]
fn builtin_table_passes_lint() {
    assert_eq!(builtin_spanish().validate(), Vec::new());
}

#[test]
fn overrides_are_sparse() {
    let table = builtin_spanish();
    assert_eq!(table.override_form("tener", Tense::Present, Person::FirstPlural), None);
    assert_eq!(
        table.override_form("tener", Tense::Present, Person::FirstSingular),
        Some("tengo")
    );
    assert_eq!(table.override_count("comer"), 0);
    assert_eq!(table.override_count("hacer"), 25);
}

// =========================================================================
// Structural Errors
// =========================================================================

#[test]
fn verb_in_both_lists_is_rejected() {
    let err = ConjugationTable::from_toml_str(&table_with(
        "regular = [\"comer\"]\nirregular = [\"comer\"]",
        "",
    ))
    .unwrap_err();
    assert!(matches!(err, LoadError::OverlappingVerb { ref verb } if verb == "comer"));
    assert_eq!(
        err.to_string(),
        "verb 'comer' is listed as both regular and irregular"
    );
}

#[test]
fn duplicate_verb_is_rejected() {
    let err = ConjugationTable::from_toml_str(&table_with(
        "regular = [\"comer\", \"beber\", \"comer\"]",
        "",
    ))
    .unwrap_err();
    assert!(matches!(err, LoadError::DuplicateVerb { ref verb } if verb == "comer"));
}

#[test]
fn incomplete_suffix_set_is_rejected() {
    let err = ConjugationTable::from_toml_str(
        r#"
        [verbs]
        regular = ["comer"]

        [suffixes.er.present]
        first_singular = "o"
        "#,
    )
    .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"suffix table for -er is missing present second_singular");
}

#[test]
fn override_for_unknown_verb_is_rejected() {
    let err = ConjugationTable::from_toml_str(&table_with(
        "regular = [\"comer\"]",
        "[overrides.ir.present]\nfirst_singular = \"voy\"\n",
    ))
    .unwrap_err();
    assert!(matches!(err, LoadError::UnknownOverrideVerb { ref verb } if verb == "ir"));
}

#[test]
fn empty_override_is_rejected() {
    let err = ConjugationTable::from_toml_str(&table_with(
        "irregular = [\"tener\"]",
        "[overrides.tener.present]\nfirst_singular = \"  \"\n",
    ))
    .unwrap_err();
    assert!(matches!(
        err,
        LoadError::EmptyForm {
            tense: Tense::Present,
            person: Person::FirstSingular,
            ..
        }
    ));
}

// =========================================================================
// Parse Errors
// =========================================================================

#[test]
fn unknown_tense_key_is_a_parse_error() {
    let err = ConjugationTable::from_toml_str(
        r#"
        [verbs]
        regular = ["comer"]

        [suffixes.er.pluperfect]
        first_singular = "o"
        "#,
    )
    .unwrap_err();
    let LoadError::Parse { path, message, .. } = &err else {
        panic!("expected Parse, got {err:?}");
    };
    assert_eq!(path.to_str(), Some("<string>"));
    assert!(message.contains("pluperfect"), "{message}");
}

#[test]
fn missing_verbs_section_is_a_parse_error() {
    let err = ConjugationTable::from_toml_str("[suffixes]\n").unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains("verbs"));
}

#[test]
fn syntax_error_reports_location() {
    let err = ConjugationTable::from_toml_str("[verbs]\nregular = [\"comer\"\n").unwrap_err();
    let LoadError::Parse {
        line, column, span, ..
    } = &err
    else {
        panic!("expected Parse, got {err:?}");
    };
    assert!(*line >= 2, "line {line}");
    assert!(*column >= 1);
    assert!(span.is_some());
    assert!(err.to_string().starts_with("<string>:"));
}

// =========================================================================
// File Loading
// =========================================================================

#[test]
fn loads_table_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(BUILTIN_SPANISH_TOML.as_bytes()).unwrap();
    let table = ConjugationTable::from_path(file.path()).unwrap();
    assert!(table.contains_verb("vivir"));
    assert_eq!(table.suffix(EndingClass::Ir, Tense::Present, Person::FirstPlural), Some("imos"));
}

#[test]
fn missing_file_is_io_error_naming_path() {
    let err = ConjugationTable::from_path("/nonexistent/conjugations.toml").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/conjugations.toml"));
}

#[test]
fn parse_error_from_file_names_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[verbs]\nregular = 3\n").unwrap();
    let err = ConjugationTable::from_path(file.path()).unwrap_err();
    let LoadError::Parse { path, .. } = &err else {
        panic!("expected Parse, got {err:?}");
    };
    assert_eq!(path, file.path());
}

// =========================================================================
// Lint
// =========================================================================

#[test]
fn lint_flags_redundant_override() {
    let table = ConjugationTable::from_toml_str(&table_with(
        "irregular = [\"comer\"]",
        "[overrides.comer.present]\nfirst_singular = \"como\"\nsecond_singular = \"comes\"\n",
    ))
    .unwrap();
    assert_eq!(
        table.validate(),
        vec![LoadWarning::RedundantOverride {
            verb: "comer".to_string(),
            tense: Tense::Present,
            person: Person::FirstSingular,
            form: "como".to_string(),
        }]
    );
}

#[test]
fn lint_flags_category_mismatches() {
    let table = ConjugationTable::from_toml_str(&table_with(
        "regular = [\"beber\"]\nirregular = [\"caber\"]",
        "[overrides.beber.present]\nfirst_singular = \"bebí\"\n",
    ))
    .unwrap();
    assert_eq!(
        table.validate(),
        vec![
            LoadWarning::RegularWithOverrides {
                verb: "beber".to_string(),
                cells: 1,
            },
            LoadWarning::IrregularWithoutOverrides {
                verb: "caber".to_string(),
            },
        ]
    );
}

#[test]
fn lint_flags_verbs_without_suffix_table() {
    let table = ConjugationTable::from_toml_str(&table_with("regular = [\"hablar\"]", "")).unwrap();
    let warnings = table.validate();
    assert_eq!(warnings.len(), 1);
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"verb 'hablar' ends in '-ar', which has no suffix table"
    );
}
