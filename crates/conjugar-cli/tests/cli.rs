//! CLI integration tests using assert_cmd.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn conjugar() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("conjugar").unwrap();
    cmd.env_remove("CONJUGAR_TABLE").env_remove("RUST_LOG");
    cmd
}

// =========================================================================
// conjugate
// =========================================================================

#[test]
fn conjugate_prints_override_form() {
    conjugar()
        .args(["conjugate", "ir", "present", "first_singular"])
        .assert()
        .success()
        .stdout("voy\n");
}

#[test]
fn conjugate_accepts_spanish_aliases() {
    conjugar()
        .args(["conjugate", "hablar", "futuro", "yo"])
        .assert()
        .success()
        .stdout("hablaré\n");
}

#[test]
fn conjugate_json_reports_source() {
    conjugar()
        .args(["conjugate", "deber", "present", "yo", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"form\": \"debo\""))
        .stdout(predicate::str::contains("\"source\": \"regular\""));
}

#[test]
fn conjugate_explain_shows_regular_form() {
    conjugar()
        .args(["conjugate", "tener", "future", "nosotros", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tendremos"))
        .stdout(predicate::str::contains("teneremos"));
}

#[test]
fn conjugate_unknown_verb_is_data_error() {
    conjugar()
        .args(["conjugate", "poder", "present", "yo"])
        .assert()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains("unknown verb 'poder'"));
}

#[test]
fn conjugate_unknown_person_is_data_error() {
    conjugar()
        .args(["conjugate", "comer", "present", "they"])
        .assert()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains("unknown person 'they'"));
}

#[test]
fn endings_restriction_rejects_other_classes() {
    conjugar()
        .args(["--endings", "er", "conjugate", "hablar", "present", "yo"])
        .assert()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains("unsupported ending '-ar'"));
}

// =========================================================================
// table
// =========================================================================

#[test]
fn table_lists_all_persons() {
    conjugar()
        .args(["table", "ser", "imperfect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("éramos"))
        .stdout(predicate::str::contains("Ellos/Ellas/Ustedes"));
}

#[test]
fn table_json_has_six_forms() {
    let output = conjugar()
        .args(["table", "vivir", "present", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let forms = json["forms"].as_array().unwrap();
    assert_eq!(forms.len(), 6);
    assert_eq!(forms[3]["form"], "vivimos");
    assert_eq!(forms[3]["person"], "first_plural");
}

// =========================================================================
// question / check
// =========================================================================

#[test]
fn question_prints_context_and_prompt() {
    conjugar()
        .args(["question", "vivir", "conditional", "nosotros"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Conjugate 'vivir' in the conditional tense for 'Nosotros'",
        ))
        .stdout(predicate::str::contains("nosotros (vivir) [...] si..."))
        .stdout(predicate::str::contains("answer").not());
}

#[test]
fn check_accepts_correct_answer() {
    conjugar()
        .args(["--color", "never", "check", "ir", "preterite", "yo", "  FUI "])
        .assert()
        .success()
        .stdout("correct\n");
}

#[test]
fn check_rejects_wrong_answer() {
    conjugar()
        .args(["--color", "never", "check", "hablar", "future", "yo", "hablare"])
        .assert()
        .code(exitcode::DATAERR)
        .stdout(predicate::str::contains("expected 'hablaré'"));
}

// =========================================================================
// verbs / validate
// =========================================================================

#[test]
fn verbs_split_categories() {
    conjugar()
        .args(["--split-categories", "verbs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("regular verbs"))
        .stdout(predicate::str::contains("irregular verbs"));
}

#[test]
fn validate_builtin_table_is_clean() {
    conjugar()
        .args(["--color", "never", "validate", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in Spanish table: 10 verbs"))
        .stdout(predicate::str::contains("no warnings"));
}

#[test]
fn validate_strict_fails_on_warnings() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[verbs]\nregular = [\"hablar\"]\n").unwrap();
    conjugar()
        .arg("--table")
        .arg(file.path())
        .args(["validate", "--strict"])
        .assert()
        .code(exitcode::DATAERR)
        .stdout(predicate::str::contains("has no suffix table"));
}

#[test]
fn table_from_environment() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[verbs]\nirregular = [\"ir\"]\n\n[overrides.ir.present]\nfirst_singular = \"voy\"\n")
        .unwrap();
    conjugar()
        .env("CONJUGAR_TABLE", file.path())
        .args(["conjugate", "ir", "present", "yo"])
        .assert()
        .success()
        .stdout("voy\n");
}

#[test]
fn malformed_table_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[verbs\nregular = []\n").unwrap();
    conjugar()
        .arg("--table")
        .arg(file.path())
        .arg("verbs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid conjugation table"));
}
