//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use conjugar::quiz::QuizSection;
use conjugar::{FormSource, Person};
use serde::Serialize;

/// One resolved person of a conjugation table.
#[derive(Debug, Serialize)]
pub struct ConjugationRow {
    pub person: Person,
    pub form: String,
    pub source: FormSource,
}

/// Format a person table as an ASCII table.
pub fn format_conjugation_table(rows: &[ConjugationRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Person", "Form", "Source"]);

    for row in rows {
        let source = match row.source {
            FormSource::Override => "irregular",
            FormSource::Regular => "regular",
        };
        table.add_row(vec![
            row.person.label().to_string(),
            row.form.clone(),
            source.to_string(),
        ]);
    }

    table
}

/// Format quiz sections as an ASCII table, one row per group.
pub fn format_sections_table(sections: &[QuizSection<'_>]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tense", "Group", "Verbs"]);

    for section in sections {
        if section.groups.is_empty() {
            table.add_row(vec![
                section.title.to_string(),
                "-".to_string(),
                "(none)".to_string(),
            ]);
        }
        for group in &section.groups {
            let verbs: Vec<&str> = group.verbs.iter().map(|v| v.infinitive()).collect();
            table.add_row(vec![
                section.title.to_string(),
                group.title.to_string(),
                verbs.join(", "),
            ]);
        }
    }

    table
}
