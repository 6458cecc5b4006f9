//! Miette diagnostic wrapper for conjugation table parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::ops::Range;
use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for a table file that failed to parse.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid conjugation table: {message}")]
#[diagnostic(
    code(conjugar::table),
    help("see the built-in table (`conjugar validate`) for the expected layout")
)]
pub struct TableDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl TableDiagnostic {
    /// Create a diagnostic pointing at the parser's span, or at the reported
    /// line and column when no span is available.
    pub fn new(
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        span: Option<Range<usize>>,
        message: String,
    ) -> Self {
        let (offset, len) = match span {
            Some(range) => (range.start, range.len().max(1)),
            None => {
                // Sum of (line_length + 1) for lines before error line, plus column.
                let offset = content
                    .lines()
                    .take(line.saturating_sub(1))
                    .map(|l| l.len() + 1)
                    .sum::<usize>()
                    + column.saturating_sub(1);
                (offset, 1)
            }
        };

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());
        let len = len.min(content.len() - offset);

        TableDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, len).into(),
            message,
        }
    }
}
