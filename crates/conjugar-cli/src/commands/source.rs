//! Table selection and resolver configuration shared by every command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use conjugar::{
    builtin_spanish, CategoryMode, ConjugationTable, Conjugator, EndingClass, LoadError,
    ResolverConfig,
};
use miette::{miette, IntoDiagnostic, Result};
use tracing::debug;

use crate::output::TableDiagnostic;

/// Where the conjugation table comes from and how the resolver is configured.
#[derive(Debug, Clone, clap::Args)]
pub struct TableSource {
    /// Conjugation table (.toml). Defaults to the built-in Spanish table.
    #[arg(long, env = "CONJUGAR_TABLE", global = true)]
    pub table: Option<PathBuf>,

    /// Restrict regular derivation to these endings (comma-separated: ar,er,ir)
    #[arg(long, value_delimiter = ',', value_parser = parse_ending, global = true)]
    pub endings: Vec<EndingClass>,

    /// Expose regular and irregular verbs as separate quiz groups
    #[arg(long, global = true)]
    pub split_categories: bool,
}

fn parse_ending(s: &str) -> Result<EndingClass, String> {
    EndingClass::from_ending(s.trim())
        .ok_or_else(|| format!("invalid ending '{}': expected ar, er or ir", s))
}

impl TableSource {
    /// Loads the selected table, rendering parse errors against the file.
    pub fn load_table(&self) -> Result<ConjugationTable> {
        let Some(path) = &self.table else {
            debug!("using built-in Spanish table");
            return Ok(builtin_spanish().clone());
        };
        debug!(path = %path.display(), "loading conjugation table");
        let content = read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read table file {}: {}", path.display(), e))?;
        ConjugationTable::from_toml_str(&content).map_err(|e| load_failure(path, &content, e))
    }

    pub fn config(&self) -> ResolverConfig {
        let categories = if self.split_categories {
            CategoryMode::Split
        } else {
            CategoryMode::Combined
        };
        let endings = (!self.endings.is_empty()).then(|| self.endings.clone());
        ResolverConfig::builder()
            .maybe_endings(endings)
            .categories(categories)
            .build()
    }

    pub fn conjugator(&self) -> Result<Conjugator> {
        let config = self.config();
        debug!(?config, "resolver configuration");
        Ok(Conjugator::builder()
            .table(self.load_table()?)
            .config(config)
            .build())
    }

    /// Human-readable name of the selected table.
    pub fn describe(&self) -> String {
        self.table
            .as_deref()
            .map_or_else(|| "built-in Spanish table".to_string(), |p| p.display().to_string())
    }
}

fn load_failure(path: &Path, content: &str, error: LoadError) -> miette::Report {
    match error {
        LoadError::Parse {
            line,
            column,
            message,
            span,
            ..
        } => TableDiagnostic::new(path, content, line, column, span, message).into(),
        other => miette!("Invalid table {}: {}", path.display(), other),
    }
}
