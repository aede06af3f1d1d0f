//! Data loading error types.

use std::path::PathBuf;

use deprecia_shared::AppError;
use thiserror::Error;

/// Errors that abort loading a reference file.
#[derive(Debug, Error)]
pub enum DataError {
    /// File could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// CSV structure could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent.
    #[error("Missing column '{column}' (found: {found})")]
    MissingColumn {
        /// Expected (normalized) column name.
        column: &'static str,
        /// Normalized headers actually present.
        found: String,
    },

    /// No usable rows.
    #[error("No usable rows in {0}")]
    Empty(&'static str),
}

/// A row skipped during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number in the file (header is line 1).
    pub line: usize,
    /// What was wrong with it.
    pub message: String,
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        Self::DataSource(err.to_string())
    }
}
