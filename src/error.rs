use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the dataset.
///
/// Every variant is fatal: the dashboard never starts on a partial load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported file extension '.{extension}', expected .csv or .tsv")]
    UnsupportedFormat { extension: String },

    #[error("missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("line {line}: invalid {column} value '{value}': {reason}")]
    Malformed {
        line: u64,
        column: &'static str,
        value: String,
        reason: String,
    },
}

impl LoadError {
    pub(crate) fn malformed(
        line: u64,
        column: &'static str,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        LoadError::Malformed {
            line,
            column,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
