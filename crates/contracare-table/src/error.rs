use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read reference table at {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("reference table is missing required column '{0}'")]
    MissingColumn(String),

    #[error("line {line}: {column} score is not a number: '{value}'")]
    MalformedScore {
        line: u64,
        column: &'static str,
        value: String,
    },
}
