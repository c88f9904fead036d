use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading evaluation inputs.
///
/// A section missing from the audit is not an error; it is scored as `MISSING`.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse answer key '{path}': {source}")]
    AnswerKeyParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to parse key concepts ({origin}): {source}")]
    ConceptsParse {
        origin: String,
        source: serde_yaml::Error,
    },

    #[error("invalid key concepts ({origin}): {message}")]
    InvalidConcepts { origin: String, message: String },
}

impl EvalError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
