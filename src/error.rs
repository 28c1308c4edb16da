// ============================================================
// Error Types
// ============================================================
// Every fallible operation in the library returns DatasetError.
// The application layer wraps these in anyhow for context.
//
// Reference: Rust Book §9 (Error Handling)

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    /// The input JSON is invalid or a required key is missing at
    /// its nesting level.
    #[error("Malformed input in {path}: {reason}")]
    MalformedInput { path: String, reason: String },

    /// A record lacks a field the current operation needs.
    #[error("Record '{id}' has no '{field}' field")]
    MissingField { id: String, field: &'static str },

    #[error("Validation rate must lie strictly between 0 and 1, got {rate}")]
    InvalidRate { rate: f64 },

    #[error("Splitting {titles} titles with rate {rate} leaves one side empty")]
    EmptySplit { titles: usize, rate: f64 },

    #[error("IO error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;
