// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Reads a SQuAD-style JSON file and flattens it:
//
//   training_set.json
//       │  serde_json
//       ▼
//   SquadFile { data: Vec<Document> }
//       │  flattener
//       ▼
//   RecordTable
//
// serde reports a missing key with its name and position, which
// becomes DatasetError::MalformedInput carrying the file path.
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::flattener::{flatten_with_answers, flatten_without_answers};
use crate::domain::record::RecordTable;
use crate::domain::squad::{Document, QuestionsFile, SquadFile};
use crate::domain::traits::DatasetSource;
use crate::error::{DatasetError, Result};

/// File name used when none is given
pub const DEFAULT_TRAINING_FILE: &str = "training_set.json";

/// Reads documents from one JSON file on disk.
pub struct SquadFileSource {
    path: PathBuf,
}

impl SquadFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `data_dir/filename`
    pub fn in_dir(data_dir: impl AsRef<Path>, filename: &str) -> Self {
        Self::new(data_dir.as_ref().join(filename))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file as inference data: questions only, the
    /// answer level is never parsed.
    pub fn load_questions(&self) -> Result<Vec<Document>> {
        let raw = self.read_raw()?;
        let file = parse_squad_questions(&raw).map_err(|e| self.attach_path(e))?;
        let documents = file.into_documents();

        tracing::info!("Loaded {} documents from '{}'", documents.len(), self.path.display());
        Ok(documents)
    }

    fn read_raw(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| DatasetError::io(&self.path, e))
    }

    /// Replace the placeholder path of a parse error with this file
    fn attach_path(&self, err: DatasetError) -> DatasetError {
        match err {
            DatasetError::MalformedInput { reason, .. } => DatasetError::MalformedInput {
                path: self.path.display().to_string(),
                reason,
            },
            other => other,
        }
    }
}

impl DatasetSource for SquadFileSource {
    fn load_documents(&self) -> Result<Vec<Document>> {
        let raw = self.read_raw()?;
        let file = parse_squad(&raw).map_err(|e| self.attach_path(e))?;

        tracing::info!("Loaded {} documents from '{}'", file.data.len(), self.path.display());
        Ok(file.data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse SQuAD JSON text. Syntax errors and missing keys are
/// both reported as malformed input.
pub fn parse_squad(json: &str) -> Result<SquadFile> {
    serde_json::from_str(json).map_err(|e| DatasetError::MalformedInput {
        path:   "<input>".to_string(),
        reason: e.to_string(),
    })
}

/// Parse SQuAD JSON text keeping only titles, contexts and
/// questions. Anything under `answers` is ignored.
pub fn parse_squad_questions(json: &str) -> Result<QuestionsFile> {
    serde_json::from_str(json).map_err(|e| DatasetError::MalformedInput {
        path:   "<input>".to_string(),
        reason: e.to_string(),
    })
}

/// Load `data_dir/filename` with one record per answer.
///
/// The data directory is passed in explicitly; see
/// `DatasetConfig::data_dir` for the configured default.
pub fn load_dataset(data_dir: impl AsRef<Path>, filename: &str) -> Result<RecordTable> {
    load_from_source(&SquadFileSource::in_dir(data_dir, filename))
}

/// Load a single file path with one record per answer.
pub fn load_dataset_from_path(path: impl Into<PathBuf>) -> Result<RecordTable> {
    load_from_source(&SquadFileSource::new(path))
}

/// Load an inference-only dataset: one record per question,
/// no answer fields. Answers present in the file are not read,
/// so incomplete annotations do not fail the load.
pub fn load_dataset_without_answer(path: impl Into<PathBuf>) -> Result<RecordTable> {
    let source = SquadFileSource::new(path);
    let documents = source.load_questions()?;
    let table = flatten_without_answers(&documents);
    tracing::info!("Flattened '{}' into {} question records", source.describe(), table.len());
    Ok(table)
}

/// Load any DatasetSource with one record per answer.
pub fn load_from_source<S: DatasetSource + ?Sized>(source: &S) -> Result<RecordTable> {
    let documents = source.load_documents()?;
    let table = flatten_with_answers(&documents).map_err(|e| match e {
        DatasetError::MalformedInput { path, reason } => DatasetError::MalformedInput {
            path: format!("{}: {path}", source.describe()),
            reason,
        },
        other => other,
    })?;
    tracing::info!("Flattened '{}' into {} answer records", source.describe(), table.len());
    Ok(table)
}
