// ============================================================
// Layer 6 — Table Store
// ============================================================
// Saves a RecordTable as a JSON array of records, one object
// per row, in row order:
//
//   [
//     { "title": "...", "context": "...", "answer_start": 12,
//       "text": "...", "question": "...", "id": "..." },
//     ...
//   ]
//
// Answer fields are omitted for tables without answers.
//
// Reference: serde_json documentation

use std::{fs, path::Path};

use serde::Serialize;

use crate::domain::record::RecordTable;
use crate::error::{DatasetError, Result};

/// Write `table` to `path`, creating parent directories.
pub fn save_table(path: impl AsRef<Path>, table: &RecordTable) -> Result<()> {
    let path = path.as_ref();
    save_json(path, table)?;

    tracing::debug!("Saved {} records to '{}'", table.len(), path.display());
    Ok(())
}

/// Write any serialisable value as pretty JSON, creating
/// parent directories. Used for run summaries.
pub fn save_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DatasetError::io(parent, e))?;
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| DatasetError::io(path, e))?;
    Ok(())
}

/// Read a table previously written by `save_table`.
pub fn load_table(path: impl AsRef<Path>) -> Result<RecordTable> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
    let table: RecordTable = serde_json::from_str(&json).map_err(|e| DatasetError::MalformedInput {
        path:   path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(table)
}
