// ============================================================
// Layer 3 — Core Traits
// ============================================================
// The application layer only needs "something that yields
// documents". Programming against this trait lets the use case
// run on a file on disk or on documents built in memory.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::squad::Document;
use crate::error::Result;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can produce SQuAD-style documents.
///
/// Implementations:
///   - SquadFileSource → reads a JSON file from disk
///   - Vec<Document>   → documents already in memory
pub trait DatasetSource {
    /// Load every document, preserving file order.
    fn load_documents(&self) -> Result<Vec<Document>>;

    /// Human-readable origin, used in log lines
    fn describe(&self) -> String;
}

impl DatasetSource for Vec<Document> {
    fn load_documents(&self) -> Result<Vec<Document>> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory documents", self.len())
    }
}
