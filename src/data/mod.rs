// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the raw JSON file and the split tables.
//
// The pipeline flows in this order:
//
//   training_set.json
//       │
//       ▼
//   loader          → reads the file into nested documents
//       │
//       ▼
//   flattener       → one record per (question, answer)
//       │
//       ▼
//   classifier      → flags ambiguous / inconsistent rows
//       │
//       ▼
//   splitter        → {train, held-out} and {train, validation}
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads SQuAD-style JSON files
pub mod loader;

/// Nested documents → flat RecordTable
pub mod flattener;

/// Per-record ambiguity and offset checks
pub mod classifier;

/// Held-out test split and title-grouped validation split
pub mod splitter;
