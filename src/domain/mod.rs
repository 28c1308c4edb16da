// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure data types shared by every other layer:
//
//   squad.rs  — the nested dataset as it appears on disk, plus
//               a question-only view for inference files
//   record.rs — the flat table the pipeline works on
//   traits.rs — the DatasetSource seam used by the loader
//
// Rules for this layer:
//   - NO file I/O
//   - NO logging
//   - Only plain structs, enums and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Nested SQuAD-style documents
pub mod squad;

/// Flattened records and the record table
pub mod record;

/// Abstractions other layers implement
pub mod traits;
