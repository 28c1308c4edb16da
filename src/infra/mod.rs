// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting persistence that does not belong to the
// pipeline itself:
//
//   table_store.rs — writes RecordTables and run summaries to
//                    pretty JSON files and reads tables back,
//                    so the prepared splits can be inspected
//                    or fed to a separate training job.
//
// Reference: Rust Book §9 (Error Handling)

/// RecordTable persistence
pub mod table_store;
