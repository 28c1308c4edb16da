// ============================================================
// squad-prep — library root
// ============================================================
// Loads a SQuAD-style question-answering dataset, flattens it
// into one record per (question, answer) pair, and partitions
// the records into training, held-out test and validation
// tables.
//
// The crate is organised in layers:
//
//   Layer 2  application/ — PrepareUseCase: the end-to-end run
//   Layer 3  domain/      — plain data types and traits
//   Layer 4  data/        — loader, flattener, classifier, splitter
//   Layer 6  infra/       — table persistence
//
// Cross-cutting:
//   config.rs — DatasetConfig, passed explicitly to every run
//   error.rs  — DatasetError
//
// The library only emits `tracing` events; installing a
// subscriber is up to the caller.

pub mod application;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod infra;

pub use application::prepare_use_case::{PrepareSummary, PrepareUseCase, PreparedSplits};
pub use config::DatasetConfig;
pub use data::classifier::{classify, RowClass};
pub use data::flattener::{flatten_with_answers, flatten_without_answers};
pub use data::loader::{load_dataset, load_dataset_without_answer};
pub use data::splitter::{split_test_set, split_validation_set};
pub use domain::record::{Record, RecordTable};
pub use error::{DatasetError, Result};
