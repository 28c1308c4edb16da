// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Runs the full preparation pipeline in order:
//
//   Step 1: Validate config
//   Step 2: Load + flatten the dataset     (Layer 4 - data)
//   Step 3: Hold out untrustworthy rows    (Layer 4 - data)
//   Step 4: Title-grouped validation split (Layer 4 - data)
//
// The held-out rows are removed BEFORE the validation split, so
// neither train nor validation contains ambiguous or
// inconsistent annotations.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::DatasetConfig;
use crate::data::{
    loader::{load_from_source, SquadFileSource},
    splitter::{split_test_set_with_report, split_validation_set_seeded},
};
use crate::domain::record::RecordTable;
use crate::domain::traits::DatasetSource;
use crate::infra::table_store::{save_json, save_table};

// ─── Summary ─────────────────────────────────────────────────────────────────
/// Row counts for one preparation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareSummary {
    pub total_records:    usize,
    pub train:            usize,
    pub validation:       usize,
    pub test:             usize,
    pub ambiguous:        usize,
    pub inconsistent:     usize,
    pub dropped_siblings: usize,
}

/// The three tables produced by a run
#[derive(Debug, Clone)]
pub struct PreparedSplits {
    pub train:      RecordTable,
    pub validation: RecordTable,
    pub test:       RecordTable,
    pub summary:    PrepareSummary,
}

impl PreparedSplits {
    /// Write train.json, validation.json, test.json and
    /// summary.json into `dir`.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();

        for (name, table) in [
            ("train.json", &self.train),
            ("validation.json", &self.validation),
            ("test.json", &self.test),
        ] {
            save_table(dir.join(name), table)
                .with_context(|| format!("Cannot save '{name}' to '{}'", dir.display()))?;
        }

        let summary_path = dir.join("summary.json");
        save_json(&summary_path, &self.summary)
            .with_context(|| format!("Cannot write '{}'", summary_path.display()))?;

        tracing::info!("Saved prepared splits to '{}'", dir.display());
        Ok(())
    }
}

// ─── PrepareUseCase ──────────────────────────────────────────────────────────
// Owns the config and runs the pipeline.
pub struct PrepareUseCase {
    config: DatasetConfig,
}

impl PrepareUseCase {
    pub fn new(config: DatasetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Run on the file named by the config
    pub fn execute(&self) -> Result<PreparedSplits> {
        let source = SquadFileSource::new(self.config.train_path());
        self.execute_from(&source)
    }

    /// Run on any document source
    pub fn execute_from<S: DatasetSource + ?Sized>(&self, source: &S) -> Result<PreparedSplits> {
        let cfg = &self.config;

        // ── Step 1: Validate config ──────────────────────────────────────────
        cfg.validate().context("Invalid dataset config")?;

        // ── Step 2: Load and flatten ─────────────────────────────────────────
        tracing::info!("Preparing dataset from '{}'", source.describe());
        let table = load_from_source(source)
            .with_context(|| format!("Cannot load dataset from '{}'", source.describe()))?;

        // ── Step 3: Held-out test set ────────────────────────────────────────
        let test_split = split_test_set_with_report(&table)
            .context("Cannot split held-out test set")?;

        // ── Step 4: Validation split on what is left ─────────────────────────
        let (train, validation) =
            split_validation_set_seeded(&test_split.train, cfg.validation_rate, cfg.seed)
                .context("Cannot split validation set")?;

        let summary = PrepareSummary {
            total_records:    table.len(),
            train:            train.len(),
            validation:       validation.len(),
            test:             test_split.held_out.len(),
            ambiguous:        test_split.report.ambiguous,
            inconsistent:     test_split.report.inconsistent,
            dropped_siblings: test_split.report.dropped_siblings,
        };

        tracing::info!(
            "Prepared {} records: {} train, {} validation, {} test",
            summary.total_records,
            summary.train,
            summary.validation,
            summary.test,
        );

        Ok(PreparedSplits {
            train,
            validation,
            test: test_split.held_out,
            summary,
        })
    }
}
