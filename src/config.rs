// ============================================================
// Dataset Configuration
// ============================================================
// Every setting a preparation run needs, passed around as a
// plain value. Nothing here is global: callers build a config
// (or load one from JSON) and hand it to the use case.
//
// Example config.json:
//   {
//     "data_dir": "data",
//     "train_file": "training_set.json",
//     "validation_rate": 0.2,
//     "seed": 0
//   }
//
// Missing keys fall back to the defaults below.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::data::loader::DEFAULT_TRAINING_FILE;
use crate::data::splitter::DEFAULT_SEED;
use crate::error::{DatasetError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Directory holding the dataset files
    pub data_dir:        PathBuf,
    /// Training file name inside `data_dir`
    pub train_file:      String,
    /// Share of titles sent to validation, in (0, 1)
    pub validation_rate: f64,
    /// Seed for the title shuffle
    pub seed:            u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir:        PathBuf::from("data"),
            train_file:      DEFAULT_TRAINING_FILE.to_string(),
            validation_rate: 0.2,
            seed:            DEFAULT_SEED,
        }
    }
}

impl DatasetConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the training file
    pub fn train_path(&self) -> PathBuf {
        self.data_dir.join(&self.train_file)
    }

    pub fn validate(&self) -> Result<()> {
        let rate = self.validation_rate;
        if !(rate > 0.0 && rate < 1.0) {
            return Err(DatasetError::InvalidRate { rate });
        }
        Ok(())
    }

    /// Read a config from JSON and validate it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
        let cfg: Self = serde_json::from_str(&json)?;
        cfg.validate()?;
        tracing::debug!("Loaded dataset config from '{}'", path.display());
        Ok(cfg)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| DatasetError::io(path, e))?;
        Ok(())
    }
}
