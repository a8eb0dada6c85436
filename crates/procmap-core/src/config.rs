//! # Pipeline Configuration
//!
//! Paths and layout for one pipeline run. Every field has a compiled default,
//! so an empty TOML document is a valid configuration.

use crate::loader::CsvPaths;
use crate::primitives::{DEFAULT_CSV_DIR, DEFAULT_OUTPUT, DEFAULT_WORKBOOK};
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where to read the workbook, where to put the CSV files and the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub workbook: PathBuf,
    pub csv_dir: PathBuf,
    pub output: PathBuf,
    pub render: RenderOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            csv_dir: PathBuf::from(DEFAULT_CSV_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            render: RenderOptions::default(),
        }
    }
}

impl PipelineConfig {
    /// The four CSV files inside `csv_dir`.
    #[must_use]
    pub fn csv_paths(&self) -> CsvPaths {
        CsvPaths::in_dir(&self.csv_dir)
    }
}
