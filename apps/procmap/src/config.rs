//! # Configuration Loading
//!
//! Resolves the [`PipelineConfig`] for a run:
//! compiled defaults < optional TOML file < command-line flags.

use procmap_core::{PipelineConfig, ProcmapError};
use std::path::{Path, PathBuf};

/// Path overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub workbook: Option<PathBuf>,
    pub csv_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Parse a TOML configuration document.
pub fn parse_config(text: &str) -> Result<PipelineConfig, ProcmapError> {
    toml::from_str(text).map_err(|e| ProcmapError::Config(e.to_string()))
}

/// Read a TOML configuration file.
pub fn read_config(path: &Path) -> Result<PipelineConfig, ProcmapError> {
    if !path.exists() {
        return Err(ProcmapError::NotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| ProcmapError::Config(format!("{}: {}", path.display(), e)))?;
    parse_config(&text)
}

/// Build the effective configuration.
pub fn resolve_config(
    file: Option<&Path>,
    overrides: &Overrides,
) -> Result<PipelineConfig, ProcmapError> {
    let mut config = match file {
        Some(path) => {
            tracing::debug!("Reading configuration from {}", path.display());
            read_config(path)?
        }
        None => PipelineConfig::default(),
    };

    if let Some(workbook) = &overrides.workbook {
        config.workbook.clone_from(workbook);
    }
    if let Some(csv_dir) = &overrides.csv_dir {
        config.csv_dir.clone_from(csv_dir);
    }
    if let Some(output) = &overrides.output {
        config.output.clone_from(output);
    }

    Ok(config)
}
