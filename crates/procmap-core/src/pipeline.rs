//! # Pipeline
//!
//! Runs the stages in order: extract, load, join, render.
//!
//! Each stage is a pure function of its inputs plus filesystem side effects.
//! The first failure aborts the run.

use crate::config::PipelineConfig;
use crate::extract::{ExtractReport, extract_workbook};
use crate::heatmap::{SupportMatrix, build_support_matrix};
use crate::loader::{CsvPaths, load_dataset};
use crate::render::{RenderOptions, write_html};
use crate::ProcmapError;
use std::path::{Path, PathBuf};

/// Outcome of the render stage.
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub output: PathBuf,
    pub matrix: SupportMatrix,
    pub link_count: usize,
}

/// Outcome of a full run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub extract: ExtractReport,
    pub render: RenderReport,
}

/// Load the CSV files and join them into a matrix.
pub fn load_matrix(paths: &CsvPaths) -> Result<(SupportMatrix, usize), ProcmapError> {
    let data = load_dataset(paths)?;
    let matrix = build_support_matrix(&data)?;
    Ok((matrix, data.links.len()))
}

/// Stages 2 and 3: CSV files to HTML document.
pub fn render_map(
    paths: &CsvPaths,
    options: &RenderOptions,
    output: &Path,
) -> Result<RenderReport, ProcmapError> {
    let (matrix, link_count) = load_matrix(paths)?;
    let output = write_html(&matrix, options, output)?;
    Ok(RenderReport {
        output,
        matrix,
        link_count,
    })
}

/// All stages with the given configuration.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineReport, ProcmapError> {
    let extract = extract_workbook(&config.workbook, &config.csv_dir)?;
    let render = render_map(&config.csv_paths(), &config.render, &config.output)?;
    Ok(PipelineReport { extract, render })
}
