//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use procmap_core::{
    ExtractReport, PipelineConfig, ProcmapError, RenderReport, SupportMatrix, extract_workbook,
    load_matrix, render_map, run_pipeline, write_json,
};
use std::path::Path;

// =============================================================================
// OUTPUT
// =============================================================================

/// Stdout writer for user-facing lines; silent under `--quiet`.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    quiet: bool,
}

impl Printer {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn line(&self, text: impl std::fmt::Display) {
        if !self.quiet {
            println!("{}", text);
        }
    }
}

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Extract the workbook, then render the map.
pub fn cmd_run(config: &PipelineConfig, out: &Printer) -> Result<(), ProcmapError> {
    tracing::info!(
        "Running pipeline: {} -> {} -> {}",
        config.workbook.display(),
        config.csv_dir.display(),
        config.output.display()
    );
    out.line("Converting Excel to CSV...");

    let report = run_pipeline(config)?;
    print_extract_report(&report.extract, out);

    out.line("Generating process support map...");
    print_render_report(&report.render, out);

    out.line("Process completed!");
    Ok(())
}

// =============================================================================
// EXTRACT COMMAND
// =============================================================================

/// Convert the workbook sheets to CSV files.
pub fn cmd_extract(config: &PipelineConfig, out: &Printer) -> Result<(), ProcmapError> {
    tracing::info!(
        "Extracting {} into {}",
        config.workbook.display(),
        config.csv_dir.display()
    );

    let report = extract_workbook(&config.workbook, &config.csv_dir)?;
    print_extract_report(&report, out);
    Ok(())
}

fn print_extract_report(report: &ExtractReport, out: &Printer) {
    for sheet in &report.sheets {
        tracing::debug!("Sheet '{}': {} rows", sheet.sheet, sheet.rows);
        out.line(format!("Generated CSV: {}", sheet.path.display()));
    }
    tracing::info!(
        "Extracted {} sheets, {} rows",
        report.sheets.len(),
        report.total_rows()
    );
}

// =============================================================================
// RENDER COMMAND
// =============================================================================

/// Render the map from the CSV files in the configured directory.
pub fn cmd_render(config: &PipelineConfig, out: &Printer) -> Result<(), ProcmapError> {
    tracing::info!("Rendering map from {}", config.csv_dir.display());

    let report = render_map(&config.csv_paths(), &config.render, &config.output)?;
    print_render_report(&report, out);
    Ok(())
}

fn print_render_report(report: &RenderReport, out: &Printer) {
    log_matrix_summary(&report.matrix, report.link_count);
    out.line(format!(
        "Process support map saved to '{}'.",
        report.output.display()
    ));
}

fn log_matrix_summary(matrix: &SupportMatrix, link_count: usize) {
    let (rows, cols) = matrix.shape();
    let counts = matrix.status_counts();
    tracing::info!(
        "Matrix {}x{} from {} links: {} development, {} production, {} maintenance, {} decommissioned, {} unknown, {} empty",
        rows,
        cols,
        link_count,
        counts.development,
        counts.production,
        counts.maintenance,
        counts.decommissioned,
        counts.unknown,
        counts.empty
    );
}

// =============================================================================
// EXPORT COMMAND
// =============================================================================

/// Write the joined matrix as JSON.
pub fn cmd_export(
    config: &PipelineConfig,
    out: &Printer,
    json_output: &Path,
) -> Result<(), ProcmapError> {
    let (matrix, link_count) = load_matrix(&config.csv_paths())?;
    log_matrix_summary(&matrix, link_count);

    write_json(&matrix, json_output)?;
    out.line(format!("Exported matrix to '{}'.", json_output.display()));
    Ok(())
}
