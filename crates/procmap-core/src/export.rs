//! # JSON Export
//!
//! Machine-readable dump of a [`SupportMatrix`] for scripting.
//!
//! Field order is stable (`serde_json` with `preserve_order`), so two exports
//! of the same workbook are byte-identical.

use crate::heatmap::{StatusCounts, SupportMatrix};
use crate::ProcmapError;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct MatrixExport<'a> {
    #[serde(flatten)]
    matrix: &'a SupportMatrix,
    status_counts: StatusCounts,
}

/// Serialize the matrix and its status counts as pretty-printed JSON.
pub fn export_json(matrix: &SupportMatrix) -> Result<String, ProcmapError> {
    let export = MatrixExport {
        matrix,
        status_counts: matrix.status_counts(),
    };
    serde_json::to_string_pretty(&export).map_err(|e| ProcmapError::Serialization(e.to_string()))
}

/// Write [`export_json`] output to `path`, creating parent directories.
pub fn write_json(matrix: &SupportMatrix, path: &Path) -> Result<(), ProcmapError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, export_json(matrix)?)?;
    Ok(())
}
