//! # Heatmap Module
//!
//! Resolves the links table into a dense (unit × process) matrix.
//!
//! The join is a hash join: the process, unit and software tables are indexed
//! by identifier once, then links are scanned in source order. When two links
//! land on the same cell, the later one wins.

use crate::loader::Dataset;
use crate::{EntityId, ProcmapError, Software, Status};
use serde::Serialize;
use std::collections::BTreeMap;

/// Three equal-shaped matrices plus their axis labels.
///
/// Row `r` is `units[r]`, column `c` is `processes[c]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportMatrix {
    /// Column labels (process names), in source order.
    pub processes: Vec<String>,
    /// Row labels (organizational unit names), in source order.
    pub units: Vec<String>,
    /// Status color codes (1..=4); `None` for empty cells or unknown statuses.
    pub z: Vec<Vec<Option<u8>>>,
    /// Software name shown in each cell.
    pub text: Vec<Vec<String>>,
    /// `Label: value` attribute dump per cell.
    pub hover: Vec<Vec<String>>,
    /// Cells some link resolved to, whatever their name or status.
    #[serde(skip)]
    pub filled: Vec<Vec<bool>>,
}

/// Per-status number of colored cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub development: usize,
    pub production: usize,
    pub maintenance: usize,
    pub decommissioned: usize,
    /// Cells holding software whose status is not recognized.
    pub unknown: usize,
    /// Cells no link touched.
    pub empty: usize,
}

impl SupportMatrix {
    /// An all-empty matrix for the given axes.
    #[must_use]
    pub fn empty(units: Vec<String>, processes: Vec<String>) -> Self {
        let rows = units.len();
        let cols = processes.len();
        Self {
            z: vec![vec![None; cols]; rows],
            text: vec![vec![String::new(); cols]; rows],
            hover: vec![vec![String::new(); cols]; rows],
            filled: vec![vec![false; cols]; rows],
            processes,
            units,
        }
    }

    /// `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.units.len(), self.processes.len())
    }

    /// Status of a cell, if it carries a known one.
    #[must_use]
    pub fn status_at(&self, row: usize, col: usize) -> Option<Status> {
        self.z
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .flatten()
            .and_then(Status::from_code)
    }

    /// Whether a link populated this cell.
    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.filled
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Count cells by status.
    #[must_use]
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        let (rows, cols) = self.shape();

        for row in 0..rows {
            for col in 0..cols {
                match self.status_at(row, col) {
                    Some(Status::Development) => counts.development += 1,
                    Some(Status::Production) => counts.production += 1,
                    Some(Status::Maintenance) => counts.maintenance += 1,
                    Some(Status::Decommissioned) => counts.decommissioned += 1,
                    None if self.is_filled(row, col) => counts.unknown += 1,
                    None => counts.empty += 1,
                }
            }
        }

        counts
    }

    /// Place `software` at a cell, replacing whatever was there.
    ///
    /// Cells outside the matrix are ignored.
    pub fn set(&mut self, row: usize, col: usize, software: &Software) {
        let (rows, cols) = self.shape();
        if row >= rows || col >= cols {
            return;
        }
        self.filled[row][col] = true;
        self.z[row][col] = software.status().map(Status::code);
        self.text[row][col] = software.name.clone();
        self.hover[row][col] = software.hover_text();
    }
}

/// Index identifiers to positions, keeping the first occurrence.
fn index_by_id<'a, T>(
    items: &'a [T],
    id: impl Fn(&'a T) -> &'a EntityId,
) -> BTreeMap<&'a EntityId, usize> {
    let mut index = BTreeMap::new();
    for (pos, item) in items.iter().enumerate() {
        index.entry(id(item)).or_insert(pos);
    }
    index
}

fn resolve(
    index: &BTreeMap<&EntityId, usize>,
    id: &EntityId,
    table: &str,
    link_row: usize,
) -> Result<usize, ProcmapError> {
    index
        .get(id)
        .copied()
        .ok_or_else(|| ProcmapError::UnresolvedReference {
            table: table.to_string(),
            id: id.to_string(),
            link_row,
        })
}

/// Build the support matrix from a loaded dataset.
///
/// # Errors
/// Returns `UnresolvedReference` for the first link whose process, unit or
/// software identifier is not in its table. `link_row` is 1-based over data
/// rows.
pub fn build_support_matrix(data: &Dataset) -> Result<SupportMatrix, ProcmapError> {
    let mut matrix = SupportMatrix::empty(
        data.units.iter().map(|u| u.name.clone()).collect(),
        data.processes.iter().map(|p| p.name.clone()).collect(),
    );

    let process_index = index_by_id(&data.processes, |p| &p.id);
    let unit_index = index_by_id(&data.units, |u| &u.id);
    let software_index = index_by_id(&data.software, |s| &s.id);

    for (i, link) in data.links.iter().enumerate() {
        let link_row = i + 1;
        let col = resolve(&process_index, &link.process_id, "process", link_row)?;
        let row = resolve(&unit_index, &link.unit_id, "organizational unit", link_row)?;
        let sw = resolve(&software_index, &link.software_id, "software", link_row)?;

        matrix.set(row, col, &data.software[sw]);
    }

    Ok(matrix)
}

// =============================================================================
// TESTS
// =============================================================================
