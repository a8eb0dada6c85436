//! # Core Type Definitions
//!
//! This module contains all core types for the procmap pipeline:
//! - Entity identifiers (`EntityId`)
//! - Lifecycle status (`Status`)
//! - Table records (`Software`, `OrgUnit`, `Process`, `Link`)
//! - Error types (`ProcmapError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer color codes only (no floating-point)
//! - Implement `Ord` where they are used as `BTreeMap` keys
//! - Preserve source column order for display attributes

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// ENTITY IDENTIFIER
// =============================================================================

/// Identifier of a row in one of the source tables.
///
/// Identifiers are compared as normalized text: surrounding whitespace is
/// dropped and integral numbers lose their fractional part, so a spreadsheet
/// `1` and a hand-edited `1.0` name the same entity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub String);

impl EntityId {
    /// Create a normalized identifier from raw cell text.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(normalize_id(raw))
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip whitespace and a trailing all-zero fraction (`"7.0"` -> `"7"`).
fn normalize_id(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some((whole, frac)) = trimmed.split_once('.') {
        let digits = whole.strip_prefix('-').unwrap_or(whole);
        if !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && !frac.is_empty()
            && frac.bytes().all(|b| b == b'0')
        {
            return whole.to_string();
        }
    }
    trimmed.to_string()
}

// =============================================================================
// STATUS
// =============================================================================

/// Lifecycle stage of a software system.
///
/// The discriminant is the color code plotted in the heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Development = 1,
    Production = 2,
    Maintenance = 3,
    Decommissioned = 4,
}

impl Status {
    /// All statuses in color-code order.
    pub const ALL: [Status; 4] = [
        Status::Development,
        Status::Production,
        Status::Maintenance,
        Status::Decommissioned,
    ];

    /// Parse a status label, ignoring case and surrounding whitespace.
    ///
    /// Unknown labels yield `None`; the cell is then left without a color.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "development" => Some(Status::Development),
            "production" => Some(Status::Production),
            "maintenance" => Some(Status::Maintenance),
            "decommissioned" => Some(Status::Decommissioned),
            _ => None,
        }
    }

    /// Color code used in the `z` matrix (1..=4).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Status::code`].
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Legend label.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Status::Development => "Development",
            Status::Production => "Production",
            Status::Maintenance => "Maintenance",
            Status::Decommissioned => "Decommissioned",
        }
    }

    /// Fill color for cells carrying this status (60% opacity).
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Status::Development => "rgba(255, 255, 0, 0.6)",
            Status::Production => "rgba(0, 255, 0, 0.6)",
            Status::Maintenance => "rgba(0, 123, 255, 0.6)",
            Status::Decommissioned => "rgba(169, 169, 169, 0.6)",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TABLE RECORDS
// =============================================================================

/// A software system.
///
/// `attributes` holds every column of the source row except `ID`, in column
/// order, and is what the hover detail displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Software {
    pub id: EntityId,
    pub name: String,
    /// Raw status text as found in the sheet.
    pub status: String,
    pub attributes: Vec<(String, String)>,
}

impl Software {
    /// Parsed lifecycle status, if the raw text is a known label.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        Status::parse(&self.status)
    }

    /// Multi-line `Label: value` dump of all attributes.
    #[must_use]
    pub fn hover_text(&self) -> String {
        self.attributes
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An organizational unit (a matrix row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgUnit {
    pub id: EntityId,
    pub name: String,
}

/// A business process (a matrix column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: EntityId,
    pub name: String,
}

/// One row of the links table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub process_id: EntityId,
    pub unit_id: EntityId,
    pub software_id: EntityId,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the procmap pipeline.
///
/// - No silent failures
/// - Use `Result<T, ProcmapError>` for fallible operations
/// - Any error aborts the whole run
#[derive(Debug, Error)]
pub enum ProcmapError {
    /// A required input file or workbook does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The workbook exists but could not be opened or parsed.
    #[error("Failed to load the workbook: {0}")]
    WorkbookUnreadable(String),

    /// A required sheet is absent from the workbook.
    #[error("Required sheet '{0}' is missing from the workbook")]
    MissingSheet(String),

    /// A table lacks a column the pipeline reads.
    #[error("Table '{table}' has no '{column}' column")]
    MissingColumn { table: String, column: String },

    /// A link references an identifier absent from its table.
    #[error("Link row {link_row} references unknown {table} ID '{id}'")]
    UnresolvedReference {
        table: String,
        id: String,
        link_row: usize,
    },

    /// Reading or writing a delimited file failed.
    #[error("CSV error: {0}")]
    Csv(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<csv::Error> for ProcmapError {
    fn from(err: csv::Error) -> Self {
        ProcmapError::Csv(err.to_string())
    }
}

impl From<std::io::Error> for ProcmapError {
    fn from(err: std::io::Error) -> Self {
        ProcmapError::Io(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
