//! # procmap-core
//!
//! The pipeline engine for procmap - THE LOGIC.
//!
//! This crate turns a workbook describing software, processes,
//! organizational units and the links between them into a
//! (unit × process) support matrix, and renders that matrix as a
//! self-contained interactive heatmap document.
//!
//! ## Stages
//!
//! ```text
//! workbook.xlsx ──extract──▶ csv/*.csv ──loader──▶ Dataset
//!                                                    │
//!                                                 heatmap
//!                                                    ▼
//!                 dist/process_support_map.html ◀──render── SupportMatrix
//! ```
//!
//! ## Architectural Constraints
//!
//! - No async, no network, no logging dependency: callers log from reports
//! - Fail fast: every stage returns `Result<_, ProcmapError>`
//! - Source row order defines both matrix axes

// =============================================================================
// MODULES
// =============================================================================

pub mod config;
pub mod export;
pub mod extract;
pub mod heatmap;
pub mod loader;
pub mod pipeline;
pub mod primitives;
pub mod render;
pub mod table;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{EntityId, Link, OrgUnit, Process, ProcmapError, Software, Status};

// =============================================================================
// RE-EXPORTS: Stages
// =============================================================================

pub use config::PipelineConfig;
pub use export::{export_json, write_json};
pub use extract::{ExtractReport, ExtractedSheet, extract_workbook};
pub use heatmap::{StatusCounts, SupportMatrix, build_support_matrix};
pub use loader::{CsvPaths, Dataset, load_dataset};
pub use pipeline::{PipelineReport, RenderReport, load_matrix, render_map, run_pipeline};
pub use render::{RenderOptions, render_html, write_html};
pub use table::Table;
