//! # Fixed Names and Defaults
//!
//! Hardcoded sheet names, column names, file names and layout constants.
//!
//! These are compiled into the binary. Paths can be overridden through
//! [`crate::config::PipelineConfig`]; names cannot.

/// Sheet name for the software table.
pub const SHEET_SOFTWARE: &str = "software";

/// Sheet name for the process table.
pub const SHEET_PROCESSES: &str = "processes";

/// Sheet name for the organizational unit table.
pub const SHEET_UNITS: &str = "organizational_units";

/// Sheet name for the link table.
pub const SHEET_LINKS: &str = "links";

/// Required sheets and the CSV file each one is written to.
///
/// The order here is the extraction order.
pub const REQUIRED_SHEETS: [(&str, &str); 4] = [
    (SHEET_SOFTWARE, "software.csv"),
    (SHEET_PROCESSES, "processes.csv"),
    (SHEET_UNITS, "organizational_units.csv"),
    (SHEET_LINKS, "links.csv"),
];

// =============================================================================
// COLUMN NAMES
// =============================================================================

/// Identifier column shared by software, process and unit tables.
///
/// Excluded from the hover detail.
pub const COL_ID: &str = "ID";

pub const COL_SOFTWARE_NAME: &str = "Software Name";
pub const COL_STATUS: &str = "Status";
pub const COL_PROCESS_NAME: &str = "Process Name";
pub const COL_UNIT_NAME: &str = "Organizational Unit Name";

pub const COL_LINK_PROCESS: &str = "Process ID";
pub const COL_LINK_UNIT: &str = "Organizational Unit ID";
pub const COL_LINK_SOFTWARE: &str = "Software ID";

// =============================================================================
// DEFAULT PATHS
// =============================================================================

/// Default workbook location.
pub const DEFAULT_WORKBOOK: &str = "excel/process_map.xlsx";

/// Default directory for the extracted CSV files.
pub const DEFAULT_CSV_DIR: &str = "csv/";

/// Default location of the rendered document.
pub const DEFAULT_OUTPUT: &str = "dist/process_support_map.html";

// =============================================================================
// LAYOUT
// =============================================================================

pub const DEFAULT_TITLE: &str = "Process Support Map";
pub const X_AXIS_TITLE: &str = "Processes";
pub const Y_AXIS_TITLE: &str = "Organizational Units";
pub const LEGEND_TITLE: &str = "Status";

/// Plot width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;

/// Plot height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;
