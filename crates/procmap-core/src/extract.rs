//! # Extract Module
//!
//! Workbook to CSV conversion for the four required sheets.
//!
//! - Validate the workbook exists and opens
//! - Validate all required sheets are present before writing anything
//! - Write one CSV per sheet, header row first

use crate::primitives::REQUIRED_SHEETS;
use crate::table::Table;
use crate::ProcmapError;
use calamine::{Data, Reader, open_workbook_auto};
use std::path::{Path, PathBuf};

/// One written CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSheet {
    pub sheet: String,
    pub path: PathBuf,
    /// Data rows written (header excluded).
    pub rows: usize,
}

/// Result of a successful extraction, in [`REQUIRED_SHEETS`] order.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    pub sheets: Vec<ExtractedSheet>,
}

impl ExtractReport {
    /// Total data rows across all sheets.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.sheets.iter().map(|s| s.rows).sum()
    }
}

/// Convert the required sheets of `workbook` into CSV files in `output_dir`.
///
/// # Errors
/// - `NotFound` if the workbook path does not exist (nothing is created)
/// - `WorkbookUnreadable` if the workbook or one of its sheets cannot be parsed
/// - `MissingSheet` naming the first absent sheet (no file is written)
pub fn extract_workbook(workbook: &Path, output_dir: &Path) -> Result<ExtractReport, ProcmapError> {
    if !workbook.exists() {
        return Err(ProcmapError::NotFound(workbook.to_path_buf()));
    }

    let mut book = open_workbook_auto(workbook)
        .map_err(|e| ProcmapError::WorkbookUnreadable(e.to_string()))?;

    let available = book.sheet_names();
    for (sheet, _) in REQUIRED_SHEETS {
        if !available.iter().any(|name| name == sheet) {
            return Err(ProcmapError::MissingSheet(sheet.to_string()));
        }
    }

    // Read every sheet before touching the output directory.
    let mut tables = Vec::with_capacity(REQUIRED_SHEETS.len());
    for (sheet, file) in REQUIRED_SHEETS {
        let range = book.worksheet_range(sheet).map_err(|e| {
            ProcmapError::WorkbookUnreadable(format!("sheet '{}': {}", sheet, e))
        })?;
        tables.push((sheet_to_table(sheet, range.rows()), file));
    }

    std::fs::create_dir_all(output_dir)?;

    let mut report = ExtractReport::default();
    for (table, file) in tables {
        let path = output_dir.join(file);
        table.write_csv(&path)?;
        report.sheets.push(ExtractedSheet {
            sheet: table.name.clone(),
            path,
            rows: table.len(),
        });
    }

    Ok(report)
}

/// Build a table from sheet rows; the first row is the header.
fn sheet_to_table<'a>(name: &str, mut rows: impl Iterator<Item = &'a [Data]>) -> Table {
    let headers = rows
        .next()
        .map(|row| row.iter().map(cell_to_string).collect())
        .unwrap_or_default();
    let mut table = Table::new(name, headers);

    for row in rows {
        table.push_row(row.iter().map(cell_to_string).collect());
    }

    table
}

/// Render one cell the way a CSV consumer expects to read it back.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_float(*f),
        Data::Bool(b) => (if *b { "True" } else { "False" }).to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.to_string())
            .unwrap_or_else(|| format_float(dt.as_f64())),
        Data::Error(e) => e.to_string(),
    }
}

/// Integral floats print without a fractional part.
fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{CellErrorType, ExcelDateTime, ExcelDateTimeType};

    #[test]
    fn floats_drop_integral_fraction() {
        assert_eq!(cell_to_string(&Data::Float(1.0)), "1");
        assert_eq!(cell_to_string(&Data::Float(-12.0)), "-12");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
    }

    #[test]
    fn scalar_cells_render_as_text() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::Bool(true)), "True");
        assert_eq!(cell_to_string(&Data::String("Alpha".into())), "Alpha");
    }

    #[test]
    fn error_cells_keep_spreadsheet_text() {
        assert_eq!(cell_to_string(&Data::Error(CellErrorType::Div0)), "#DIV/0!");
        assert_eq!(cell_to_string(&Data::Error(CellErrorType::NA)), "#N/A");
        assert_eq!(cell_to_string(&Data::Error(CellErrorType::Value)), "#VALUE!");
    }

    #[test]
    fn datetime_cells_render_as_timestamps() {
        // 45292.5 is 2024-01-01 at noon in the 1900 date system.
        let cell = Data::DateTime(ExcelDateTime::new(45292.5, ExcelDateTimeType::DateTime, false));
        assert_eq!(cell_to_string(&cell), "2024-01-01 12:00:00");
    }

    #[test]
    fn first_row_becomes_header() {
        let rows: Vec<Vec<Data>> = vec![
            vec![Data::String("ID".into()), Data::String("Process Name".into())],
            vec![Data::Float(1.0), Data::String("Billing".into())],
            vec![Data::Float(2.0), Data::Empty],
        ];
        let table = sheet_to_table("processes", rows.iter().map(Vec::as_slice));

        assert_eq!(table.headers, vec!["ID", "Process Name"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1], vec!["2".to_string(), String::new()]);
    }

    #[test]
    fn missing_workbook_is_not_found_and_creates_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let workbook = dir.path().join("nope.xlsx");
        let out = dir.path().join("csv");

        let err = extract_workbook(&workbook, &out).expect_err("missing");
        assert!(matches!(err, ProcmapError::NotFound(_)));
        assert!(!out.exists());
    }

    #[test]
    fn garbage_workbook_is_unreadable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let workbook = dir.path().join("broken.xlsx");
        std::fs::write(&workbook, b"definitely not a zip archive").expect("write");

        let err = extract_workbook(&workbook, &dir.path().join("csv")).expect_err("garbage");
        assert!(matches!(err, ProcmapError::WorkbookUnreadable(_)));
    }
}
