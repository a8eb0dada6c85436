//! # Table Module
//!
//! Row-oriented string tables and their CSV representation.
//!
//! A `Table` is what every stage hands to the next: the extractor builds one
//! per sheet and writes it out, the loader reads it back before converting to
//! typed records.

use crate::ProcmapError;
use std::path::Path;

/// An ordered header row plus data rows of string fields.
///
/// Every row has exactly `headers.len()` fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Name used in error messages (sheet or file stem).
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given headers.
    #[must_use]
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Number of data rows (header excluded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, if present.
    #[must_use]
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == column)
    }

    /// Position of a column the caller cannot do without.
    pub fn require_column(&self, column: &str) -> Result<usize, ProcmapError> {
        self.column_index(column)
            .ok_or_else(|| ProcmapError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    // =========================================================================
    // CSV I/O
    // =========================================================================

    /// Read a CSV file whose first record is the header row.
    pub fn read_csv(name: impl Into<String>, path: &Path) -> Result<Self, ProcmapError> {
        if !path.exists() {
            return Err(ProcmapError::NotFound(path.to_path_buf()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut table = Table::new(name, headers);

        for record in reader.records() {
            let record = record?;
            table.push_row(record.iter().map(str::to_string).collect());
        }

        Ok(table)
    }

    /// Write the table as CSV, header row first. Overwrites `path`.
    pub fn write_csv(&self, path: &Path) -> Result<(), ProcmapError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new("software", vec!["ID".into(), "Software Name".into()]);
        table.push_row(vec!["1".into(), "Alpha, Inc.".into()]);
        table.push_row(vec!["2".into()]);
        table
    }

    #[test]
    fn push_row_pads_short_rows() {
        let table = sample();
        assert_eq!(table.rows[1], vec!["2".to_string(), String::new()]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn require_column_reports_table_and_column() {
        let table = sample();
        assert_eq!(table.require_column("Software Name").expect("present"), 1);

        let err = table.require_column("Status").expect_err("absent");
        assert!(matches!(
            err,
            ProcmapError::MissingColumn { ref table, ref column }
                if table == "software" && column == "Status"
        ));
    }

    #[test]
    fn csv_write_then_read_preserves_quoted_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("software.csv");

        let table = sample();
        table.write_csv(&path).expect("write");

        let text = std::fs::read_to_string(&path).expect("read");
        assert!(text.starts_with("ID,Software Name\n"));
        assert!(text.contains("\"Alpha, Inc.\""));

        let back = Table::read_csv("software", &path).expect("read csv");
        assert_eq!(back, table);
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.csv");

        let err = Table::read_csv("absent", &path).expect_err("missing");
        assert!(matches!(err, ProcmapError::NotFound(p) if p == path));
    }
}
