//! # Loader Module
//!
//! Reads the four extracted CSV files and converts them to typed records.
//!
//! - Every file must exist (checked before any parsing)
//! - Required columns must be present
//! - Row order is preserved exactly; it defines the matrix axes

use crate::primitives::{
    COL_ID, COL_LINK_PROCESS, COL_LINK_SOFTWARE, COL_LINK_UNIT, COL_PROCESS_NAME,
    COL_SOFTWARE_NAME, COL_STATUS, COL_UNIT_NAME, SHEET_LINKS, SHEET_PROCESSES, SHEET_SOFTWARE,
    SHEET_UNITS,
};
use crate::table::Table;
use crate::{EntityId, Link, OrgUnit, Process, ProcmapError, Software};
use std::path::{Path, PathBuf};

/// Locations of the four intermediate CSV files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPaths {
    pub software: PathBuf,
    pub units: PathBuf,
    pub processes: PathBuf,
    pub links: PathBuf,
}

impl CsvPaths {
    /// The standard file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            software: dir.join("software.csv"),
            units: dir.join("organizational_units.csv"),
            processes: dir.join("processes.csv"),
            links: dir.join("links.csv"),
        }
    }

    /// Paths in the order they are checked.
    fn all(&self) -> [&Path; 4] {
        [&self.software, &self.units, &self.processes, &self.links]
    }
}

/// The four tables, typed and in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub software: Vec<Software>,
    pub units: Vec<OrgUnit>,
    pub processes: Vec<Process>,
    pub links: Vec<Link>,
}

/// Load and type the four CSV files.
///
/// # Errors
/// - `NotFound` for the first path that does not exist
/// - `Csv` if a file cannot be parsed
/// - `MissingColumn` if a required column is absent
pub fn load_dataset(paths: &CsvPaths) -> Result<Dataset, ProcmapError> {
    for path in paths.all() {
        if !path.exists() {
            return Err(ProcmapError::NotFound(path.to_path_buf()));
        }
    }

    let software = Table::read_csv(SHEET_SOFTWARE, &paths.software)?;
    let units = Table::read_csv(SHEET_UNITS, &paths.units)?;
    let processes = Table::read_csv(SHEET_PROCESSES, &paths.processes)?;
    let links = Table::read_csv(SHEET_LINKS, &paths.links)?;

    Dataset::from_tables(&software, &units, &processes, &links)
}

impl Dataset {
    /// Convert raw tables to typed records.
    pub fn from_tables(
        software: &Table,
        units: &Table,
        processes: &Table,
        links: &Table,
    ) -> Result<Self, ProcmapError> {
        Ok(Self {
            software: software_records(software)?,
            units: named_records(units, COL_UNIT_NAME)?
                .into_iter()
                .map(|(id, name)| OrgUnit { id, name })
                .collect(),
            processes: named_records(processes, COL_PROCESS_NAME)?
                .into_iter()
                .map(|(id, name)| Process { id, name })
                .collect(),
            links: link_records(links)?,
        })
    }
}

fn software_records(table: &Table) -> Result<Vec<Software>, ProcmapError> {
    let id_col = table.require_column(COL_ID)?;
    let name_col = table.require_column(COL_SOFTWARE_NAME)?;
    let status_col = table.require_column(COL_STATUS)?;

    Ok(table
        .rows
        .iter()
        .map(|row| Software {
            id: EntityId::new(&row[id_col]),
            name: row[name_col].clone(),
            status: row[status_col].clone(),
            attributes: table
                .headers
                .iter()
                .zip(row)
                .enumerate()
                .filter(|(i, _)| *i != id_col)
                .map(|(_, (h, v))| (h.clone(), v.clone()))
                .collect(),
        })
        .collect())
}

fn named_records(table: &Table, name_column: &str) -> Result<Vec<(EntityId, String)>, ProcmapError> {
    let id_col = table.require_column(COL_ID)?;
    let name_col = table.require_column(name_column)?;

    Ok(table
        .rows
        .iter()
        .map(|row| (EntityId::new(&row[id_col]), row[name_col].clone()))
        .collect())
}

fn link_records(table: &Table) -> Result<Vec<Link>, ProcmapError> {
    let process_col = table.require_column(COL_LINK_PROCESS)?;
    let unit_col = table.require_column(COL_LINK_UNIT)?;
    let software_col = table.require_column(COL_LINK_SOFTWARE)?;

    Ok(table
        .rows
        .iter()
        .map(|row| Link {
            process_id: EntityId::new(&row[process_col]),
            unit_id: EntityId::new(&row[unit_col]),
            software_id: EntityId::new(&row[software_col]),
        })
        .collect())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str, headers: &[&str], rows: &[&[&str]]) -> Table {
        let mut t = Table::new(name, headers.iter().map(|h| h.to_string()).collect());
        for row in rows {
            t.push_row(row.iter().map(|c| c.to_string()).collect());
        }
        t
    }

    fn units() -> Table {
        table("organizational_units", &["ID", "Organizational Unit Name"], &[&["10", "Sales"]])
    }

    fn processes() -> Table {
        table("processes", &["ID", "Process Name"], &[&["20", "Billing"]])
    }

    fn links() -> Table {
        table(
            "links",
            &["Process ID", "Organizational Unit ID", "Software ID"],
            &[&["20", "10", "1.0"]],
        )
    }

    #[test]
    fn software_attributes_skip_id_and_keep_order() {
        let software = table(
            "software",
            &["Vendor", "ID", "Software Name", "Status"],
            &[&["Acme", "1", "Alpha", "Production"]],
        );
        let data = Dataset::from_tables(&software, &units(), &processes(), &links())
            .expect("typed");

        let sw = &data.software[0];
        assert_eq!(sw.id, EntityId::new("1"));
        assert_eq!(sw.name, "Alpha");
        let labels: Vec<&str> = sw.attributes.iter().map(|(h, _)| h.as_str()).collect();
        assert_eq!(labels, vec!["Vendor", "Software Name", "Status"]);
        assert_eq!(data.links[0].software_id, EntityId::new("1"));
    }

    #[test]
    fn missing_status_column_is_reported() {
        let software = table("software", &["ID", "Software Name"], &[&["1", "Alpha"]]);
        let err = Dataset::from_tables(&software, &units(), &processes(), &links())
            .expect_err("no status");
        assert!(matches!(
            err,
            ProcmapError::MissingColumn { ref column, .. } if column == "Status"
        ));
    }

    #[test]
    fn load_dataset_reports_first_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = CsvPaths::in_dir(dir.path());
        std::fs::write(&paths.software, "ID,Software Name,Status\n").expect("write");

        let err = load_dataset(&paths).expect_err("units missing");
        assert!(matches!(err, ProcmapError::NotFound(ref p) if *p == paths.units));
    }

    #[test]
    fn load_dataset_reads_all_tables() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = CsvPaths::in_dir(dir.path());
        std::fs::write(&paths.software, "ID,Software Name,Status\n1,Alpha,production\n")
            .expect("write");
        std::fs::write(&paths.units, "ID,Organizational Unit Name\n10,Sales\n11,HR\n")
            .expect("write");
        std::fs::write(&paths.processes, "ID,Process Name\n20,Billing\n").expect("write");
        std::fs::write(
            &paths.links,
            "Process ID,Organizational Unit ID,Software ID\n20,11,1\n",
        )
        .expect("write");

        let data = load_dataset(&paths).expect("load");
        assert_eq!(data.software.len(), 1);
        let unit_names: Vec<&str> = data.units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(unit_names, vec!["Sales", "HR"]);
        assert_eq!(data.processes[0].name, "Billing");
        assert_eq!(data.links.len(), 1);
    }
}
