//! # Property-Based Tests
//!
//! Shape and mapping invariants of the link join, checked with proptest.

use procmap_core::{
    Dataset, EntityId, Link, OrgUnit, Process, Software, Status, build_support_matrix,
};
use proptest::collection::vec;
use proptest::prelude::*;

fn dataset(unit_count: usize, process_count: usize, links: &[(usize, usize)]) -> Dataset {
    Dataset {
        software: vec![Software {
            id: EntityId::new("1"),
            name: "Alpha".to_string(),
            status: "production".to_string(),
            attributes: vec![("Status".to_string(), "production".to_string())],
        }],
        units: (0..unit_count)
            .map(|i| OrgUnit {
                id: EntityId::new(&format!("U{i}")),
                name: format!("Unit {i}"),
            })
            .collect(),
        processes: (0..process_count)
            .map(|i| Process {
                id: EntityId::new(&format!("P{i}")),
                name: format!("Process {i}"),
            })
            .collect(),
        links: links
            .iter()
            .map(|(u, p)| Link {
                process_id: EntityId::new(&format!("P{p}")),
                unit_id: EntityId::new(&format!("U{u}")),
                software_id: EntityId::new("1"),
            })
            .collect(),
    }
}

/// Randomly upper- or lower-case each character of `label`.
fn recase(label: &str, mask: &[bool]) -> String {
    label
        .chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    /// Matrices are always units × processes, whatever the link count.
    #[test]
    fn matrix_shape_is_units_by_processes(
        unit_count in 1usize..12,
        process_count in 1usize..12,
        raw_links in vec((0usize..64, 0usize..64), 0..40),
    ) {
        let links: Vec<(usize, usize)> = raw_links
            .iter()
            .map(|(u, p)| (u % unit_count, p % process_count))
            .collect();
        let matrix = build_support_matrix(&dataset(unit_count, process_count, &links))
            .expect("all references resolve");

        prop_assert_eq!(matrix.shape(), (unit_count, process_count));
        prop_assert_eq!(matrix.z.len(), unit_count);
        prop_assert!(matrix.z.iter().all(|row| row.len() == process_count));
        prop_assert!(matrix.text.iter().all(|row| row.len() == process_count));
        prop_assert!(matrix.hover.iter().all(|row| row.len() == process_count));

        let filled = matrix.z.iter().flatten().filter(|z| z.is_some()).count();
        let mut distinct = links.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(filled, distinct.len());
    }

    /// Any casing of a known status maps to the same code.
    #[test]
    fn status_parse_is_case_insensitive(
        index in 0usize..4,
        mask in vec(any::<bool>(), 1..16),
    ) {
        let status = Status::ALL[index];
        let label = recase(&status.name().to_lowercase(), &mask);
        prop_assert_eq!(Status::parse(&label), Some(status));
    }

    /// Integral ids match regardless of a zero fraction.
    #[test]
    fn integral_ids_ignore_zero_fraction(id in 0u32..1_000_000, zeros in 1usize..4) {
        let padded = format!("{id}.{}", "0".repeat(zeros));
        prop_assert_eq!(EntityId::new(&padded), EntityId::new(&id.to_string()));
    }
}
