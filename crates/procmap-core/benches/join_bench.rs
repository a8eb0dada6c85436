//! # Join Benchmarks
//!
//! Performance benchmarks for the link join and HTML rendering.
//!
//! Run with: `cargo bench -p procmap-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use procmap_core::{
    Dataset, EntityId, Link, OrgUnit, Process, RenderOptions, Software, build_support_matrix,
    render_html,
};
use std::hint::black_box;

const STATUSES: [&str; 4] = ["development", "production", "maintenance", "decommissioned"];

/// A square dataset with one link per cell and `size` software entries.
fn create_dense_dataset(size: usize) -> Dataset {
    let software = (0..size)
        .map(|i| {
            let status = STATUSES[i % STATUSES.len()];
            Software {
                id: EntityId::new(&i.to_string()),
                name: format!("SW {i}"),
                status: status.to_string(),
                attributes: vec![
                    ("Software Name".to_string(), format!("SW {i}")),
                    ("Status".to_string(), status.to_string()),
                ],
            }
        })
        .collect();

    let mut links = Vec::with_capacity(size * size);
    for u in 0..size {
        for p in 0..size {
            links.push(Link {
                process_id: EntityId::new(&p.to_string()),
                unit_id: EntityId::new(&u.to_string()),
                software_id: EntityId::new(&((u + p) % size).to_string()),
            });
        }
    }

    Dataset {
        software,
        units: (0..size)
            .map(|i| OrgUnit {
                id: EntityId::new(&i.to_string()),
                name: format!("Unit {i}"),
            })
            .collect(),
        processes: (0..size)
            .map(|i| Process {
                id: EntityId::new(&i.to_string()),
                name: format!("Process {i}"),
            })
            .collect(),
        links,
    }
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");

    for size in [10, 50, 200].iter() {
        let data = create_dense_dataset(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(build_support_matrix(data)));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let options = RenderOptions::default();

    for size in [10, 50, 200].iter() {
        let Ok(matrix) = build_support_matrix(&create_dense_dataset(*size)) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(size), &matrix, |b, matrix| {
            b.iter(|| black_box(render_html(matrix, &options)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_join, bench_render);
criterion_main!(benches);
