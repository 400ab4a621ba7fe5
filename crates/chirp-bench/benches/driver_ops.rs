//! Criterion micro-benchmarks for the conversion driver and the
//! redshift inversion.

use chirp_bench::{map_profile, table_profile};
use chirp_relations::cosmology;
use chirp_transforms::add_base_parameters;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark: full registry over a 1K-row array-mode table.
fn bench_driver_table_1k(c: &mut Criterion) {
    let table = table_profile(1_000);

    c.bench_function("driver_table_1k", |b| {
        b.iter(|| {
            let record = Box::new(table.clone());
            let out = add_base_parameters(black_box(record)).unwrap();
            black_box(&out);
        });
    });
}

/// Benchmark: full registry over a 1K-sample mapping-mode record.
fn bench_driver_map_1k(c: &mut Criterion) {
    let map = map_profile(1_000);

    c.bench_function("driver_map_1k", |b| {
        b.iter(|| {
            let record = Box::new(map.clone());
            let out = add_base_parameters(black_box(record)).unwrap();
            black_box(&out);
        });
    });
}

/// Benchmark: the bisection redshift inversion in isolation, over a
/// spread of luminosity distances.
fn bench_redshift_inversion(c: &mut Criterion) {
    let distances: Vec<f64> = (1..=100).map(|i| i as f64 * 40.0).collect();

    c.bench_function("redshift_inversion_100", |b| {
        b.iter(|| {
            for &d in &distances {
                black_box(cosmology::redshift(black_box(d)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_driver_table_1k,
    bench_driver_map_1k,
    bench_redshift_inversion
);
criterion_main!(benches);
