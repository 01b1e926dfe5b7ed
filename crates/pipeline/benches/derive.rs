//! Benchmarks for the core pipeline
//!
//! Run with: cargo bench --package pipeline

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{RawRecord, build_features, derive};

fn bench_build_features(c: &mut Criterion) {
    let record = RawRecord::from_dimensions([10.0, 8.5, 4.0], [12.0, 12.0, 6.0], "sunny");

    c.bench_function("build_features", |b| {
        b.iter(|| {
            let features = build_features(black_box(&record));
            black_box(features.as_array())
        })
    });
}

fn bench_derive(c: &mut Criterion) {
    let record = RawRecord::from_dimensions([10.0, 8.5, 4.0], [12.0, 12.0, 6.0], "humid");

    c.bench_function("derive_recommendation", |b| {
        b.iter(|| {
            let rec = derive(black_box(&record), black_box("Medium"), black_box(0.37));
            black_box(rec)
        })
    });
}

criterion_group!(benches, bench_build_features, bench_derive);
criterion_main!(benches);
