//! # Grapher Benchmarks
//!
//! Measures pairwise graph construction: curated fingerprint hit vs.
//! the generic O(n²) rule.
//!
//! Run: `cargo bench --bench graph_bench`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use osl_clause::ClauseEngine;
use osl_core::clause::ClauseId;

fn ids(list: &[&str]) -> Vec<ClauseId> {
    list.iter().map(|&id| ClauseId::from(id)).collect()
}

fn bench_analyze(c: &mut Criterion) {
    let engine = ClauseEngine::reference();
    let mut group = c.benchmark_group("analyze");

    let curated = ids(&["C1", "C2", "C4"]);
    group.bench_function("curated_hit", |b| {
        b.iter(|| black_box(engine.analyze(black_box(&curated)).unwrap()))
    });

    let generic = ids(&["C2", "C1", "C4", "C6", "C5"]);
    group.bench_function("generic_pairwise", |b| {
        b.iter(|| black_box(engine.analyze(black_box(&generic)).unwrap()))
    });

    let full = ids(&["C1", "C2", "C3", "C4", "C5", "C6", "C7"]);
    group.bench_function("full_catalog", |b| {
        b.iter(|| black_box(engine.analyze(black_box(&full)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
