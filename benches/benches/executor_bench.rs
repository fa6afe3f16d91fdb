//! # Executor Benchmarks
//!
//! Measures sequence evaluation: short human-sized sequences, sparse
//! sequences, and the override lookup path.
//!
//! Run: `cargo bench --bench executor_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use osl_core::operator::OperatorId;
use osl_engine::Engine;

fn seq(ids: &[&str]) -> Vec<Option<OperatorId>> {
    ids.iter()
        .map(|&id| if id == "-" { None } else { Some(OperatorId::from(id)) })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let engine = Engine::reference();
    let mut group = c.benchmark_group("evaluate");

    let sequences = [
        ("pair", seq(&["O4", "O2"])),
        ("golden_five", seq(&["O1", "O2", "O3", "O4", "O5"])),
        ("sparse", seq(&["O1", "-", "-", "O4", "-", "O2"])),
        ("full_catalog", seq(&["O1", "O2", "O3", "O4", "O5", "O6", "O7", "O8"])),
    ];

    for (name, sequence) in &sequences {
        group.bench_with_input(BenchmarkId::from_parameter(name), sequence, |b, sequence| {
            b.iter(|| black_box(engine.evaluate(black_box(sequence)).unwrap()))
        });
    }

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let engine = Engine::reference();
    let result = engine
        .evaluate(&seq(&["O1", "O2", "O3", "O4", "O5"]))
        .unwrap();

    c.bench_function("result_to_json_pretty", |b| {
        b.iter(|| black_box(result.to_json_pretty().unwrap()))
    });
}

criterion_group!(benches, bench_evaluate, bench_serialization);
criterion_main!(benches);
