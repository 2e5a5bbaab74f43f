//! Benchmark for the nested-loop list diff
//!
//! Cost grows with before × after × extractors, so this tracks how quickly
//! "small" stops being small.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use keydiff::{diff, DiffConfig};

#[derive(Clone)]
struct Row {
    id: u64,
    name: String,
}

/// `count` rows; every third id is shifted so all three partitions are non-empty
fn create_rows(count: u64, shift: u64) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let id = if i % 3 == 0 { i + shift } else { i };
            Row {
                id,
                name: format!("row{}-{}", i, shift),
            }
        })
        .collect()
}

fn bench_diff_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_sizes");

    for size in [10u64, 100, 1_000].iter() {
        let before = create_rows(*size, 0);
        let after = create_rows(*size, *size);
        let config = DiffConfig::new()
            .add_key(|r: &Row| r.id)
            .add_value(|r: &Row| r.name.clone())
            .enable_all();

        group.bench_with_input(
            BenchmarkId::new("all_partitions", size),
            &(&before, &after),
            |b, (before, after)| {
                b.iter(|| {
                    diff(
                        std::hint::black_box(before.as_slice()),
                        std::hint::black_box(after.as_slice()),
                        &config,
                    )
                })
            },
        );
    }

    group.finish();
}

fn bench_update_only(c: &mut Criterion) {
    let before = create_rows(1_000, 0);
    let after = create_rows(1_000, 1_000);
    let config = DiffConfig::new()
        .add_key(|r: &Row| r.id)
        .add_value(|r: &Row| r.name.clone());

    c.bench_function("update_only_1000", |b| {
        b.iter(|| {
            diff(
                std::hint::black_box(&before),
                std::hint::black_box(&after),
                &config,
            )
        })
    });
}

criterion_group!(benches, bench_diff_sizes, bench_update_only);
criterion_main!(benches);
