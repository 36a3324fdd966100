//! Benchmarks for the matching tiers and batch filtering.
//!
//! ```bash
//! cargo bench
//! cargo bench -- filter
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use fuzzywindow::{filter, matches, PreparedQuery, SearchSettings};

/// Deterministic corpus: every tenth line contains a near match
fn corpus(size: usize) -> Vec<String> {
    (0..size)
        .map(|i| {
            if i % 10 == 0 {
                format!("entry {:06}: the quick brown fax jumps", i)
            } else {
                format!("entry {:06}: lorem ipsum dolor sit amet", i)
            }
        })
        .collect()
}

fn bench_single(c: &mut Criterion) {
    let settings = SearchSettings::default();
    let text = "entry 000010: the quick brown fax jumps over the lazy dog";

    let mut group = c.benchmark_group("single_match");
    group.bench_function("exact_tier", |b| {
        b.iter(|| matches(black_box("fax"), black_box(text), &settings))
    });
    group.bench_function("fuzzy_tier", |b| {
        b.iter(|| matches(black_box("brown fox"), black_box(text), &settings))
    });
    group.bench_function("fuzzy_tier_prepared", |b| {
        let prepared = PreparedQuery::new("brown fox", &settings);
        b.iter(|| prepared.is_match(black_box(text)))
    });
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let settings = SearchSettings::default();
    let mut group = c.benchmark_group("filter");

    for size in [50usize, 1_000, 50_000] {
        let items = corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| filter(black_box("brown fox"), items, &settings).len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single, bench_filter);
criterion_main!(benches);
