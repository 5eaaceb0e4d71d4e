//! Page construction benchmarks.
//!
//! Compares the single-pass iterator path against the count-then-window
//! path over a materialized vector.
//!
//! Run with: cargo bench -p pagesample-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesample_core::PaginatedList;

fn bench_page_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_construction");

    for total in [100usize, 10_000, 1_000_000] {
        let source: Vec<u64> = (0..total as u64).collect();

        group.bench_with_input(BenchmarkId::new("single_pass", total), &source, |b, source| {
            b.iter(|| {
                let page = PaginatedList::new(source.iter().copied(), black_box(3), black_box(25));
                black_box(page)
            });
        });

        group.bench_with_input(BenchmarkId::new("count_then_window", total), &source, |b, source| {
            b.iter(|| {
                let page = PaginatedList::from_source(source, black_box(3), black_box(25));
                black_box(page)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_page_construction);
criterion_main!(benches);
