//! Benchmark: Myers search and full diff on synthetic documents.
//!
//! Compares near-identical documents (small D) with fully rewritten ones
//! (D = N + M) at a few sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linediff_engine::{diff, shortest_edit_by};
use linediff_types::{lines_from, Line};

// ── Helpers ──

fn document(n: usize, prefix: &str) -> Vec<Line> {
    lines_from((0..n).map(|i| format!("{prefix} {i}\n")))
}

/// Copy of `base` with every `every`-th line rewritten.
fn edited(base: &[Line], every: usize) -> Vec<Line> {
    lines_from(base.iter().enumerate().map(|(i, line)| {
        if i % every == 0 {
            format!("edited {i}\n")
        } else {
            line.text.clone()
        }
    }))
}

// ── Benchmarks ──

fn bench_similar_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("similar_documents");
    for n in [100usize, 1_000, 5_000] {
        let old = document(n, "line");
        let new = edited(&old, 50);
        group.bench_with_input(BenchmarkId::new("shortest_edit", n), &n, |b, _| {
            b.iter(|| shortest_edit_by(black_box(&old), black_box(&new), Line::same_text))
        });
        group.bench_with_input(BenchmarkId::new("diff", n), &n, |b, _| {
            b.iter(|| diff(black_box(&old), black_box(&new)))
        });
    }
    group.finish();
}

fn bench_dissimilar_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("dissimilar_documents");
    for n in [50usize, 200] {
        let old = document(n, "old");
        let new = document(n, "new");
        group.bench_with_input(BenchmarkId::new("diff", n), &n, |b, _| {
            b.iter(|| diff(black_box(&old), black_box(&new)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_similar_documents, bench_dissimilar_documents);
criterion_main!(benches);
