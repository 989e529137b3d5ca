//! Criterion micro-benchmarks for the overflow fit solver.
//!
//! Resize storms re-run the solver once per report, so the per-call cost
//! across realistic row lengths is the number that matters.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rnav_layout::fit;

fn row(len: usize) -> Vec<u16> {
    // Mixed widths, deterministic: 8..=22 cells per item.
    (0..len).map(|i| 8 + ((i * 7) % 15) as u16).collect()
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");
    for len in [4usize, 16, 64, 256] {
        let widths = row(len);
        group.bench_with_input(BenchmarkId::new("overflowing", len), &widths, |b, widths| {
            // Half the row fits: forces the two-phase path.
            let container = Some((widths.iter().map(|&w| u32::from(w)).sum::<u32>() / 2) as u16);
            b.iter(|| fit(black_box(container), black_box(widths), black_box(12)));
        });
        group.bench_with_input(BenchmarkId::new("full_fit", len), &widths, |b, widths| {
            b.iter(|| fit(black_box(Some(u16::MAX)), black_box(widths), black_box(12)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fit);
criterion_main!(benches);
