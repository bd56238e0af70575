//! Criterion benchmarks for the trazo-analysis core
//!
//! Run with: cargo bench -p trazo-analysis

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use trazo_analysis::{
    FrameSequence, Table, aggregate, aggregate_bounded, estimate_spectrum, select_nearest,
};

/// Build a swept table with one trial column per parameter value.
fn swept_table(trials: usize, bins: usize) -> Table {
    let labels = std::iter::once("freq".to_string())
        .chain((0..trials).map(|i| format!("{}", i as f64 / trials as f64)))
        .collect();
    let columns = std::iter::once((0..bins).map(|i| i as f64 / bins as f64).collect())
        .chain((0..trials).map(|t| {
            (0..bins)
                .map(|i| ((t * 31 + i * 7) % 97) as f64 / 97.0)
                .collect()
        }))
        .collect();
    Table::new(labels, columns).unwrap()
}

fn bench_select_nearest(c: &mut Criterion) {
    let table = swept_table(257, 128);
    let targets = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
    c.bench_function("select_nearest_257_columns", |b| {
        b.iter(|| select_nearest(black_box(&table), black_box(&targets)).unwrap());
    });
}

fn bench_estimate_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_spectrum");
    for len in [16usize, 64, 256] {
        let samples: Vec<f64> = (0..len).map(|i| (i as f64 * 0.37).sin()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &samples, |b, samples| {
            b.iter(|| estimate_spectrum(black_box(samples), 64).unwrap());
        });
    }
    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let table = swept_table(64, 1024);
    c.bench_function("aggregate_64x1024", |b| {
        b.iter(|| aggregate(black_box(&table)));
    });
    c.bench_function("aggregate_bounded_64x1024", |b| {
        b.iter(|| aggregate_bounded(black_box(&table), 0.05));
    });
}

fn bench_frame_schedule(c: &mut Criterion) {
    c.bench_function("frame_sequence_1024_columns", |b| {
        b.iter(|| {
            let sequence = FrameSequence::new(black_box(1024), true, 1);
            sequence.source_indices().sum::<usize>()
        });
    });
}

criterion_group!(
    benches,
    bench_select_nearest,
    bench_estimate_spectrum,
    bench_aggregate,
    bench_frame_schedule
);
criterion_main!(benches);
