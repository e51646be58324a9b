//! Benchmark for pricelens indicator throughput.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricelens::indicators::momentum::rsi;
use pricelens::indicators::trend::sma;
use pricelens::{IndicatorConfig, IndicatorEngine, PriceBar, PriceSeries};

/// Generate sample daily bars.
fn generate_sample_data(n: usize) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
    let mut close = 100.0;

    let bars = start
        .iter_days()
        .take(n)
        .enumerate()
        .map(|(i, date)| {
            let open = close;
            close += (i as f64 * 0.1).sin() * 2.0;
            PriceBar {
                date,
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1_000_000.0,
            }
        })
        .collect();

    PriceSeries::from_bars(bars).unwrap()
}

fn bench_compute_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_all");

    for size in [250, 1000, 5000].iter() {
        let series = generate_sample_data(*size);

        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            let engine = IndicatorEngine::default();
            b.iter(|| black_box(engine.compute(black_box(&series), Some(6.0))))
        });

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            let engine = IndicatorEngine::new(IndicatorConfig::sequential()).unwrap();
            b.iter(|| black_box(engine.compute(black_box(&series), Some(6.0))))
        });
    }

    group.finish();
}

fn bench_sma(c: &mut Criterion) {
    let mut group = c.benchmark_group("sma");

    for size in [1000, 5000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("data_size", size), size, |b, &size| {
            let series = generate_sample_data(size);

            b.iter(|| {
                let result = sma(black_box(series.close()), black_box(50));
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsi");

    for size in [1000, 5000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("data_size", size), size, |b, &size| {
            let series = generate_sample_data(size);

            b.iter(|| {
                let result = rsi(black_box(series.close()), black_box(20));
                black_box(result)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_all, bench_sma, bench_rsi);
criterion_main!(benches);
