//! Benchmarks for indicator implementations.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use feeder_core::traits::Indicator;
use feeder_core::types::{Bar, PriceTable};
use feeder_indicators::{Adx, Ema, Macd, Rsi, Wad};

fn generate_table(size: usize) -> PriceTable {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let bars = (0..size)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Bar::new(
                start + chrono::Days::new(i as u64),
                close,
                close + 1.0,
                close - 1.0,
                close,
                1000.0 + (i % 97) as f64,
            )
        })
        .collect();
    PriceTable::new(bars).unwrap()
}

fn benchmark_ema(c: &mut Criterion) {
    let mut group = c.benchmark_group("EMA");
    for size in [1000, 10000, 100000].iter() {
        let table = generate_table(*size);
        group.bench_with_input(BenchmarkId::new("window_50", size), &table, |b, table| {
            let ema = Ema::new(50, false).unwrap();
            b.iter(|| ema.compute(black_box(table)))
        });
    }
    group.finish();
}

fn benchmark_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSI");
    for size in [1000, 10000, 100000].iter() {
        let table = generate_table(*size);
        group.bench_with_input(BenchmarkId::new("window_14", size), &table, |b, table| {
            let rsi = Rsi::new(14, false).unwrap();
            b.iter(|| rsi.compute(black_box(table)))
        });
    }
    group.finish();
}

fn benchmark_macd(c: &mut Criterion) {
    let mut group = c.benchmark_group("MACD");
    for size in [1000, 10000, 100000].iter() {
        let table = generate_table(*size);
        group.bench_with_input(BenchmarkId::new("12_26_9", size), &table, |b, table| {
            let macd = Macd::new(12, 26, 9, false).unwrap();
            b.iter(|| macd.compute(black_box(table)))
        });
    }
    group.finish();
}

fn benchmark_sequential_recurrences(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");
    for size in [1000, 10000, 100000].iter() {
        let table = generate_table(*size);
        group.bench_with_input(BenchmarkId::new("ADX_14", size), &table, |b, table| {
            let adx = Adx::new(14, false).unwrap();
            b.iter(|| adx.compute(black_box(table)))
        });
        group.bench_with_input(BenchmarkId::new("WAD_10", size), &table, |b, table| {
            let wad = Wad::new(10, false).unwrap();
            b.iter(|| wad.compute(black_box(table)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_ema,
    benchmark_rsi,
    benchmark_macd,
    benchmark_sequential_recurrences
);
criterion_main!(benches);
