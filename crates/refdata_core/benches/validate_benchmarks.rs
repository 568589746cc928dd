//! Criterion benchmarks for the validation kernel.
//!
//! Benchmarks cover:
//! - Daily view construction over growing mapping tables
//! - Record validation over growing daily files

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use refdata_core::mapping::ReferenceMapper;
use refdata_core::types::{MappingEntry, Record, SecId, TradeDate};
use refdata_core::validate::validate_records;

/// Generate a synthetic mapping table with one wide-window entry per ticker.
fn generate_table(n_tickers: usize) -> ReferenceMapper {
    ReferenceMapper::new(
        (0..n_tickers)
            .map(|n| MappingEntry {
                ticker: format!("TICK{n:05}"),
                sec_id: SecId::new(n as i64),
                start_date: TradeDate::from_ymd(2020, 1, 1).unwrap(),
                end_date: TradeDate::from_ymd(2020, 12, 31).unwrap(),
            })
            .collect(),
    )
}

/// Generate one day of records; roughly one row in eight disagrees with the
/// table and one in eight references an unmapped ticker.
fn generate_records(n_rows: usize, n_tickers: usize) -> Vec<Record> {
    let day = TradeDate::from_ymd(2020, 6, 1).unwrap();
    (0..n_rows)
        .map(|i| {
            let ticker_idx = i % (n_tickers + n_tickers / 8 + 1);
            let declared = if i % 8 == 3 {
                SecId::new(-1)
            } else {
                SecId::new(ticker_idx as i64)
            };
            Record::new(format!("TICK{ticker_idx:05}"), declared, day)
        })
        .collect()
}

/// Benchmark building the per-day ticker view.
fn bench_active_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("active_mapping");
    let day = TradeDate::from_ymd(2020, 6, 1).unwrap();

    for n_tickers in [100, 1_000, 10_000] {
        let table = generate_table(n_tickers);
        group.bench_with_input(
            BenchmarkId::new("tickers", n_tickers),
            &table,
            |b, table| {
                b.iter(|| table.active_mapping(black_box(day)));
            },
        );
    }

    group.finish();
}

/// Benchmark validating a single daily file.
fn bench_validate_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_records");
    let day = TradeDate::from_ymd(2020, 6, 1).unwrap();

    for n_rows in [1_000, 10_000, 100_000] {
        let table = generate_table(2_000);
        let daily = table.active_mapping(day);
        let records = generate_records(n_rows, 2_000);

        group.bench_with_input(BenchmarkId::new("rows", n_rows), &records, |b, records| {
            b.iter(|| validate_records(black_box(&daily), black_box(records)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_active_mapping, bench_validate_records);
criterion_main!(benches);
