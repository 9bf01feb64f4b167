//! Benchmarks for the DV01 batch, aggregation and VaR.
//!
//! Run with: cargo bench -p bondrisk-analytics

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bondrisk_analytics::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn cusip(id: usize) -> Cusip {
    Cusip::new(&format!("9128{id:05}")).unwrap()
}

fn references(bonds: usize) -> ReferenceTable {
    let maturities = [2027, 2028, 2029, 2030, 2031, 2033, 2035];
    (0..bonds)
        .map(|i| {
            BondReference::new(
                cusip(i),
                format!("Issuer {i}"),
                Date::from_ymd(maturities[i % maturities.len()], 6, 15).unwrap(),
                20.0 + (i % 7) as f64 * 5.0,
            )
        })
        .collect()
}

fn yields(bonds: usize, days: usize) -> Vec<YieldObservation> {
    let start = Date::from_ymd(2024, 1, 2).unwrap();
    let mut rows = Vec::with_capacity(bonds * days);
    for day in 0..days {
        for bond in 0..bonds {
            let wobble = ((day * 31 + bond * 17) % 40) as f64 / 10_000.0;
            rows.push(YieldObservation::new(
                cusip(bond),
                start.add_days(day as i64),
                0.03 + wobble,
            ));
        }
    }
    rows
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_single_dv01(c: &mut Criterion) {
    c.bench_function("calc_dv01", |b| {
        b.iter(|| calc_dv01(black_box(0.031), black_box(50.0), black_box(6), 0.01, 1000.0))
    });
}

fn bench_dv01_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dv01_batch");
    group.sample_size(30);

    let refs = references(20);
    for days in [50usize, 250, 1000] {
        let rows = yields(20, days);
        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_with_input(BenchmarkId::new("sequential", rows.len()), &rows, |b, rows| {
            b.iter(|| compute_dv01_series(rows, &refs, &RiskConfig::sequential()))
        });
        group.bench_with_input(BenchmarkId::new("parallel", rows.len()), &rows, |b, rows| {
            b.iter(|| compute_dv01_series(rows, &refs, &RiskConfig::default()))
        });
    }
    group.finish();
}

fn bench_portfolio_var(c: &mut Criterion) {
    let mut group = c.benchmark_group("portfolio_var");

    let weights = Weights::equal((0..20).map(cusip));
    for days in [250usize, 1000] {
        let rows = yields(20, days);
        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &rows, |b, rows| {
            b.iter(|| {
                let series = create_portfolio(rows, &weights).unwrap();
                VarComparison::from_series(&series, 0.95, &RiskConfig::default()).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_dv01, bench_dv01_batch, bench_portfolio_var);
criterion_main!(benches);
