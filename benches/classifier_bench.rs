//! Benchmarks for risk classification
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use nexhale::health::*;

fn create_readings(count: usize) -> Vec<ExposureReading> {
    (0..count)
        .map(|i| ExposureReading::new((i * 37 % 9000) as f64, (i * 11 % 800) as f64))
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("single_smoking", |b| {
        let reading = ExposureReading::new(5000.0, 100.0);
        b.iter(|| classify(black_box(&SMOKING_TIERS), black_box(&reading)).tier)
    });

    for size in [100, 10000] {
        let readings = create_readings(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("vape_batch_{}", size), |b| {
            b.iter(|| {
                readings
                    .iter()
                    .map(|r| tier_index(&VAPE_TIERS, black_box(r)))
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    c.bench_function("assess_report", |b| {
        let reading = ExposureReading::new(3200.0, 420.0);
        b.iter(|| HealthReport::assess(ProductLine::Smoking, black_box(reading)))
    });
}

fn bench_validate_tables(c: &mut Criterion) {
    c.bench_function("validate_tables", |b| {
        b.iter(|| {
            SMOKING_TIERS.validate().is_ok() && black_box(&VAPE_TIERS).validate().is_ok()
        })
    });
}

criterion_group!(benches, bench_classify, bench_report, bench_validate_tables);
criterion_main!(benches);
