use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crontell::{Cron, ScanOptions};

fn validate_benchmark(c: &mut Criterion) {
    let cron = Cron::new("15 9-17 * 1-5 1-5");
    c.bench_function("validate", |b| {
        b.iter(|| black_box(&cron).validate());
    });
}

fn describe_benchmark(c: &mut Criterion) {
    let cron = Cron::new("*/15 9-17 1,15 * 1-5");
    c.bench_function("describe", |b| {
        b.iter(|| black_box(&cron).describe().unwrap());
    });
}

fn next_runs_benchmark(c: &mut Criterion) {
    let cron = Cron::new("*/5 * * * *");
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let options = ScanOptions::builder().count(100).build();

    c.bench_function("next_100_runs", |b| {
        b.iter(|| {
            black_box(&cron)
                .next_runs_from(black_box(start), options)
                .unwrap()
        });
    });
}

fn sparse_scan_benchmark(c: &mut Criterion) {
    // One match per month keeps the scan long without exhausting the budget.
    let cron = Cron::new("0 0 1 * *");
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let options = ScanOptions::builder().count(3).build();

    c.bench_function("sparse_scan", |b| {
        b.iter(|| {
            black_box(&cron)
                .next_runs_from(black_box(start), options)
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    validate_benchmark,
    describe_benchmark,
    next_runs_benchmark,
    sparse_scan_benchmark
);
criterion_main!(benches);
