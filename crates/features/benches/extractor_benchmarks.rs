//! Benchmarks for railcast-features extraction.
#![allow(missing_docs)]

use chrono::Days;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;
use railcast_features::{HistoryFeatureExtractor, HistoryIndex};
use railcast_primitives::{Date, DispositionRecord, RepairRecord, WagonId};
use railcast_traits::FeatureExtractor;

fn start() -> Date {
    Date::from_ymd_opt(2018, 1, 1).unwrap()
}

fn random_history(wagon: WagonId, n_events: usize) -> (Vec<DispositionRecord>, Vec<RepairRecord>) {
    let mut rng = rand::thread_rng();
    let mut date = start();
    let mut ost_prob = 160_000.0;

    let mut dispositions = Vec::with_capacity(n_events);
    let mut repairs = Vec::new();
    for _ in 0..n_events {
        date = date + Days::new(rng.gen_range(1..10));
        ost_prob -= rng.gen_range(-50.0..400.0);
        dispositions.push(
            DispositionRecord::new(wagon, date)
                .with_repair_dates(Some(start()), Some(start()), Some(date + Days::new(365)))
                .with_ost_prob(ost_prob)
                .with_isload(rng.gen_range(0..2))
                .with_fr_id(rng.gen_range(0..20)),
        );
        if rng.gen_bool(0.02) {
            repairs.push(RepairRecord::new(wagon, date));
            ost_prob = 160_000.0;
        }
    }
    (dispositions, repairs)
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let extractor = HistoryFeatureExtractor::new();
    let target = Date::from_ymd_opt(2023, 1, 1).unwrap();

    for size in [10, 100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let (dispositions, repairs) = random_history(WagonId::new(1), size);
            b.iter(|| {
                extractor.extract(black_box(target), black_box(&dispositions), black_box(&repairs))
            });
        });
    }

    group.finish();
}

fn bench_history_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_index");

    for n_wagons in [10, 100, 1000] {
        group.throughput(Throughput::Elements(n_wagons as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_wagons), &n_wagons, |b, &n| {
            let mut dispositions = Vec::new();
            let mut repairs = Vec::new();
            for id in 0..n {
                let (d, r) = random_history(WagonId::new(id as i64), 200);
                dispositions.extend(d);
                repairs.extend(r);
            }
            b.iter(|| HistoryIndex::build(black_box(dispositions.clone()), black_box(repairs.clone())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract, bench_history_index);
criterion_main!(benches);
