//! Performance benchmarks for the surcharge engine.
//!
//! - Single event, weekday evening
//! - Single event, Saturday with overriding hourly windows
//! - Batch of 1000 events over a month
//! - Scaling with event length
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use surcharge_engine::calculation::compute_event_surcharges;
use surcharge_engine::config::ConfigLoader;
use surcharge_engine::holidays::FrenchPublicHolidays;
use surcharge_engine::models::{Event, HourlyWindow, RatePlan, TimeOfDay};

fn make_datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Creates a loader with the sample configuration.
fn create_test_loader() -> ConfigLoader {
    ConfigLoader::load("./config/default").expect("Failed to load config")
}

/// A plan where both hourly windows beat the weekend rate.
fn create_overriding_plan() -> RatePlan {
    RatePlan {
        saturday: Some(Decimal::new(25, 0)),
        sunday: Some(Decimal::new(50, 0)),
        evening: Some(HourlyWindow {
            percentage: Some(Decimal::new(60, 0)),
            start: TimeOfDay::new(20, 0).unwrap(),
            end: TimeOfDay::new(7, 0).unwrap(),
        }),
        custom: Some(HourlyWindow {
            percentage: Some(Decimal::new(40, 0)),
            start: TimeOfDay::new(12, 0).unwrap(),
            end: TimeOfDay::new(14, 0).unwrap(),
        }),
        ..RatePlan::default()
    }
}

/// Benchmark: single weekday event through the loaded configuration.
fn bench_single_event(c: &mut Criterion) {
    let loader = create_test_loader();
    let event = Event::new(
        make_datetime("2022-06-01 17:00:00"),
        make_datetime("2022-06-01 23:00:00"),
    )
    .unwrap();

    c.bench_function("single_event", |b| {
        b.iter(|| black_box(loader.compute_event_surcharges(black_box(&event)).unwrap()))
    });
}

/// Benchmark: Saturday event split by two winning windows.
fn bench_split_event(c: &mut Criterion) {
    let plan = create_overriding_plan();
    let event = Event::new(
        make_datetime("2022-06-04 05:00:00"),
        make_datetime("2022-06-04 23:00:00"),
    )
    .unwrap();

    c.bench_function("split_event", |b| {
        b.iter(|| {
            black_box(
                compute_event_surcharges(black_box(&event), &plan, &FrenchPublicHolidays).unwrap(),
            )
        })
    });
}

/// Benchmark: 1000 events spread over a month.
fn bench_batch_1000(c: &mut Criterion) {
    let plan = create_overriding_plan();
    let first = make_datetime("2022-05-01 06:00:00");
    let events: Vec<Event> = (0..1000)
        .map(|i| {
            let start = first + Duration::minutes(i * 43);
            Event::new(start, start + Duration::hours(4)).unwrap()
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            let results: Vec<_> = events
                .iter()
                .map(|event| {
                    compute_event_surcharges(event, &plan, &FrenchPublicHolidays).unwrap()
                })
                .collect();
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: various event lengths to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let plan = create_overriding_plan();
    let start = make_datetime("2022-06-04 00:00:00");

    let mut group = c.benchmark_group("scaling");

    for hours in [1i64, 4, 8, 16, 24].iter() {
        let event = Event::new(start, start + Duration::hours(*hours)).unwrap();

        group.bench_with_input(BenchmarkId::new("hours", hours), hours, |b, _| {
            b.iter(|| {
                black_box(compute_event_surcharges(&event, &plan, &FrenchPublicHolidays).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_event,
    bench_split_event,
    bench_batch_1000,
    bench_scaling,
);
criterion_main!(benches);
