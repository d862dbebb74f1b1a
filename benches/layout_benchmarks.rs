//! Layout engine benchmarks
//!
//! Run with: cargo bench --bench layout_benchmarks

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roadmap_timeline::layout::layout_timeline;
use roadmap_timeline::records::{ExperimentRecord, ReleaseRecord};
use roadmap_timeline::render::{html::render_html, svg::render_svg, SizeVariant};

const SIZES: [usize; 3] = [10, 100, 1_000];

fn synthetic(count: usize) -> (Vec<ExperimentRecord>, Vec<ReleaseRecord>) {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let experiments = (0..count)
        .map(|i| {
            let start = base + Duration::days((i * 7 % 180) as i64);
            let end = start + Duration::days((i % 21) as i64);
            ExperimentRecord::new(format!("e{i}"), format!("Experiment {i}"), start, end)
        })
        .collect();
    let releases = (0..count)
        .map(|i| {
            let date = base + Duration::days((i * 3 % 180) as i64);
            ReleaseRecord::new(format!("r{i}"), format!("Platform Backend {}.{}.0 rollout", i / 10, i % 10), date)
        })
        .collect();
    (experiments, releases)
}

/// Benchmark the pure layout pass
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_timeline");
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    for size in SIZES {
        let (experiments, releases) = synthetic(size);
        group.bench_with_input(BenchmarkId::new("greedy", size), &size, |b, _| {
            b.iter(|| layout_timeline(black_box(&experiments), black_box(&releases), start, now));
        });
    }

    group.finish();
}

/// Benchmark both adapters over the same layout
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let (experiments, releases) = synthetic(100);
    let layout = layout_timeline(&experiments, &releases, start, now);

    group.bench_function("svg", |b| b.iter(|| render_svg(black_box(&layout), SizeVariant::Default)));
    group.bench_function("html", |b| b.iter(|| render_html(black_box(&layout))));

    group.finish();
}

criterion_group!(benches, bench_layout, bench_render);
criterion_main!(benches);
