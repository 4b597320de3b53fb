use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use metrics_core::build_daily_series;

fn gen_records(n: usize, now: DateTime<Utc>) -> Vec<(Option<DateTime<Utc>>, f64)> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // spread across ~60 days so a chunk falls outside every window
        let back = (i * 7919) % 60;
        let ts = now - Duration::days(back as i64) - Duration::minutes((i % 1440) as i64);
        v.push((Some(ts), (i % 50) as f64 * 0.5));
    }
    v
}

fn bench_build(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).expect("valid instant");
    let mut group = c.benchmark_group("build_daily_series");
    for &n in &[10_000usize, 100_000usize] {
        let records = gen_records(n, now);
        for &days in &[7usize, 30usize] {
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("n{n}_d{days}")),
                &days,
                |b, &d| {
                    b.iter(|| {
                        let series =
                            build_daily_series(&records, |r| r.0, |r| r.1, d, now);
                        black_box(series)
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
