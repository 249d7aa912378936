use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geoproc::{calculate_bounds_and_centroid, validate::validate_body, Point};

/// Deterministic spread of valid points across the globe.
fn make_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let i = i as f64;
            Point {
                lat: (i * 7.3) % 180.0 - 90.0,
                lng: (i * 13.1) % 360.0 - 180.0,
            }
        })
        .collect()
}

fn make_body(points: &[Point]) -> Vec<u8> {
    let items: Vec<serde_json::Value> = points
        .iter()
        .map(|p| serde_json::json!({ "lat": p.lat, "lng": p.lng }))
        .collect();
    serde_json::to_vec(&serde_json::json!({ "points": items })).unwrap()
}

fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");
    for &n in &[10, 1_000, 100_000] {
        let points = make_points(n);
        group.bench_function(format!("{}_points", n), |b| {
            b.iter(|| black_box(calculate_bounds_and_centroid(black_box(&points)).unwrap()));
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for &n in &[10, 1_000] {
        let body = make_body(&make_points(n));
        group.bench_function(format!("{}_points", n), |b| {
            b.iter(|| black_box(validate_body(black_box(&body)).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_calculate, bench_validate);
criterion_main!(benches);
