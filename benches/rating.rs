//! Benchmarks for projection and candidate rating.
//!
//! Run with: `cargo bench --bench rating`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lrp_rating::{
    GeoPoint, LocationReferencePoint, Polyline, RatingCandidate, RatingConfig,
    discrete_frechet_distance, rate_candidate, rate_candidates,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A jittered eastward line with the given number of points, ~70 m apart.
fn synthetic_line(rng: &mut StdRng, points: usize) -> Polyline {
    let coordinates = (0..points)
        .map(|i| {
            GeoPoint::new(
                5.0 + 0.001 * i as f64 + rng.gen_range(-1e-5..1e-5),
                52.0 + rng.gen_range(-1e-5..1e-5),
            )
        })
        .collect();
    Polyline::new(coordinates).expect("synthetic line is valid")
}

fn random_sequence(rng: &mut StdRng, points: usize) -> Vec<GeoPoint> {
    (0..points)
        .map(|_| GeoPoint::new(rng.gen_range(4.9..5.1), rng.gen_range(51.9..52.1)))
        .collect()
}

fn bench_frechet_distance(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("frechet_distance");

    for length in [2, 8, 32] {
        let a = random_sequence(&mut rng, length);
        let b = random_sequence(&mut rng, length);
        group.bench_with_input(
            BenchmarkId::new("sequences", format!("{}pts", length)),
            &(a, b),
            |bench, (a, b)| {
                bench.iter(|| discrete_frechet_distance(a, b));
            },
        );
    }

    group.finish();
}

fn bench_rate_candidate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let config = RatingConfig::default();
    let reference = LocationReferencePoint::new(5.0, 52.0, 90.0, false);

    let mut group = c.benchmark_group("rate_candidate");

    // Line length drives the along-line lookup cost.
    for points in [2, 16, 128] {
        let line = synthetic_line(&mut rng, points);
        let offset = line.length_m() / 2.0;
        group.bench_with_input(
            BenchmarkId::new("line", format!("{}pts", points)),
            &line,
            |bench, line| {
                bench.iter(|| rate_candidate(&config, 0.0, &reference, line, offset));
            },
        );
    }

    group.finish();
}

fn bench_rate_candidates(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let config = RatingConfig::default();
    let reference = LocationReferencePoint::new(5.0, 52.0, 90.0, false);
    let line = synthetic_line(&mut rng, 16);

    let mut group = c.benchmark_group("rate_candidates");

    for count in [10, 100, 1000] {
        let candidates: Vec<_> = (0..count)
            .map(|i| RatingCandidate {
                line: &line,
                distance_to_line_m: 0.0,
                projection_offset_m: (i % 64) as f64,
            })
            .collect();
        group.bench_with_input(
            BenchmarkId::new("batch", count),
            &candidates,
            |bench, candidates| {
                bench.iter(|| rate_candidates(&config, &reference, candidates));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_frechet_distance,
    bench_rate_candidate,
    bench_rate_candidates
);
criterion_main!(benches);
