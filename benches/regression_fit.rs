/// Regression and inference benchmarks
///
/// Measures the least-squares fit and the full fit + inference pipeline over
/// ring counts from a classroom measurement (5) up to dense synthetic sets.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use newton_rings::regression::{fit, infer};
use newton_rings::synthetic::{add_noise, ideal_points};
use rand::rngs::StdRng;
use rand::SeedableRng;

const LAMBDA_MM: f64 = 589e-6;
const RING_COUNTS: [usize; 4] = [5, 20, 100, 500];

fn noisy_points(n: usize) -> Vec<newton_rings::regression::DataPoint> {
    let ideal = ideal_points(n, 200.0, LAMBDA_MM, 4.0);
    add_noise(&ideal, 2.0, &mut StdRng::seed_from_u64(42))
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for n in RING_COUNTS {
        let points = noisy_points(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| fit(black_box(points)).unwrap());
        });
    }

    group.finish();
}

fn bench_fit_and_infer(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_and_infer");

    for n in RING_COUNTS {
        let points = noisy_points(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| {
                let result = fit(black_box(points)).unwrap();
                infer(points, &result, LAMBDA_MM, 4.0, 0.95).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fit, bench_fit_and_infer);
criterion_main!(benches);
