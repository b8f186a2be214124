//! Benchmarks for polyline simplification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rdp2::{simplify, Point2, Point3, Polyline, Simplifier};

/// Generates a noisy sine wave polyline.
fn generate_sine_wave(num_points: usize) -> Vec<Point2<f64>> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64 * 4.0 * std::f64::consts::PI;
            let noise = ((i * 17) % 100) as f64 / 1000.0; // Deterministic "noise"
            Point2::new(t, t.sin() + noise)
        })
        .collect()
}

/// Generates a random walk polyline.
fn generate_random_walk(num_points: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(num_points);
    let mut x = 0.0;
    let mut y = 0.0;
    let mut state = seed;

    for _ in 0..num_points {
        points.push(Point2::new(x, y));

        // Simple xorshift for deterministic "random" steps
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;

        let angle = (state as f64 / u64::MAX as f64) * 2.0 * std::f64::consts::PI;
        x += angle.cos() * 0.1;
        y += angle.sin() * 0.1;
    }

    points
}

/// Generates a helix, to exercise the N-dimensional distance path.
fn generate_helix(num_points: usize) -> Vec<Point3<f64>> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 * 0.01;
            Point3::new(t.cos(), t.sin(), t * 0.1)
        })
        .collect()
}

fn bench_rdp(c: &mut Criterion) {
    let mut group = c.benchmark_group("rdp");

    for size in [100, 1000, 10000, 50000] {
        let points = generate_sine_wave(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sine_wave", size), &points, |b, pts| {
            b.iter(|| simplify(black_box(pts), black_box(0.01)))
        });
    }

    for size in [1000, 10000] {
        let points = generate_random_walk(size, 12345);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("random_walk", size), &points, |b, pts| {
            b.iter(|| simplify(black_box(pts), black_box(0.01)))
        });
    }

    for size in [1000, 10000] {
        let points = generate_helix(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("helix_3d", size), &points, |b, pts| {
            b.iter(|| simplify(black_box(pts), black_box(0.001)))
        });
    }

    group.finish();
}

fn bench_prevalidated(c: &mut Criterion) {
    let mut group = c.benchmark_group("rdp_prevalidated");

    let size = 50000;
    let points = generate_random_walk(size, 6789);
    let line = match Polyline::from_points(&points) {
        Ok(line) => line,
        Err(err) => panic!("benchmark input rejected: {err}"),
    };
    group.throughput(Throughput::Elements(size as u64));

    // Validation and copying are paid once, outside the loop.
    let simplifier = Simplifier::default();
    group.bench_function("mask_polyline", |b| {
        b.iter(|| simplifier.mask_polyline(black_box(&line)))
    });

    group.bench_function("slice", |b| {
        b.iter(|| simplifier.mask(black_box(&points)))
    });

    group.finish();
}

criterion_group!(benches, bench_rdp, bench_prevalidated);
criterion_main!(benches);
