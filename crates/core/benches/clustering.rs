use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hotspot::{ClusteringEngine, Config, GridBounds, MemoryBackend, SourcePoint, run_pass};

/// Points on a jittered lattice: every 8th point is placed next to its
/// predecessor so some clusters form.
fn lattice(n: usize) -> Vec<(String, SourcePoint)> {
    let bounds = GridBounds::default();
    let side = (n as f64).sqrt().ceil() as usize;
    let lat_step = (bounds.lat_top - bounds.lat_bottom) / (side + 1) as f64;
    let lon_step = (bounds.lon_right - bounds.lon_left) / (side + 1) as f64;

    let mut points = Vec::with_capacity(n);
    let mut last = (bounds.lat_bottom, bounds.lon_left);
    for i in 0..n {
        let (lat, lon) = if i % 8 == 0 && i > 0 {
            (last.0 + 1e-5, last.1)
        } else {
            (
                bounds.lat_bottom + lat_step * (1 + i / side) as f64,
                bounds.lon_left + lon_step * (1 + i % side) as f64,
            )
        };
        last = (lat, lon);
        points.push((format!("user{}", i), SourcePoint::new(lat, lon)));
    }
    points
}

fn benchmark_bucketing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bucketing");

    for size in [1_000, 10_000] {
        let points = lattice(size);
        group.bench_with_input(BenchmarkId::new("ingest_all", size), &points, |b, points| {
            b.iter(|| {
                let mut engine = ClusteringEngine::new(Config::default()).unwrap();
                black_box(engine.ingest_all(points.iter().cloned()))
            })
        });
    }

    group.finish();
}

fn benchmark_identify(c: &mut Criterion) {
    let mut group = c.benchmark_group("identify_clusters");

    for size in [1_000, 10_000, 50_000] {
        let mut engine = ClusteringEngine::new(Config::default()).unwrap();
        engine.ingest_all(lattice(size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(engine.identify_clusters()))
        });
    }

    group.finish();
}

fn benchmark_full_pass(c: &mut Criterion) {
    let source = MemoryBackend::with_points(lattice(10_000));
    let config = Config::default();

    c.bench_function("run_pass_10k", |b| {
        b.iter(|| {
            let mut sink = MemoryBackend::new();
            black_box(run_pass(&config, &source, &mut sink).unwrap())
        })
    });
}

criterion_group!(
    benches,
    benchmark_bucketing,
    benchmark_identify,
    benchmark_full_pass
);
criterion_main!(benches);
