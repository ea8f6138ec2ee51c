//! Benchmarks for rgbspace operations.
//!
//! Run with: `cargo bench -p rgbspace-bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use rgbspace_color::ColorspaceRegistry;
use rgbspace_primaries::{illuminants::Observer, normalized_primary_matrix, ACES_RGB, APPLE_RGB};
use rgbspace_transfer::{aces_log, aces_proxy, gamma};

/// Scalar transfer functions over a log-spaced ramp.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 10000, 100000].iter() {
        // 2^-20 .. 2^8, crosses the ACESlog denormal region
        let values: Vec<f64> = (0..*size)
            .map(|i| (i as f64 / *size as f64 * 28.0 - 20.0).exp2())
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("aces_log_encode", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| aces_log::encode(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("aces_log_encode_integer", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| aces_log::encode_integer(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("aces_proxy_10_encode", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| aces_proxy::encode_10(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("gamma_1.8", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| gamma::apple_rgb_encode(black_box(x))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// In-place buffer encode through a colorspace (rayon when `parallel` is on).
fn bench_buffer(c: &mut Criterion) {
    let registry = ColorspaceRegistry::standard().expect("standard registry");
    let log = registry.get("ACES RGB Log").expect("ACES RGB Log");

    let mut group = c.benchmark_group("buffer");
    let size = 1920 * 1080 * 3;
    let values: Vec<f64> = (0..size).map(|i| i as f64 / size as f64).collect();
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("aces_log_encode_hd", |b| {
        b.iter(|| {
            let mut data = values.clone();
            log.encode_buffer(black_box(&mut data));
            data
        })
    });

    group.finish();
}

/// Matrix derivation and RGB -> RGB conversion.
fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");

    let d60 = Observer::Cie1931TwoDegree.illuminant("D60").expect("D60");
    group.bench_function("npm_aces", |b| {
        b.iter(|| normalized_primary_matrix(black_box(&ACES_RGB), black_box(d60)))
    });

    let d65 = Observer::Cie1931TwoDegree.illuminant("D65").expect("D65");
    group.bench_function("npm_apple", |b| {
        b.iter(|| normalized_primary_matrix(black_box(&APPLE_RGB), black_box(d65)))
    });

    let registry = ColorspaceRegistry::standard().expect("standard registry");
    let apple = registry.get("Apple RGB").expect("Apple RGB");
    let cie = registry.get("CIE RGB").expect("CIE RGB");
    group.bench_function("convert_apple_to_cie", |b| {
        b.iter(|| apple.convert(black_box([0.25, 0.5, 0.75]), cie))
    });

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_buffer, bench_matrix);
criterion_main!(benches);
