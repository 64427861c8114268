//! Engine operation benchmarks.
//!
//! Run with: cargo bench -p bnh-core

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use bnh_core::rng::{OsRandom, RandomSource};
use num_bigint::BigUint;
use num_traits::One;

fn bench_engine(c: &mut Criterion) {
    let mut rng = OsRandom;
    let mut group = c.benchmark_group("engine");

    for size in [256, 1024, 2048] {
        let x = rng.random_uint(size).unwrap();
        let y = rng.random_uint(size).unwrap();
        // +1 keeps the divisor and modulus nonzero
        let m = rng.random_uint(size / 2).unwrap() + BigUint::one();

        group.bench_with_input(BenchmarkId::new("mul", size), &size, |bench, _| {
            bench.iter(|| &x * &y);
        });

        group.bench_with_input(BenchmarkId::new("sqr", size), &size, |bench, _| {
            bench.iter(|| &x * &x);
        });

        group.bench_with_input(BenchmarkId::new("div", size), &size, |bench, _| {
            bench.iter(|| &x / &m);
        });

        group.bench_with_input(BenchmarkId::new("rem", size), &size, |bench, _| {
            bench.iter(|| &x % &m);
        });
    }

    // Modular exponentiation only at the small size; larger operands take
    // seconds per iteration
    let x = rng.random_uint(256).unwrap();
    let y = rng.random_uint(256).unwrap();
    let m = rng.random_uint(256).unwrap() + BigUint::one();
    group.bench_function("modexp/256", |bench| {
        bench.iter(|| x.modpow(&y, &m));
    });

    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
