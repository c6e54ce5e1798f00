// benches/field_benchmark.rs

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use galois_fields::{GaloisField, PolynomialArithmetic, PolynomialImmutable};

fn bench_table_construction(c: &mut Criterion) {
    c.bench_function("build GF(2^8)", |b| {
        b.iter(|| GaloisField::new(black_box(256)).unwrap())
    });
    c.bench_function("build GF(2^16)", |b| {
        b.iter(|| GaloisField::new(black_box(1 << 16)).unwrap())
    });
}

fn bench_field_multiply(c: &mut Criterion) {
    let gf256 = GaloisField::new(256).unwrap();
    c.bench_function("GF(256) multiply", |b| {
        b.iter(|| {
            let mut acc = 1u64;
            for x in 1..256u64 {
                acc = gf256.multiply(black_box(acc), black_box(x));
            }
            acc
        })
    });

    let gf65537 = GaloisField::new(65537).unwrap();
    c.bench_function("GF(65537) multiply", |b| {
        b.iter(|| {
            let mut acc = 1u64;
            for x in 1..256u64 {
                acc = gf65537.multiply(black_box(acc), black_box(x));
            }
            acc
        })
    });
}

fn bench_polynomial_multiply(c: &mut Criterion) {
    let gf256 = GaloisField::new(256).unwrap();
    let a = PolynomialImmutable::from_coefficients(
        Arc::clone(&gf256),
        (1..=64u64).map(|v| v % 256).collect(),
    );
    let b_poly = PolynomialImmutable::from_coefficients(
        Arc::clone(&gf256),
        (101..=164u64).map(|v| v % 256).collect(),
    );

    c.bench_function("poly multiply deg 63 x deg 63", |b| {
        b.iter(|| a.mul(black_box(&b_poly)).unwrap())
    });
}

fn bench_interpolation(c: &mut Criterion) {
    let gf256 = GaloisField::new(256).unwrap();
    let arithmetic = PolynomialArithmetic::new(Arc::clone(&gf256));
    let xs: Vec<u64> = (1..=32).collect();
    let ys: Vec<u64> = xs.iter().map(|&x| (x * 17 + 3) % 256).collect();

    c.bench_function("lagrange interpolate 32 points", |b| {
        b.iter(|| arithmetic.interpolate(black_box(&xs), black_box(&ys)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_table_construction,
    bench_field_multiply,
    bench_polynomial_multiply,
    bench_interpolation
);
criterion_main!(benches);
