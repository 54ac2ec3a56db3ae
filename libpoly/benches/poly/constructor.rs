#[macro_use]
extern crate criterion;
extern crate libpoly;

use criterion::{black_box, Criterion};
use libpoly::Polynomial;

fn bench_ctor_trim_heavy(c: &mut Criterion) {
    // A long near-zero tail exercises the normalization scan.
    let mut coeffs = vec![4.0, 8.0, 5.8, 0.0, 12.0];
    coeffs.extend(vec![1e-9; 512]);

    c.bench_function("ctor_trim_heavy", |b| {
        b.iter(|| Polynomial::new(black_box(&coeffs)).unwrap())
    });
}

fn bench_ctor_dense(c: &mut Criterion) {
    let coeffs: Vec<f64> = (1..=512).map(f64::from).collect();

    c.bench_function("ctor_dense", |b| {
        b.iter(|| Polynomial::new(black_box(&coeffs)).unwrap())
    });
}

criterion_group!(ctor_benches, bench_ctor_trim_heavy, bench_ctor_dense);
criterion_main!(ctor_benches);
