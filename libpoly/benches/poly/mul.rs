#[macro_use]
extern crate criterion;
extern crate libpoly;

use criterion::{black_box, Criterion};
use libpoly::Polynomial;

fn bench_mul(c: &mut Criterion) {
    let lhs = Polynomial::new(&(1..=128).map(f64::from).collect::<Vec<_>>()).unwrap();
    let rhs = Polynomial::new(&(1..=128).map(f64::from).collect::<Vec<_>>()).unwrap();

    c.bench_function("mul", |b| {
        b.iter(|| black_box(&lhs).mul(black_box(&rhs)))
    });
}

criterion_group!(mul_benches, bench_mul);
criterion_main!(mul_benches);
