#[macro_use]
extern crate criterion;
extern crate libpoly;

use criterion::{black_box, Criterion};
use libpoly::Polynomial;

fn bench_add(c: &mut Criterion) {
    let lhs = Polynomial::new(&(1..=256).map(f64::from).collect::<Vec<_>>()).unwrap();
    let rhs = Polynomial::new(&(1..=64).map(f64::from).collect::<Vec<_>>()).unwrap();

    c.bench_function("add", |b| {
        b.iter(|| black_box(&lhs).add(black_box(&rhs)))
    });
}

fn bench_sub(c: &mut Criterion) {
    let lhs = Polynomial::new(&(1..=64).map(f64::from).collect::<Vec<_>>()).unwrap();
    let rhs = Polynomial::new(&(1..=256).map(f64::from).collect::<Vec<_>>()).unwrap();

    c.bench_function("sub", |b| {
        b.iter(|| black_box(&lhs).sub(black_box(&rhs)))
    });
}

criterion_group!(add_benches, bench_add, bench_sub);
criterion_main!(add_benches);
