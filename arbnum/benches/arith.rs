use criterion::{Criterion, black_box, criterion_group, criterion_main};

use arbnum::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn random_expression(rng: &mut impl Rng, len: usize) -> RationalExpression {
    let mut expr = RationalExpression::with_capacity(len);
    for _ in 0..len {
        let c = rng.random_range(-9..=9);
        let a = rng.random_range(-99..=99);
        let b = rng.random_range(1..=99);
        expr.push_term(c, a, b).unwrap();
    }
    expr
}

fn bench_arith(c: &mut Criterion) {
    // Seeded for determinism across runs.
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);
    let x = random_expression(&mut rng, 64);
    let y = random_expression(&mut rng, 64);

    c.bench_function("push_term_1k", |b| {
        b.iter(|| {
            let mut expr = RationalExpression::new();
            for i in 1..=1000 {
                expr.push_term(black_box(1), black_box(i), black_box(i + 1))
                    .unwrap();
            }
            expr
        })
    });

    c.bench_function("concat_64x64", |b| b.iter(|| black_box(&x) + black_box(&y)));

    c.bench_function("checked_mul_64x64", |b| {
        b.iter(|| black_box(&x).checked_mul(black_box(&y)).unwrap())
    });

    let product = x.checked_mul(&y).unwrap();
    c.bench_function("exact_value_4096", |b| {
        b.iter(|| black_box(&product).exact_value())
    });
    c.bench_function("approx_value_4096", |b| {
        b.iter(|| black_box(&product).approx_value())
    });
}

criterion_group!(benches, bench_arith);
criterion_main!(benches);
