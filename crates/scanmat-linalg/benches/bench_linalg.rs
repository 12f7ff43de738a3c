use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use scanmat_linalg::{inverse, lu, qr};
use scanmat_matrix::Matrix;

fn random_matrix(n: usize) -> Matrix<f64> {
    let mut rng = rand::rng();
    let data = (0..n * n)
        .map(|i| rng.random::<f64>() + if i % (n + 1) == 0 { n as f64 } else { 0.0 })
        .collect();
    Matrix::from_vec(n, n, data).expect("valid shape")
}

fn bench_linalg(c: &mut Criterion) {
    let mut group = c.benchmark_group("linalg");

    for n in [4, 16, 64].iter() {
        let a = random_matrix(*n);
        let b = random_matrix(*n);

        group.bench_with_input(BenchmarkId::new("matmul", n), &(&a, &b), |bencher, (a, b)| {
            bencher.iter(|| black_box(a.matmul(b)))
        });

        group.bench_with_input(BenchmarkId::new("lu", n), &a, |bencher, a| {
            bencher.iter(|| black_box(lu::lu(a)))
        });

        group.bench_with_input(BenchmarkId::new("inv", n), &a, |bencher, a| {
            bencher.iter(|| black_box(inverse::inv(a)))
        });

        group.bench_with_input(BenchmarkId::new("qr", n), &a, |bencher, a| {
            bencher.iter(|| black_box(qr::qr(a)))
        });

        let fa = faer::mat::from_row_major_slice(a.as_slice(), *n, *n).to_owned();
        group.bench_with_input(BenchmarkId::new("lu_faer", n), &fa, |bencher, fa| {
            bencher.iter(|| black_box(fa.partial_piv_lu()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_linalg);
criterion_main!(benches);
