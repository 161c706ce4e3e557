use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparsemat::{MatrixBuilder, SparseMatrix, SparseRow};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, density: f64) -> SparseMatrix {
    let mut builder = MatrixBuilder::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            if rng.gen_bool(density) {
                builder.push(r, c, rng.gen_range(-1.0..1.0));
            }
        }
    }
    builder.build().expect("valid dimensions")
}

fn random_row(rng: &mut StdRng, capacity: usize, density: f64) -> SparseRow {
    let values: Vec<f64> = (0..capacity)
        .map(|_| if rng.gen_bool(density) { rng.gen_range(-1.0..1.0) } else { 0.0 })
        .collect();
    SparseRow::from_dense(&values).expect("nonzero capacity")
}

fn bench_row_merge(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("row_merge");
    for capacity in [1_000, 10_000, 100_000] {
        let a = random_row(&mut rng, capacity, 0.01);
        let b = random_row(&mut rng, capacity, 0.01);
        group.bench_with_input(BenchmarkId::new("add", capacity), &capacity, |bench, _| {
            bench.iter(|| black_box(&a) + black_box(&b))
        });
        group.bench_with_input(BenchmarkId::new("sub", capacity), &capacity, |bench, _| {
            bench.iter(|| black_box(&a) - black_box(&b))
        });
    }
    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("transpose");
    for size in [100, 500, 1_000] {
        let m = random_matrix(&mut rng, size, size, 0.01);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| black_box(&m).transpose())
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let mut group = c.benchmark_group("multiply");
    group.sample_size(10);
    for size in [20, 50, 100] {
        let a = random_matrix(&mut rng, size, size, 0.05);
        let b = random_matrix(&mut rng, size, size, 0.05);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| black_box(&a).multiply(black_box(&b)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_row_merge, bench_transpose, bench_multiply);
criterion_main!(benches);
