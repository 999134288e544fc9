//! Benchmarks for sparse matrix multiplication and the kernels around it

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparsetools::kernels::{csr_matmat_pass1, csr_plus_csr, csr_sum_duplicates, csr_tocsc};
use sparsetools::{SparseConfig, SparseMatrixCSR};

/// Banded test matrix with `2 * half_width + 1` entries per interior row
fn create_banded_matrix(n: usize, half_width: usize) -> SparseMatrixCSR<f64> {
    let mut row_ptr = Vec::with_capacity(n + 1);
    let mut col_idx = Vec::new();
    let mut values = Vec::new();

    row_ptr.push(0);
    for i in 0..n {
        let lo = i.saturating_sub(half_width);
        let hi = (i + half_width + 1).min(n);
        for j in lo..hi {
            col_idx.push(j);
            values.push(1.0 + (i + j) as f64 * 0.01);
        }
        row_ptr.push(col_idx.len());
    }

    SparseMatrixCSR::new(n, n, row_ptr, col_idx, values)
}

fn bench_matrix_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("csr_matmat");

    for &n in &[1_000usize, 10_000] {
        let a = create_banded_matrix(n, 3);

        group.bench_with_input(BenchmarkId::new("symbolic", n), &a, |bench, a| {
            let mut cp = vec![0; a.n_rows + 1];
            bench.iter(|| {
                csr_matmat_pass1(a.n_rows, a.n_cols, &a.row_ptr, &a.col_idx, &a.row_ptr, &a.col_idx, &mut cp);
                black_box(cp[a.n_rows])
            })
        });

        group.bench_with_input(BenchmarkId::new("drain_order", n), &a, |bench, a| {
            bench.iter(|| black_box(a.matmul(a)))
        });

        group.bench_with_input(BenchmarkId::new("canonical", n), &a, |bench, a| {
            let config = SparseConfig::canonical();
            bench.iter(|| black_box(a.matmul_with(a, &config)))
        });
    }

    group.finish();
}

fn bench_kernels(c: &mut Criterion) {
    let n = 10_000;
    let a = create_banded_matrix(n, 3);
    let b = a.transpose();
    let nnz = a.nnz();

    c.bench_function("csr_tocsc", |bench| {
        let mut bp = vec![0; n + 1];
        let mut bi = vec![0; nnz];
        let mut bx = vec![0.0; nnz];
        bench.iter(|| {
            csr_tocsc(n, n, &a.row_ptr, &a.col_idx, &a.values, &mut bp, &mut bi, &mut bx);
            black_box(&bx);
        })
    });

    c.bench_function("csr_plus_csr", |bench| {
        let (mut cp, mut cj, mut cx) = (Vec::new(), Vec::new(), Vec::new());
        bench.iter(|| {
            csr_plus_csr(
                n, n, &a.row_ptr, &a.col_idx, &a.values, &b.row_ptr, &b.col_idx, &b.values, &mut cp,
                &mut cj, &mut cx,
            );
            black_box(cx.len())
        })
    });

    // Every entry stored twice
    let mut doubled = a.to_coo();
    doubled.row_idx.extend_from_within(..);
    doubled.col_idx.extend_from_within(..);
    doubled.values.extend_from_within(..);
    let mut row_order: Vec<usize> = (0..doubled.nnz()).collect();
    row_order.sort_by_key(|&k| doubled.row_idx[k]);
    let dup_ptr: Vec<usize> = a.row_ptr.iter().map(|&p| 2 * p).collect();
    let dup_idx: Vec<usize> = row_order.iter().map(|&k| doubled.col_idx[k]).collect();
    let dup_val: Vec<f64> = row_order.iter().map(|&k| doubled.values[k]).collect();

    c.bench_function("csr_sum_duplicates", |bench| {
        bench.iter_batched(
            || (dup_ptr.clone(), dup_idx.clone(), dup_val.clone()),
            |(mut ap, mut aj, mut ax)| {
                csr_sum_duplicates(n, n, &mut ap, &mut aj, &mut ax);
                black_box(ax)
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_matrix_multiply, bench_kernels);
criterion_main!(benches);
