//! Sparse matrix–matrix multiplication (SMMP)
//!
//! C = A·B is computed in two passes over the same loop nest:
//!
//! 1. symbolic: count the distinct columns each row of C can reach, which
//!    fixes an exact upper bound on nnz(C) and so the output size
//! 2. numeric: accumulate the products, drop entries that cancel to zero
//!    and write the survivors into the preallocated output
//!
//! Both passes reuse one accumulator across rows. Output columns within a
//! row follow the accumulator's drain order (reverse first touch); call
//! [`csr_sort_indices`](crate::kernels::csr_sort_indices) for canonical
//! order.
//!
//! This follows the SMMP algorithm of Bank and Douglas, "Sparse Matrix
//! Multiplication Package (SMMP)".

use num_traits::Num;
use std::ops::AddAssign;

use crate::accumulator::{ColumnList, SparseAccumulator};
use crate::kernels::validate::{assert_compressed, assert_output_len};

/// Symbolic pass: compute the CSR row pointer bound for C = A·B
///
/// # Arguments
///
/// * `n_row` - rows of A (and C)
/// * `n_col` - columns of B (and C)
/// * `ap`, `aj` - CSR structure of A; A has `bp.len() - 1` columns
/// * `bp`, `bj` - CSR structure of B
/// * `cp` - output, length `n_row + 1`
///
/// `cp[i + 1] - cp[i]` is the number of distinct columns reachable from
/// row `i`, before any cancellation.
pub fn csr_matmat_pass1(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    aj: &[usize],
    bp: &[usize],
    bj: &[usize],
    cp: &mut [usize],
) {
    let n_inner = inner_dim(bp);
    assert_compressed(n_row, n_inner, ap, aj, aj.len());
    assert_compressed(n_inner, n_col, bp, bj, bj.len());
    assert_output_len("cp", cp.len(), n_row + 1);

    let mut mask = ColumnList::new(n_col);
    cp[0] = 0;

    for i in 0..n_row {
        for &j in &aj[ap[i]..ap[i + 1]] {
            for &k in &bj[bp[j]..bp[j + 1]] {
                mask.insert(k);
            }
        }

        cp[i + 1] = cp[i] + mask.len();
        mask.clear();
    }
}

/// Numeric pass: compute C = A·B into buffers sized by
/// [`csr_matmat_pass1`]
///
/// `cj` and `cx` must hold at least the bound pass 1 left in `cp[n_row]`.
/// `cp` is overwritten with the real row pointer, which is smaller than the
/// bound when products cancel. Returns the number of entries written.
pub fn csr_matmat_pass2<T>(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    aj: &[usize],
    ax: &[T],
    bp: &[usize],
    bj: &[usize],
    bx: &[T],
    cp: &mut [usize],
    cj: &mut [usize],
    cx: &mut [T],
) -> usize
where
    T: Copy + Num + AddAssign,
{
    let n_inner = inner_dim(bp);
    assert_compressed(n_row, n_inner, ap, aj, ax.len());
    assert_compressed(n_inner, n_col, bp, bj, bx.len());
    assert_output_len("cp", cp.len(), n_row + 1);

    let mut sums = SparseAccumulator::new(n_col);
    let mut nnz = 0;
    cp[0] = 0;

    for i in 0..n_row {
        for jj in ap[i]..ap[i + 1] {
            let j = aj[jj];
            let v = ax[jj];

            for kk in bp[j]..bp[j + 1] {
                sums.touch(bj[kk], v * bx[kk]);
            }
        }

        for (k, sum) in sums.drain() {
            if !sum.is_zero() {
                cj[nnz] = k;
                cx[nnz] = sum;
                nnz += 1;
            }
        }

        cp[i + 1] = nnz;
    }

    nnz
}

/// Compute C = A·B for CSR matrices A, B
///
/// # Arguments
///
/// * `n_row` - rows of A (hence C is `n_row × n_col`)
/// * `n_col` - columns of B
/// * `ap`, `aj`, `ax` - CSR arrays of A
/// * `bp`, `bj`, `bx` - CSR arrays of B; A has `bp.len() - 1` columns
/// * `cp`, `cj`, `cx` - output vectors, overwritten
///
/// Input column indices need not be sorted; output column indices are in
/// drain order and C holds no explicit zeros.
///
/// Complexity: O(n_row·K² + max(n_row, n_col)) where K bounds the nnz of a
/// row of A and of a column of B.
///
/// # Panics
///
/// Panics if an operand is malformed or the inner dimensions disagree.
pub fn csr_matmat<T>(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    aj: &[usize],
    ax: &[T],
    bp: &[usize],
    bj: &[usize],
    bx: &[T],
    cp: &mut Vec<usize>,
    cj: &mut Vec<usize>,
    cx: &mut Vec<T>,
) where
    T: Copy + Num + AddAssign,
{
    log::trace!(
        "csr_matmat: ({}x{}) * ({}x{}), nnz(A)={}, nnz(B)={}",
        n_row,
        inner_dim(bp),
        inner_dim(bp),
        n_col,
        aj.len(),
        bj.len()
    );

    cp.clear();
    cp.resize(n_row + 1, 0);
    csr_matmat_pass1(n_row, n_col, ap, aj, bp, bj, cp);

    let bound = cp[n_row];
    cj.clear();
    cj.resize(bound, 0);
    cx.clear();
    cx.resize(bound, T::zero());

    let nnz = csr_matmat_pass2(n_row, n_col, ap, aj, ax, bp, bj, bx, cp, cj, cx);
    cj.truncate(nnz);
    cx.truncate(nnz);
}

/// Symbolic pass for CSC matrices A (`n_row × k`) and B (`k × n_col`)
///
/// `cp` has length `n_col + 1`.
pub fn csc_matmat_pass1(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    ai: &[usize],
    bp: &[usize],
    bi: &[usize],
    cp: &mut [usize],
) {
    csr_matmat_pass1(n_col, n_row, bp, bi, ap, ai, cp)
}

/// Numeric pass for CSC matrices A, B
pub fn csc_matmat_pass2<T>(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    ai: &[usize],
    ax: &[T],
    bp: &[usize],
    bi: &[usize],
    bx: &[T],
    cp: &mut [usize],
    ci: &mut [usize],
    cx: &mut [T],
) -> usize
where
    T: Copy + Num + AddAssign,
{
    csr_matmat_pass2(n_col, n_row, bp, bi, bx, ap, ai, ax, cp, ci, cx)
}

/// Compute C = A·B for CSC matrices A, B (`n_row × k` times `k × n_col`)
///
/// A CSC matrix read as CSR is its transpose, so this is Cᵀ = Bᵀ·Aᵀ with
/// the CSR kernel.
pub fn csc_matmat<T>(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    ai: &[usize],
    ax: &[T],
    bp: &[usize],
    bi: &[usize],
    bx: &[T],
    cp: &mut Vec<usize>,
    ci: &mut Vec<usize>,
    cx: &mut Vec<T>,
) where
    T: Copy + Num + AddAssign,
{
    csr_matmat(n_col, n_row, bp, bi, bx, ap, ai, ax, cp, ci, cx)
}

#[track_caller]
fn inner_dim(bp: &[usize]) -> usize {
    assert!(!bp.is_empty(), "pointer array of B must not be empty");
    bp.len() - 1
}
