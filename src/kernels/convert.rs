//! Counting-sort conversions between CSR, CSC and COO
//!
//! All conversions are linear: one pass to count entries per output
//! bucket, a prefix sum to turn counts into the pointer array, and one
//! scatter pass that walks a cursor copy of the pointer array.

use num_traits::Zero;
use std::ops::AddAssign;

use crate::kernels::duplicates::coalesce_rows;
use crate::kernels::validate::{assert_compressed, assert_coordinates, assert_output_len};
use crate::utils::exclusive_scan_into;

/// Compute B = A for CSR matrix A, CSC matrix B
///
/// With the operand roles exchanged the same routine converts CSC to CSR
/// and transposes within one format (CSR Aᵀ is CSC A read as CSR).
///
/// # Arguments
///
/// * `n_row`, `n_col` - shape of A
/// * `ap`, `aj`, `ax` - CSR arrays of A; column indices need not be sorted
/// * `bp` - output column pointer, length `n_col + 1`
/// * `bi`, `bx` - output row indices and values, length at least `nnz(A)`
///
/// Row indices within each output column come out sorted.
///
/// Complexity: O(nnz(A) + max(n_row, n_col))
///
/// # Panics
///
/// Panics if A is malformed or an output buffer is too short.
pub fn csr_tocsc<T: Copy>(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    aj: &[usize],
    ax: &[T],
    bp: &mut [usize],
    bi: &mut [usize],
    bx: &mut [T],
) {
    assert_compressed(n_row, n_col, ap, aj, ax.len());
    assert_output_len("bp", bp.len(), n_col + 1);

    let nnz = ap[n_row];
    assert_output_len("bi", bi.len(), nnz);
    assert_output_len("bx", bx.len(), nnz);
    log::trace!("csr_tocsc: {}x{}, nnz={}", n_row, n_col, nnz);

    // Count non-zeros per column
    let mut cursor = vec![0usize; n_col];
    for &col in &aj[..nnz] {
        cursor[col] += 1;
    }
    exclusive_scan_into(&cursor, &mut bp[..=n_col]);
    cursor.copy_from_slice(&bp[..n_col]);

    for i in 0..n_row {
        for jj in ap[i]..ap[i + 1] {
            let col = aj[jj];
            let dest = cursor[col];

            bi[dest] = i;
            bx[dest] = ax[jj];

            cursor[col] += 1;
        }
    }
}

/// Compute B = A for CSC matrix A, CSR matrix B
pub fn csc_tocsr<T: Copy>(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    ai: &[usize],
    ax: &[T],
    bp: &mut [usize],
    bj: &mut [usize],
    bx: &mut [T],
) {
    csr_tocsc(n_col, n_row, ap, ai, ax, bp, bj, bx)
}

/// Compute B = A for COO matrix A, CSR matrix B
///
/// Entries are bucketed by row (input order is kept inside a bucket) and
/// then coalesced: duplicate (row, col) pairs are summed, sums that are
/// exactly zero are dropped and every row comes out sorted by column.
///
/// # Arguments
///
/// * `ai`, `aj`, `ax` - coordinate triples, any order, duplicates allowed
/// * `bp` - output row pointer, length `n_row + 1`
/// * `bj`, `bx` - output buffers; cleared, then filled with exactly
///   `bp[n_row]` entries
///
/// Complexity: O(nnz(A) + max(n_row, n_col))
///
/// # Panics
///
/// Panics if the triples have unequal lengths or any index is out of range
/// (which includes any entry at all when a dimension is zero).
pub fn coo_tocsr<T>(
    n_row: usize,
    n_col: usize,
    ai: &[usize],
    aj: &[usize],
    ax: &[T],
    bp: &mut [usize],
    bj: &mut Vec<usize>,
    bx: &mut Vec<T>,
) where
    T: Copy + Zero + AddAssign,
{
    assert_coordinates(n_row, n_col, ai, aj, ax.len());
    assert_eq!(bp.len(), n_row + 1, "bp.len() must be n_row + 1");

    let nnz = ax.len();
    log::trace!("coo_tocsr: {}x{}, entries={}", n_row, n_col, nnz);

    let mut cursor = vec![0usize; n_row];
    for &row in ai {
        cursor[row] += 1;
    }
    exclusive_scan_into(&cursor, bp);
    cursor.copy_from_slice(&bp[..n_row]);

    bj.clear();
    bj.resize(nnz, 0);
    bx.clear();
    bx.resize(nnz, T::zero());

    for n in 0..nnz {
        let row = ai[n];
        let dest = cursor[row];

        bj[dest] = aj[n];
        bx[dest] = ax[n];

        cursor[row] += 1;
    }

    // bp, bj, bx now form a CSR matrix that may hold duplicates
    coalesce_rows(n_row, n_col, bp, bj, bx);
}

/// Compute B = A for COO matrix A, CSC matrix B
pub fn coo_tocsc<T>(
    n_row: usize,
    n_col: usize,
    ai: &[usize],
    aj: &[usize],
    ax: &[T],
    bp: &mut [usize],
    bi: &mut Vec<usize>,
    bx: &mut Vec<T>,
) where
    T: Copy + Zero + AddAssign,
{
    coo_tocsr(n_col, n_row, aj, ai, ax, bp, bi, bx)
}

/// Expand a compressed pointer into one outer index per stored entry
///
/// `bi` must have length at least `ap[n_row]`.
pub fn expand_ptr(n_row: usize, ap: &[usize], bi: &mut [usize]) {
    assert_eq!(ap.len(), n_row + 1, "ap.len() must be n_row + 1");
    assert_output_len("bi", bi.len(), ap[n_row]);

    for i in 0..n_row {
        bi[ap[i]..ap[i + 1]].fill(i);
    }
}

/// Compute B = A for CSR matrix A, COO matrix B
///
/// Entries are appended to `bi`, `bj`, `bx` in storage order.
pub fn csr_tocoo<T: Copy>(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    aj: &[usize],
    ax: &[T],
    bi: &mut Vec<usize>,
    bj: &mut Vec<usize>,
    bx: &mut Vec<T>,
) {
    assert_compressed(n_row, n_col, ap, aj, ax.len());

    let nnz = ap[n_row];
    let start = bi.len();
    bi.resize(start + nnz, 0);
    expand_ptr(n_row, ap, &mut bi[start..]);
    bj.extend_from_slice(aj);
    bx.extend_from_slice(ax);
}

/// Compute B = A for CSC matrix A, COO matrix B
pub fn csc_tocoo<T: Copy>(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    ai: &[usize],
    ax: &[T],
    bi: &mut Vec<usize>,
    bj: &mut Vec<usize>,
    bx: &mut Vec<T>,
) {
    csr_tocoo(n_col, n_row, ap, ai, ax, bj, bi, bx)
}
