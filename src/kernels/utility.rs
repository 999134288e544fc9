//! Single-pass scans over compressed matrices
//!
//! None of these need an accumulator: matrix–vector products, diagonal
//! extraction, index sorting, submatrix slicing and banded construction.

use num_traits::Num;
use std::ops::AddAssign;

use crate::kernels::validate::{assert_compressed, assert_output_len};

/// Compute y = A·x for CSR matrix A and dense vectors x, y
///
/// `x` has length `n_col`, `y` length `n_row`. Duplicates are summed.
pub fn csr_matvec<T>(n_row: usize, n_col: usize, ap: &[usize], aj: &[usize], ax: &[T], x: &[T], y: &mut [T])
where
    T: Copy + Num + AddAssign,
{
    assert_compressed(n_row, n_col, ap, aj, ax.len());
    assert_eq!(x.len(), n_col, "x.len() must be n_col");
    assert_eq!(y.len(), n_row, "y.len() must be n_row");

    for (i, yi) in y.iter_mut().enumerate() {
        let mut sum = T::zero();
        for jj in ap[i]..ap[i + 1] {
            sum += ax[jj] * x[aj[jj]];
        }
        *yi = sum;
    }
}

/// Compute y = A·x for CSC matrix A and dense vectors x, y
pub fn csc_matvec<T>(n_row: usize, n_col: usize, ap: &[usize], ai: &[usize], ax: &[T], x: &[T], y: &mut [T])
where
    T: Copy + Num + AddAssign,
{
    assert_compressed(n_col, n_row, ap, ai, ax.len());
    assert_eq!(x.len(), n_col, "x.len() must be n_col");
    assert_eq!(y.len(), n_row, "y.len() must be n_row");

    y.fill(T::zero());
    for (j, &xj) in x.iter().enumerate() {
        for ii in ap[j]..ap[j + 1] {
            y[ai[ii]] += ax[ii] * xj;
        }
    }
}

/// Extract the main diagonal of CSR matrix A into `y`
///
/// `y` has length `min(n_row, n_col)`. Duplicate diagonal entries are
/// summed.
pub fn csr_diagonal<T>(n_row: usize, n_col: usize, ap: &[usize], aj: &[usize], ax: &[T], y: &mut [T])
where
    T: Copy + Num + AddAssign,
{
    assert_compressed(n_row, n_col, ap, aj, ax.len());
    let n = n_row.min(n_col);
    assert_output_len("y", y.len(), n);

    for (i, yi) in y[..n].iter_mut().enumerate() {
        let mut diag = T::zero();
        for jj in ap[i]..ap[i + 1] {
            if aj[jj] == i {
                diag += ax[jj];
            }
        }
        *yi = diag;
    }
}

/// Extract the main diagonal of CSC matrix A into `y`
pub fn csc_diagonal<T>(n_row: usize, n_col: usize, ap: &[usize], ai: &[usize], ax: &[T], y: &mut [T])
where
    T: Copy + Num + AddAssign,
{
    csr_diagonal(n_col, n_row, ap, ai, ax, y)
}

/// Sort the column indices (and values with them) of every row of A
///
/// The sort is stable, so duplicate columns keep their relative order.
pub fn csr_sort_indices<T: Copy>(n_row: usize, n_col: usize, ap: &[usize], aj: &mut [usize], ax: &mut [T]) {
    assert_compressed(n_row, n_col, ap, aj, ax.len());

    let mut row: Vec<(usize, T)> = Vec::new();
    for i in 0..n_row {
        let (start, end) = (ap[i], ap[i + 1]);
        if aj[start..end].windows(2).all(|w| w[0] <= w[1]) {
            continue;
        }

        row.clear();
        row.extend(aj[start..end].iter().copied().zip(ax[start..end].iter().copied()));
        row.sort_by_key(|&(col, _)| col);

        for (n, &(col, val)) in row.iter().enumerate() {
            aj[start + n] = col;
            ax[start + n] = val;
        }
    }
}

/// Sort the row indices of every column of CSC matrix A
pub fn csc_sort_indices<T: Copy>(n_row: usize, n_col: usize, ap: &[usize], ai: &mut [usize], ax: &mut [T]) {
    csr_sort_indices(n_col, n_row, ap, ai, ax)
}

/// True when every row of A has strictly increasing column indices
pub fn csr_has_canonical_format(n_row: usize, ap: &[usize], aj: &[usize]) -> bool {
    (0..n_row).all(|i| aj[ap[i]..ap[i + 1]].windows(2).all(|w| w[0] < w[1]))
}

/// Extract the window `[ir0, ir1) × [ic0, ic1)` of CSR matrix A
///
/// Indices in the output are relative to the window. `bp`, `bj` and `bx`
/// are overwritten.
pub fn csr_submatrix<T: Copy>(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    aj: &[usize],
    ax: &[T],
    (ir0, ir1): (usize, usize),
    (ic0, ic1): (usize, usize),
    bp: &mut Vec<usize>,
    bj: &mut Vec<usize>,
    bx: &mut Vec<T>,
) {
    assert_compressed(n_row, n_col, ap, aj, ax.len());
    assert!(ir0 <= ir1 && ir1 <= n_row, "row window {}..{} outside 0..{}", ir0, ir1, n_row);
    assert!(ic0 <= ic1 && ic1 <= n_col, "column window {}..{} outside 0..{}", ic0, ic1, n_col);

    let in_window = |col: usize| col >= ic0 && col < ic1;
    let new_nnz = aj[ap[ir0]..ap[ir1]].iter().filter(|&&col| in_window(col)).count();

    bp.clear();
    bp.reserve(ir1 - ir0 + 1);
    bj.clear();
    bj.reserve(new_nnz);
    bx.clear();
    bx.reserve(new_nnz);

    bp.push(0);
    for i in ir0..ir1 {
        for jj in ap[i]..ap[i + 1] {
            if in_window(aj[jj]) {
                bj.push(aj[jj] - ic0);
                bx.push(ax[jj]);
            }
        }
        bp.push(bj.len());
    }
}

/// Build an `n_row × n_col` banded matrix in CSC form
///
/// `diags` is a row-major `offsets.len() × min(n_row, n_col)` table; row
/// `d` holds the entries of diagonal `offsets[d]` (0 is the main diagonal,
/// positive offsets lie above it). Sub-diagonal entries are read by column
/// index, super-diagonal entries by row index. Entries that fall outside
/// the matrix are skipped. Zeros in the table are stored.
pub fn spdiags<T: Copy>(
    n_row: usize,
    n_col: usize,
    offsets: &[isize],
    diags: &[T],
    ap: &mut Vec<usize>,
    ai: &mut Vec<usize>,
    ax: &mut Vec<T>,
) {
    let diag_len = n_row.min(n_col);
    assert_eq!(
        diags.len(),
        offsets.len() * diag_len,
        "diags.len() must be offsets.len() * min(n_row, n_col)"
    );

    ap.clear();
    ai.clear();
    ax.clear();
    ap.push(0);

    for j in 0..n_col {
        for (d, &offset) in offsets.iter().enumerate() {
            let row = j as isize - offset;
            if row < 0 || row as usize >= n_row {
                continue;
            }
            let row = row as usize;

            let pos = if offset <= 0 { j } else { row };
            ai.push(row);
            ax.push(diags[d * diag_len + pos]);
        }
        ap.push(ai.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //    [1 2 0]
    //    [0 3 0]
    //    [4 0 5]
    fn sample() -> (Vec<usize>, Vec<usize>, Vec<i32>) {
        (vec![0, 2, 3, 5], vec![0, 1, 1, 0, 2], vec![1, 2, 3, 4, 5])
    }

    #[test]
    fn test_matvec() {
        let (ap, aj, ax) = sample();
        let mut y = vec![0; 3];
        csr_matvec(3, 3, &ap, &aj, &ax, &[1, 1, 2], &mut y);
        assert_eq!(y, vec![3, 3, 14]);

        // Same arrays read as CSC are the transpose
        csc_matvec(3, 3, &ap, &aj, &ax, &[1, 1, 2], &mut y);
        assert_eq!(y, vec![9, 5, 10]);
    }

    #[test]
    fn test_diagonal_sums_duplicates() {
        let ap = vec![0, 2, 3];
        let aj = vec![0, 0, 2];
        let ax = vec![1.0, 2.0, 7.0];
        let mut y = vec![9.0; 2];
        csr_diagonal(2, 3, &ap, &aj, &ax, &mut y);
        assert_eq!(y, vec![3.0, 0.0]);
    }

    #[test]
    fn test_sort_indices() {
        let ap = vec![0, 3, 4];
        let mut aj = vec![2, 0, 1, 0];
        let mut ax = vec![20, 0, 10, 5];
        csr_sort_indices(2, 3, &ap, &mut aj, &mut ax);
        assert_eq!(aj, vec![0, 1, 2, 0]);
        assert_eq!(ax, vec![0, 10, 20, 5]);
        assert!(csr_has_canonical_format(2, &ap, &aj));
    }

    #[test]
    fn test_canonical_format_rejects_duplicates() {
        assert!(!csr_has_canonical_format(1, &[0, 2], &[1, 1]));
        assert!(csr_has_canonical_format(1, &[0, 2], &[0, 1]));
    }

    #[test]
    fn test_submatrix() {
        let (ap, aj, ax) = sample();
        let (mut bp, mut bj, mut bx) = (Vec::new(), Vec::new(), Vec::new());
        csr_submatrix(3, 3, &ap, &aj, &ax, (1, 3), (0, 2), &mut bp, &mut bj, &mut bx);
        // [[0 3], [4 0]]
        assert_eq!(bp, vec![0, 1, 2]);
        assert_eq!(bj, vec![1, 0]);
        assert_eq!(bx, vec![3, 4]);
    }

    #[test]
    fn test_spdiags_tridiagonal() {
        // 3x3 with sub, main and super diagonals
        let offsets = [-1, 0, 1];
        let diags = [1, 2, 0, 4, 5, 6, 8, 9, 0];
        let (mut ap, mut ai, mut ax) = (Vec::new(), Vec::new(), Vec::new());
        spdiags(3, 3, &offsets, &diags, &mut ap, &mut ai, &mut ax);

        // [4 8 0]
        // [1 5 9]
        // [0 2 6]
        assert_eq!(ap, vec![0, 2, 5, 7]);
        assert_eq!(ai, vec![1, 0, 2, 1, 0, 2, 1]);
        assert_eq!(ax, vec![1, 4, 2, 5, 8, 6, 9]);
    }
}
