//! In-place summation of duplicate entries

use num_traits::Zero;
use std::ops::AddAssign;

use crate::accumulator::SparseAccumulator;
use crate::kernels::validate::assert_compressed;

/// Sum together duplicate column entries in each row of CSR matrix A
///
/// `ap`, `aj` and `ax` are rewritten in place: every row ends up with
/// unique, sorted column indices and no explicit zeros, and the vectors are
/// truncated to the new nnz. Applying it twice gives the same result as
/// applying it once.
///
/// Complexity: O(nnz(A) + n_col) plus the per-row sort of surviving
/// entries.
///
/// # Panics
///
/// Panics if A is malformed.
pub fn csr_sum_duplicates<T>(
    n_row: usize,
    n_col: usize,
    ap: &mut [usize],
    aj: &mut Vec<usize>,
    ax: &mut Vec<T>,
) where
    T: Copy + Zero + AddAssign,
{
    assert_compressed(n_row, n_col, ap, aj, ax.len());
    log::trace!("csr_sum_duplicates: {}x{}, nnz={}", n_row, n_col, aj.len());
    coalesce_rows(n_row, n_col, ap, aj, ax);
}

/// Sum together duplicate row entries in each column of CSC matrix A
pub fn csc_sum_duplicates<T>(
    n_row: usize,
    n_col: usize,
    ap: &mut [usize],
    ai: &mut Vec<usize>,
    ax: &mut Vec<T>,
) where
    T: Copy + Zero + AddAssign,
{
    csr_sum_duplicates(n_col, n_row, ap, ai, ax)
}

/// Coalescing pass shared with the COO converter, which has already
/// validated its buffers.
///
/// The write cursor `nnz` never passes the start of the row being read:
/// a row yields at most as many entries as it stores, so compacting to the
/// left only overwrites slots that have been consumed.
pub(crate) fn coalesce_rows<T>(
    n_row: usize,
    n_col: usize,
    ap: &mut [usize],
    aj: &mut Vec<usize>,
    ax: &mut Vec<T>,
) where
    T: Copy + Zero + AddAssign,
{
    let mut acc = SparseAccumulator::new(n_col);
    let mut row: Vec<(usize, T)> = Vec::new();
    let mut nnz = 0;
    let mut row_end = 0;

    for i in 0..n_row {
        // ap[i] has already been overwritten with the compacted offset
        let row_start = row_end;
        row_end = ap[i + 1];

        for jj in row_start..row_end {
            acc.touch(aj[jj], ax[jj]);
        }

        row.clear();
        row.extend(acc.drain().filter(|(_, val)| !val.is_zero()));
        row.sort_unstable_by_key(|&(col, _)| col);

        for &(col, val) in &row {
            aj[nnz] = col;
            ax[nnz] = val;
            nnz += 1;
        }
        ap[i + 1] = nnz;
    }

    aj.truncate(nnz);
    ax.truncate(nnz);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_duplicates() {
        // row 0: (2, 1) (0, 2) (2, 3)   row 1: empty   row 2: (1, 4) (1, -4) (0, 5)
        let mut ap = vec![0, 3, 3, 6];
        let mut aj = vec![2, 0, 2, 1, 1, 0];
        let mut ax = vec![1, 2, 3, 4, -4, 5];
        csr_sum_duplicates(3, 3, &mut ap, &mut aj, &mut ax);

        assert_eq!(ap, vec![0, 2, 2, 3]);
        assert_eq!(aj, vec![0, 2, 0]);
        assert_eq!(ax, vec![2, 4, 5]);
    }

    #[test]
    fn test_sum_duplicates_idempotent() {
        let mut ap = vec![0, 4, 6];
        let mut aj = vec![3, 1, 3, 0, 2, 2];
        let mut ax = vec![1.0, 2.0, 0.5, 0.0, 1.0, 1.0];
        csr_sum_duplicates(2, 4, &mut ap, &mut aj, &mut ax);
        let once = (ap.clone(), aj.clone(), ax.clone());

        csr_sum_duplicates(2, 4, &mut ap, &mut aj, &mut ax);
        assert_eq!((ap, aj, ax), once);
        assert_eq!(once.1, vec![1, 3, 2]);
        assert_eq!(once.2, vec![2.0, 1.5, 2.0]);
    }

    #[test]
    fn test_csc_sum_duplicates() {
        // 3x2 CSC, column 1 holds row 2 twice
        let mut ap = vec![0, 1, 3];
        let mut ai = vec![0, 2, 2];
        let mut ax = vec![1, 2, 3];
        csc_sum_duplicates(3, 2, &mut ap, &mut ai, &mut ax);

        assert_eq!(ap, vec![0, 1, 2]);
        assert_eq!(ai, vec![0, 2]);
        assert_eq!(ax, vec![1, 5]);
    }

    #[test]
    #[should_panic(expected = "invalid compressed operand")]
    fn test_out_of_range_index() {
        let mut ap = vec![0, 1];
        csr_sum_duplicates(1, 2, &mut ap, &mut vec![2], &mut vec![1]);
    }
}
