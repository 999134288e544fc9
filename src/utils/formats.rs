//! Conversions between our matrix types and `sprs`
//!
//! `sprs` only accepts compressed matrices with sorted, unique indices, so
//! matrices that are not in canonical form are coalesced on the way out.

use std::borrow::Cow;
use std::ops::AddAssign;

use num_traits::Num;
use sprs::CsMat;

use crate::matrix::{SparseMatrixCSC, SparseMatrixCSR};

/// Converts a CSR matrix to a `sprs` CSR matrix
///
/// Duplicates are summed and explicit zeros dropped when `matrix` is not
/// already canonical.
pub fn to_sprs_csr<T>(matrix: &SparseMatrixCSR<T>) -> CsMat<T>
where
    T: Copy + Num + AddAssign + Default,
{
    let matrix = if matrix.has_canonical_format() {
        Cow::Borrowed(matrix)
    } else {
        let mut coalesced = matrix.clone();
        coalesced.sum_duplicates();
        Cow::Owned(coalesced)
    };

    CsMat::new(
        (matrix.n_rows, matrix.n_cols),
        matrix.row_ptr.clone(),
        matrix.col_idx.clone(),
        matrix.values.clone(),
    )
}

/// Converts a CSC matrix to a `sprs` CSC matrix
pub fn to_sprs_csc<T>(matrix: &SparseMatrixCSC<T>) -> CsMat<T>
where
    T: Copy + Num + AddAssign + Default,
{
    let matrix = if matrix.has_canonical_format() {
        Cow::Borrowed(matrix)
    } else {
        let mut coalesced = matrix.clone();
        coalesced.sum_duplicates();
        Cow::Owned(coalesced)
    };

    CsMat::new_csc(
        (matrix.n_rows, matrix.n_cols),
        matrix.col_ptr.clone(),
        matrix.row_idx.clone(),
        matrix.values.clone(),
    )
}

/// Converts a `sprs` matrix of either storage order to CSR
pub fn from_sprs_csr<T>(matrix: CsMat<T>) -> SparseMatrixCSR<T>
where
    T: Copy + Num + AddAssign + Default,
{
    let matrix = if matrix.is_csr() { matrix } else { matrix.to_csr() };

    let (n_rows, n_cols) = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSR::new(n_rows, n_cols, indptr, indices, data)
}

/// Converts a `sprs` matrix of either storage order to CSC
pub fn from_sprs_csc<T>(matrix: CsMat<T>) -> SparseMatrixCSC<T>
where
    T: Copy + Num + AddAssign + Default,
{
    let matrix = if matrix.is_csc() { matrix } else { matrix.to_csc() };

    let (n_rows, n_cols) = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSC::new(n_rows, n_cols, indptr, indices, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_roundtrip() {
        let original = SparseMatrixCSR::new(
            3,
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1.0f64, 2.0, 3.0, 4.0, 5.0],
        );

        let roundtrip = from_sprs_csr(to_sprs_csr(&original));

        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_csc_roundtrip() {
        let original = SparseMatrixCSC::new(
            3,
            3,
            vec![0, 2, 4, 5],
            vec![0, 2, 0, 1, 2],
            vec![1.0f64, 4.0, 2.0, 3.0, 5.0],
        );

        let roundtrip = from_sprs_csc(to_sprs_csc(&original));

        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_unsorted_rows_are_coalesced() {
        // Row 0 holds (2, 1.0), (0, 2.0), (2, 3.0)
        let unsorted = SparseMatrixCSR::new(1, 3, vec![0, 3], vec![2, 0, 2], vec![1.0, 2.0, 3.0]);

        let sprs_mat = to_sprs_csr(&unsorted);

        assert_eq!(sprs_mat.nnz(), 2);
        assert_eq!(sprs_mat.get(0, 0), Some(&2.0));
        assert_eq!(sprs_mat.get(0, 2), Some(&4.0));
    }

    #[test]
    fn test_product_agrees_with_sprs() {
        // A = [1 2; 0 3], B = [4 5; 6 7], A*B = [16 19; 18 21]
        let a = SparseMatrixCSR::new(2, 2, vec![0, 2, 3], vec![0, 1, 1], vec![1.0f64, 2.0, 3.0]);
        let b = SparseMatrixCSR::new(
            2,
            2,
            vec![0, 2, 4],
            vec![0, 1, 0, 1],
            vec![4.0f64, 5.0, 6.0, 7.0],
        );

        let sprs_result = &to_sprs_csr(&a) * &to_sprs_csr(&b);
        let expected = from_sprs_csr(sprs_result);

        let mut ours = a.matmul(&b);
        ours.sort_indices();

        assert_eq!(ours, expected);
        assert_eq!(ours.values, vec![16.0, 19.0, 18.0, 21.0]);
    }
}
