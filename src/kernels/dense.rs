//! Conversions between CSR and dense `ndarray` matrices

use ndarray::{Array2, ArrayView2, ArrayViewMut2};
use num_traits::Num;
use std::ops::AddAssign;

use crate::error::{Result, SparseError};
use crate::kernels::validate::assert_compressed;

/// Scatter CSR matrix A into the dense matrix `m`
///
/// Entries are added, so duplicates are summed and `m` should start out
/// zeroed for a plain conversion.
pub fn csr_todense<T>(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    aj: &[usize],
    ax: &[T],
    mut m: ArrayViewMut2<'_, T>,
) -> Result<()>
where
    T: Copy + Num + AddAssign,
{
    assert_compressed(n_row, n_col, ap, aj, ax.len());
    if m.dim() != (n_row, n_col) {
        return Err(SparseError::DenseShape {
            expected: (n_row, n_col),
            got: m.dim(),
        });
    }

    for i in 0..n_row {
        for jj in ap[i]..ap[i + 1] {
            m[[i, aj[jj]]] += ax[jj];
        }
    }
    Ok(())
}

/// Gather the nonzeros of a dense matrix into CSR arrays
///
/// Rows come out sorted; `bp`, `bj`, `bx` are overwritten.
pub fn dense_tocsr<T>(m: ArrayView2<'_, T>, bp: &mut Vec<usize>, bj: &mut Vec<usize>, bx: &mut Vec<T>)
where
    T: Copy + Num,
{
    let (n_row, _) = m.dim();
    bp.clear();
    bj.clear();
    bx.clear();
    bp.reserve(n_row + 1);

    bp.push(0);
    for row in m.rows() {
        for (j, &val) in row.iter().enumerate() {
            if !val.is_zero() {
                bj.push(j);
                bx.push(val);
            }
        }
        bp.push(bj.len());
    }
}

/// Allocating form of [`csr_todense`]
pub fn csr_to_array<T>(n_row: usize, n_col: usize, ap: &[usize], aj: &[usize], ax: &[T]) -> Array2<T>
where
    T: Copy + Num + AddAssign,
{
    let mut m = Array2::zeros((n_row, n_col));
    if let Err(err) = csr_todense(n_row, n_col, ap, aj, ax, m.view_mut()) {
        unreachable!("freshly allocated array has the wrong shape: {}", err);
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_roundtrip() {
        let m = array![[1.0, 0.0, 2.0], [0.0, 0.0, 0.0], [0.0, 3.0, 0.0]];
        let (mut bp, mut bj, mut bx) = (Vec::new(), Vec::new(), Vec::new());
        dense_tocsr(m.view(), &mut bp, &mut bj, &mut bx);

        assert_eq!(bp, vec![0, 2, 2, 3]);
        assert_eq!(bj, vec![0, 2, 1]);
        assert_eq!(bx, vec![1.0, 2.0, 3.0]);

        let mut out = Array2::zeros((3, 3));
        csr_todense(3, 3, &bp, &bj, &bx, out.view_mut()).unwrap();
        assert_eq!(out, m);
    }

    #[test]
    fn test_duplicates_are_summed() {
        let m = csr_to_array(1, 2, &[0, 3], &[1, 0, 1], &[1, 2, 3]);
        assert_eq!(m, array![[2, 4]]);
    }

    #[test]
    fn test_shape_mismatch() {
        let mut out = Array2::<f64>::zeros((2, 2));
        let err = csr_todense(1, 2, &[0, 0], &[], &[], out.view_mut()).unwrap_err();
        assert_eq!(
            err,
            SparseError::DenseShape {
                expected: (1, 2),
                got: (2, 2)
            }
        );
    }
}
