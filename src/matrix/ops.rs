//! Matrix products and elementwise operations on the matrix types
//!
//! These wrap the raw kernels: shapes are checked up front and reported
//! as [`SparseError::DimensionMismatch`] by the `try_*` forms, then the
//! kernel output is post-processed according to a [`SparseConfig`].

use std::ops::AddAssign;

use num_traits::Num;

use crate::error::{Result, SparseError};
use crate::kernels::{self, BinaryOp};
use crate::matrix::{SparseConfig, SparseMatrixCSC, SparseMatrixCSR};

fn check_product(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left.1 != right.0 {
        return Err(SparseError::DimensionMismatch {
            op: "matmul",
            left,
            right,
        });
    }
    Ok(())
}

fn check_same_shape(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left != right {
        return Err(SparseError::DimensionMismatch { op, left, right });
    }
    Ok(())
}

fn finish<T>(indices: &mut Vec<usize>, values: &mut Vec<T>, config: &SparseConfig) {
    if config.shrink_to_fit {
        indices.shrink_to_fit();
        values.shrink_to_fit();
    }
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num + AddAssign,
{
    /// Computes `self · b`
    ///
    /// # Panics
    ///
    /// Panics if `self.n_cols != b.n_rows`.
    pub fn matmul(&self, b: &SparseMatrixCSR<T>) -> SparseMatrixCSR<T> {
        self.matmul_with(b, &SparseConfig::default())
    }

    /// [`matmul`](Self::matmul) with output post-processing
    pub fn matmul_with(&self, b: &SparseMatrixCSR<T>, config: &SparseConfig) -> SparseMatrixCSR<T> {
        self.try_matmul_with(b, config)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn try_matmul(&self, b: &SparseMatrixCSR<T>) -> Result<SparseMatrixCSR<T>> {
        self.try_matmul_with(b, &SparseConfig::default())
    }

    pub fn try_matmul_with(
        &self,
        b: &SparseMatrixCSR<T>,
        config: &SparseConfig,
    ) -> Result<SparseMatrixCSR<T>> {
        check_product(self.shape(), b.shape())?;

        let (mut row_ptr, mut col_idx, mut values) = (Vec::new(), Vec::new(), Vec::new());
        kernels::csr_matmat(
            self.n_rows,
            b.n_cols,
            &self.row_ptr,
            &self.col_idx,
            &self.values,
            &b.row_ptr,
            &b.col_idx,
            &b.values,
            &mut row_ptr,
            &mut col_idx,
            &mut values,
        );
        finish(&mut col_idx, &mut values, config);

        let mut c = SparseMatrixCSR {
            n_rows: self.n_rows,
            n_cols: b.n_cols,
            row_ptr,
            col_idx,
            values,
        };
        if config.sort_indices {
            c.sort_indices();
        }
        log::debug!(
            "csr matmul: ({}x{}) * ({}x{}) -> nnz {}",
            self.n_rows,
            self.n_cols,
            b.n_rows,
            b.n_cols,
            c.nnz()
        );
        Ok(c)
    }

    /// Computes `self (op) b` entry by entry
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ, or on integer division by zero.
    pub fn elementwise(&self, b: &SparseMatrixCSR<T>, op: BinaryOp) -> SparseMatrixCSR<T> {
        self.elementwise_with(b, op, &SparseConfig::default())
    }

    pub fn elementwise_with(
        &self,
        b: &SparseMatrixCSR<T>,
        op: BinaryOp,
        config: &SparseConfig,
    ) -> SparseMatrixCSR<T> {
        self.try_elementwise_with(b, op, config)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn try_elementwise_with(
        &self,
        b: &SparseMatrixCSR<T>,
        op: BinaryOp,
        config: &SparseConfig,
    ) -> Result<SparseMatrixCSR<T>> {
        check_same_shape("elementwise", self.shape(), b.shape())?;

        let (mut row_ptr, mut col_idx, mut values) = (Vec::new(), Vec::new(), Vec::new());
        kernels::csr_binop_csr_op(
            self.n_rows,
            self.n_cols,
            &self.row_ptr,
            &self.col_idx,
            &self.values,
            &b.row_ptr,
            &b.col_idx,
            &b.values,
            &mut row_ptr,
            &mut col_idx,
            &mut values,
            op,
        );
        finish(&mut col_idx, &mut values, config);

        let mut c = SparseMatrixCSR {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            row_ptr,
            col_idx,
            values,
        };
        if config.sort_indices {
            c.sort_indices();
        }
        log::debug!("csr {:?}: {}x{} -> nnz {}", op, self.n_rows, self.n_cols, c.nnz());
        Ok(c)
    }

    pub fn plus(&self, b: &SparseMatrixCSR<T>) -> SparseMatrixCSR<T> {
        self.elementwise(b, BinaryOp::Add)
    }

    pub fn minus(&self, b: &SparseMatrixCSR<T>) -> SparseMatrixCSR<T> {
        self.elementwise(b, BinaryOp::Sub)
    }

    /// Hadamard product
    pub fn multiply_elementwise(&self, b: &SparseMatrixCSR<T>) -> SparseMatrixCSR<T> {
        self.elementwise(b, BinaryOp::Mul)
    }

    pub fn divide_elementwise(&self, b: &SparseMatrixCSR<T>) -> SparseMatrixCSR<T> {
        self.elementwise(b, BinaryOp::Div)
    }
}

impl<T> SparseMatrixCSC<T>
where
    T: Copy + Num + AddAssign,
{
    /// Computes `self · b`
    ///
    /// # Panics
    ///
    /// Panics if `self.n_cols != b.n_rows`.
    pub fn matmul(&self, b: &SparseMatrixCSC<T>) -> SparseMatrixCSC<T> {
        self.matmul_with(b, &SparseConfig::default())
    }

    pub fn matmul_with(&self, b: &SparseMatrixCSC<T>, config: &SparseConfig) -> SparseMatrixCSC<T> {
        self.try_matmul_with(b, config)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn try_matmul(&self, b: &SparseMatrixCSC<T>) -> Result<SparseMatrixCSC<T>> {
        self.try_matmul_with(b, &SparseConfig::default())
    }

    pub fn try_matmul_with(
        &self,
        b: &SparseMatrixCSC<T>,
        config: &SparseConfig,
    ) -> Result<SparseMatrixCSC<T>> {
        check_product(self.shape(), b.shape())?;

        let (mut col_ptr, mut row_idx, mut values) = (Vec::new(), Vec::new(), Vec::new());
        kernels::csc_matmat(
            self.n_rows,
            b.n_cols,
            &self.col_ptr,
            &self.row_idx,
            &self.values,
            &b.col_ptr,
            &b.row_idx,
            &b.values,
            &mut col_ptr,
            &mut row_idx,
            &mut values,
        );
        finish(&mut row_idx, &mut values, config);

        let mut c = SparseMatrixCSC {
            n_rows: self.n_rows,
            n_cols: b.n_cols,
            col_ptr,
            row_idx,
            values,
        };
        if config.sort_indices {
            c.sort_indices();
        }
        log::debug!(
            "csc matmul: ({}x{}) * ({}x{}) -> nnz {}",
            self.n_rows,
            self.n_cols,
            b.n_rows,
            b.n_cols,
            c.nnz()
        );
        Ok(c)
    }

    pub fn elementwise(&self, b: &SparseMatrixCSC<T>, op: BinaryOp) -> SparseMatrixCSC<T> {
        self.elementwise_with(b, op, &SparseConfig::default())
    }

    pub fn elementwise_with(
        &self,
        b: &SparseMatrixCSC<T>,
        op: BinaryOp,
        config: &SparseConfig,
    ) -> SparseMatrixCSC<T> {
        self.try_elementwise_with(b, op, config)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn try_elementwise_with(
        &self,
        b: &SparseMatrixCSC<T>,
        op: BinaryOp,
        config: &SparseConfig,
    ) -> Result<SparseMatrixCSC<T>> {
        check_same_shape("elementwise", self.shape(), b.shape())?;

        let (mut col_ptr, mut row_idx, mut values) = (Vec::new(), Vec::new(), Vec::new());
        kernels::csc_binop_csc_op(
            self.n_rows,
            self.n_cols,
            &self.col_ptr,
            &self.row_idx,
            &self.values,
            &b.col_ptr,
            &b.row_idx,
            &b.values,
            &mut col_ptr,
            &mut row_idx,
            &mut values,
            op,
        );
        finish(&mut row_idx, &mut values, config);

        let mut c = SparseMatrixCSC {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            col_ptr,
            row_idx,
            values,
        };
        if config.sort_indices {
            c.sort_indices();
        }
        log::debug!("csc {:?}: {}x{} -> nnz {}", op, self.n_rows, self.n_cols, c.nnz());
        Ok(c)
    }

    pub fn plus(&self, b: &SparseMatrixCSC<T>) -> SparseMatrixCSC<T> {
        self.elementwise(b, BinaryOp::Add)
    }

    pub fn minus(&self, b: &SparseMatrixCSC<T>) -> SparseMatrixCSC<T> {
        self.elementwise(b, BinaryOp::Sub)
    }

    pub fn multiply_elementwise(&self, b: &SparseMatrixCSC<T>) -> SparseMatrixCSC<T> {
        self.elementwise(b, BinaryOp::Mul)
    }

    pub fn divide_elementwise(&self, b: &SparseMatrixCSC<T>) -> SparseMatrixCSC<T> {
        self.elementwise(b, BinaryOp::Div)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // [1 0 2]
    // [0 3 0]
    fn a() -> SparseMatrixCSR<i64> {
        SparseMatrixCSR::new(2, 3, vec![0, 2, 3], vec![0, 2, 1], vec![1, 2, 3])
    }

    // [1 0]
    // [0 1]
    // [4 0]
    fn b() -> SparseMatrixCSR<i64> {
        SparseMatrixCSR::new(3, 2, vec![0, 1, 2, 3], vec![0, 1, 0], vec![1, 1, 4])
    }

    #[test]
    fn test_matmul_matches_dense() {
        let c = a().matmul(&b());
        // [9 0]
        // [0 3]
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.to_dense(), ndarray::array![[9, 0], [0, 3]]);
    }

    #[test]
    fn test_try_matmul_reports_mismatch() {
        let err = a().try_matmul(&a()).unwrap_err();
        assert_eq!(
            err,
            SparseError::DimensionMismatch {
                op: "matmul",
                left: (2, 3),
                right: (2, 3)
            }
        );
    }

    #[test]
    #[should_panic(expected = "dimension mismatch in elementwise")]
    fn test_elementwise_shape_mismatch_panics() {
        a().plus(&b());
    }

    #[test]
    fn test_sorted_output_config() {
        let a = SparseMatrixCSR::new(1, 2, vec![0, 2], vec![0, 1], vec![1, 1]);
        let id = SparseMatrixCSR::<i64>::identity(2);

        // Drain order is the reverse of first touch
        let raw = a.matmul(&id);
        assert_eq!(raw.col_idx, vec![1, 0]);

        let sorted = a.matmul_with(&id, &SparseConfig::canonical());
        assert!(sorted.has_canonical_format());
        assert_eq!(sorted.values.capacity(), sorted.values.len());

        let sum = a.elementwise_with(&a, BinaryOp::Add, &SparseConfig::canonical());
        assert_eq!(sum.col_idx, vec![0, 1]);
        assert_eq!(sum.values, vec![2, 2]);
    }

    #[test]
    fn test_minus_self_is_empty() {
        let d = a().minus(&a());
        assert_eq!(d.nnz(), 0);
        assert_eq!(d.row_ptr, vec![0, 0, 0]);
    }

    #[test]
    fn test_csc_ops_agree_with_csr() {
        let (a, b) = (a(), b());
        let product = a.to_csc().matmul_with(&b.to_csc(), &SparseConfig::canonical());
        assert_eq!(product.to_csr(), a.matmul_with(&b, &SparseConfig::canonical()));

        let hadamard = a.to_csc().multiply_elementwise(&a.to_csc());
        let mut expected = a.multiply_elementwise(&a).to_csc();
        expected.sort_indices();
        let mut got = hadamard;
        got.sort_indices();
        assert_eq!(got, expected);
    }
}
