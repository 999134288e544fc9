//! Conversion functions between matrix formats
//!
//! CSR and CSC are converted into each other with the counting-sort
//! kernels, so the output is sorted along its inner dimension but keeps any
//! duplicates of the input. COO input is coalesced on the way in.

use std::ops::AddAssign;

use num_traits::Num;

use crate::kernels;
use crate::matrix::{SparseMatrixCOO, SparseMatrixCSC, SparseMatrixCSR};

impl<T: Copy + Num + AddAssign> SparseMatrixCSR<T> {
    /// Converts this CSR matrix to CSC format
    pub fn to_csc(&self) -> SparseMatrixCSC<T> {
        let nnz = self.nnz();
        let mut col_ptr = vec![0; self.n_cols + 1];
        let mut row_idx = vec![0; nnz];
        let mut values = vec![T::zero(); nnz];

        kernels::csr_tocsc(
            self.n_rows,
            self.n_cols,
            &self.row_ptr,
            &self.col_idx,
            &self.values,
            &mut col_ptr,
            &mut row_idx,
            &mut values,
        );

        SparseMatrixCSC {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            col_ptr,
            row_idx,
            values,
        }
    }

    /// Returns Aᵀ in CSR format
    ///
    /// The CSC arrays of A are the CSR arrays of Aᵀ.
    pub fn transpose(&self) -> SparseMatrixCSR<T> {
        let csc = self.to_csc();
        SparseMatrixCSR {
            n_rows: csc.n_cols,
            n_cols: csc.n_rows,
            row_ptr: csc.col_ptr,
            col_idx: csc.row_idx,
            values: csc.values,
        }
    }

    /// Converts to COO, one triple per stored entry in storage order
    pub fn to_coo(&self) -> SparseMatrixCOO<T> {
        let mut coo = SparseMatrixCOO::with_capacity(self.n_rows, self.n_cols, self.nnz());
        kernels::csr_tocoo(
            self.n_rows,
            self.n_cols,
            &self.row_ptr,
            &self.col_idx,
            &self.values,
            &mut coo.row_idx,
            &mut coo.col_idx,
            &mut coo.values,
        );
        coo
    }
}

impl<T: Copy + Num + AddAssign> SparseMatrixCSC<T> {
    /// Converts this CSC matrix to CSR format
    pub fn to_csr(&self) -> SparseMatrixCSR<T> {
        let nnz = self.nnz();
        let mut row_ptr = vec![0; self.n_rows + 1];
        let mut col_idx = vec![0; nnz];
        let mut values = vec![T::zero(); nnz];

        kernels::csc_tocsr(
            self.n_rows,
            self.n_cols,
            &self.col_ptr,
            &self.row_idx,
            &self.values,
            &mut row_ptr,
            &mut col_idx,
            &mut values,
        );

        SparseMatrixCSR {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Returns Aᵀ in CSC format
    pub fn transpose(&self) -> SparseMatrixCSC<T> {
        let csr = self.to_csr();
        SparseMatrixCSC {
            n_rows: csr.n_cols,
            n_cols: csr.n_rows,
            col_ptr: csr.row_ptr,
            row_idx: csr.col_idx,
            values: csr.values,
        }
    }

    pub fn to_coo(&self) -> SparseMatrixCOO<T> {
        let mut coo = SparseMatrixCOO::with_capacity(self.n_rows, self.n_cols, self.nnz());
        kernels::csc_tocoo(
            self.n_rows,
            self.n_cols,
            &self.col_ptr,
            &self.row_idx,
            &self.values,
            &mut coo.row_idx,
            &mut coo.col_idx,
            &mut coo.values,
        );
        coo
    }
}

impl<T: Copy + Num + AddAssign> SparseMatrixCOO<T> {
    /// Converts to canonical CSR: sorted rows, duplicates summed, no zeros
    pub fn to_csr(&self) -> SparseMatrixCSR<T> {
        let mut row_ptr = vec![0; self.n_rows + 1];
        let mut col_idx = Vec::new();
        let mut values = Vec::new();

        kernels::coo_tocsr(
            self.n_rows,
            self.n_cols,
            &self.row_idx,
            &self.col_idx,
            &self.values,
            &mut row_ptr,
            &mut col_idx,
            &mut values,
        );

        SparseMatrixCSR {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Converts to canonical CSC
    pub fn to_csc(&self) -> SparseMatrixCSC<T> {
        let mut col_ptr = vec![0; self.n_cols + 1];
        let mut row_idx = Vec::new();
        let mut values = Vec::new();

        kernels::coo_tocsc(
            self.n_rows,
            self.n_cols,
            &self.row_idx,
            &self.col_idx,
            &self.values,
            &mut col_ptr,
            &mut row_idx,
            &mut values,
        );

        SparseMatrixCSC {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            col_ptr,
            row_idx,
            values,
        }
    }
}
