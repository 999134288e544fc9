//! Compressed Sparse Column (CSC) matrix format implementation

use std::fmt;
use std::ops::AddAssign;

use num_traits::Num;

use crate::error::Result;
use crate::kernels;

/// A sparse matrix in Compressed Sparse Column (CSC) format
///
/// The CSC format stores a sparse matrix using three arrays:
/// - col_ptr: Array of size n_cols + 1 containing indices into row_idx and values arrays
/// - row_idx: Array of size nnz containing row indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// Every operation runs the CSR kernel with rows and columns exchanged.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCSC<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Column pointers (size: n_cols + 1)
    /// col_ptr[j] is the index in row_idx and values where column j starts
    /// col_ptr[n_cols] is equal to nnz
    pub col_ptr: Vec<usize>,

    /// Row indices (size: nnz)
    pub row_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSC<T>
where
    T: Copy + Num + AddAssign,
{
    /// Creates a new CSC matrix with the given dimensions and data
    ///
    /// # Panics
    ///
    /// Panics with the [`SparseError`](crate::SparseError) message if the
    /// arrays do not describe an `n_rows × n_cols` matrix.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        Self::try_new(n_rows, n_cols, col_ptr, row_idx, values).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Checked form of [`new`](Self::new)
    pub fn try_new(
        n_rows: usize,
        n_cols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        kernels::check_compressed(n_cols, n_rows, &col_ptr, &row_idx, values.len())?;
        Ok(Self {
            n_rows,
            n_cols,
            col_ptr,
            row_idx,
            values,
        })
    }

    /// Returns the number of stored elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns an iterator over the stored elements in column j
    ///
    /// Each item is a tuple (row_idx, value) in storage order
    pub fn col_iter(&self, j: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(j < self.n_cols, "Column index out of bounds");

        let start = self.col_ptr[j];
        let end = self.col_ptr[j + 1];

        self.row_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&row, val)| (row, val))
    }

    /// Iterates over all stored `(row, col, value)` triples, column by column
    pub fn triplet_iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.n_cols).flat_map(move |j| self.col_iter(j).map(move |(i, &v)| (i, j, v)))
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            col_ptr: vec![0; n_cols + 1],
            row_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self {
            n_rows: n,
            n_cols: n,
            col_ptr: (0..=n).collect(),
            row_idx: (0..n).collect(),
            values: vec![T::one(); n],
        }
    }

    /// Builds a banded matrix from a diagonal table
    ///
    /// See [`kernels::spdiags`] for the layout of `diags`.
    pub fn from_diagonals(n_rows: usize, n_cols: usize, offsets: &[isize], diags: &[T]) -> Self {
        let (mut col_ptr, mut row_idx, mut values) = (Vec::new(), Vec::new(), Vec::new());
        kernels::spdiags(n_rows, n_cols, offsets, diags, &mut col_ptr, &mut row_idx, &mut values);
        Self {
            n_rows,
            n_cols,
            col_ptr,
            row_idx,
            values,
        }
    }

    /// True when every column has strictly increasing row indices
    pub fn has_canonical_format(&self) -> bool {
        kernels::csr_has_canonical_format(self.n_cols, &self.col_ptr, &self.row_idx)
    }

    /// Sorts the row indices of every column
    pub fn sort_indices(&mut self) {
        kernels::csc_sort_indices(
            self.n_rows,
            self.n_cols,
            &self.col_ptr,
            &mut self.row_idx,
            &mut self.values,
        );
    }

    /// Sums duplicate entries, drops explicit zeros and sorts every column
    pub fn sum_duplicates(&mut self) {
        kernels::csc_sum_duplicates(
            self.n_rows,
            self.n_cols,
            &mut self.col_ptr,
            &mut self.row_idx,
            &mut self.values,
        );
    }

    /// Main diagonal, length `min(n_rows, n_cols)`
    pub fn diagonal(&self) -> Vec<T> {
        let mut diag = vec![T::zero(); self.n_rows.min(self.n_cols)];
        kernels::csc_diagonal(
            self.n_rows,
            self.n_cols,
            &self.col_ptr,
            &self.row_idx,
            &self.values,
            &mut diag,
        );
        diag
    }

    /// Computes `A·x`
    pub fn matvec(&self, x: &[T]) -> Vec<T> {
        let mut y = vec![T::zero(); self.n_rows];
        kernels::csc_matvec(
            self.n_rows,
            self.n_cols,
            &self.col_ptr,
            &self.row_idx,
            &self.values,
            x,
            &mut y,
        );
        y
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrixCSC<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSC {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.values.len())?;

        // Print a sample of the matrix content
        let max_cols_to_print = 5.min(self.n_cols);

        if max_cols_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for j in 0..max_cols_to_print {
                write!(f, "    col {}: ", j)?;
                let start = self.col_ptr[j];
                let end = self.col_ptr[j + 1];

                if start == end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(end - start);

                    for i in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.row_idx[i], self.values[i])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_cols > max_cols_to_print {
                writeln!(f, "    ... ({} more columns)", self.n_cols - max_cols_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
