//! Compressed Sparse Row (CSR) matrix format implementation

use std::fmt;
use std::ops::AddAssign;

use ndarray::{Array2, ArrayView2};
use num_traits::Num;

use crate::error::Result;
use crate::kernels;

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// The CSR format stores a sparse matrix using three arrays:
/// - row_ptr: Array of size n_rows + 1 containing indices into col_idx and values arrays
/// - col_idx: Array of size nnz containing column indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// Column indices within a row are not required to be sorted or unique.
/// Conversions and [`sum_duplicates`](Self::sum_duplicates) produce sorted
/// rows; products and elementwise results keep the accumulator's order.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCSR<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    /// row_ptr[i] is the index in col_idx and values where row i starts
    /// row_ptr[n_rows] is equal to nnz
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz)
    pub col_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num + AddAssign,
{
    /// Creates a new CSR matrix with the given dimensions and data
    ///
    /// # Panics
    ///
    /// Panics with the [`SparseError`](crate::SparseError) message if the
    /// arrays do not describe an `n_rows × n_cols` matrix.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        Self::try_new(n_rows, n_cols, row_ptr, col_idx, values).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Checked form of [`new`](Self::new)
    pub fn try_new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        kernels::check_compressed(n_rows, n_cols, &row_ptr, &col_idx, values.len())?;
        Ok(Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
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

    /// Returns an iterator over the stored elements in row i
    ///
    /// Each item is a tuple (col_idx, value) in storage order
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Iterates over all stored `(row, col, value)` triples
    pub fn triplet_iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.n_rows).flat_map(move |i| self.row_iter(i).map(move |(j, &v)| (i, j, v)))
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_ptr: vec![0; n_rows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self {
            n_rows: n,
            n_cols: n,
            row_ptr: (0..=n).collect(),
            col_idx: (0..n).collect(),
            values: vec![T::one(); n],
        }
    }

    /// True when every row has strictly increasing column indices
    pub fn has_canonical_format(&self) -> bool {
        kernels::csr_has_canonical_format(self.n_rows, &self.row_ptr, &self.col_idx)
    }

    /// Sorts the column indices of every row
    pub fn sort_indices(&mut self) {
        kernels::csr_sort_indices(
            self.n_rows,
            self.n_cols,
            &self.row_ptr,
            &mut self.col_idx,
            &mut self.values,
        );
    }

    /// Sums duplicate entries, drops explicit zeros and sorts every row
    pub fn sum_duplicates(&mut self) {
        kernels::csr_sum_duplicates(
            self.n_rows,
            self.n_cols,
            &mut self.row_ptr,
            &mut self.col_idx,
            &mut self.values,
        );
    }

    /// Main diagonal, length `min(n_rows, n_cols)`
    pub fn diagonal(&self) -> Vec<T> {
        let mut diag = vec![T::zero(); self.n_rows.min(self.n_cols)];
        kernels::csr_diagonal(
            self.n_rows,
            self.n_cols,
            &self.row_ptr,
            &self.col_idx,
            &self.values,
            &mut diag,
        );
        diag
    }

    /// Computes `A·x`
    pub fn matvec(&self, x: &[T]) -> Vec<T> {
        let mut y = vec![T::zero(); self.n_rows];
        kernels::csr_matvec(
            self.n_rows,
            self.n_cols,
            &self.row_ptr,
            &self.col_idx,
            &self.values,
            x,
            &mut y,
        );
        y
    }

    /// Copies the rows `rows` and columns `cols` into a new matrix
    pub fn submatrix(&self, rows: std::ops::Range<usize>, cols: std::ops::Range<usize>) -> Self {
        let (mut row_ptr, mut col_idx, mut values) = (Vec::new(), Vec::new(), Vec::new());
        kernels::csr_submatrix(
            self.n_rows,
            self.n_cols,
            &self.row_ptr,
            &self.col_idx,
            &self.values,
            (rows.start, rows.end),
            (cols.start, cols.end),
            &mut row_ptr,
            &mut col_idx,
            &mut values,
        );
        Self {
            n_rows: rows.len(),
            n_cols: cols.len(),
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Dense copy; duplicates are summed
    pub fn to_dense(&self) -> Array2<T> {
        kernels::csr_to_array(self.n_rows, self.n_cols, &self.row_ptr, &self.col_idx, &self.values)
    }

    /// Collects the nonzeros of a dense matrix
    pub fn from_dense(m: ArrayView2<'_, T>) -> Self {
        let (n_rows, n_cols) = m.dim();
        let (mut row_ptr, mut col_idx, mut values) = (Vec::new(), Vec::new(), Vec::new());
        kernels::dense_tocsr(m, &mut row_ptr, &mut col_idx, &mut values);
        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrixCSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSR {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.values.len())?;

        // Print a sample of the matrix content
        let max_rows_to_print = 5.min(self.n_rows);

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let start = self.row_ptr[i];
                let end = self.row_ptr[i + 1];

                if start == end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(end - start);

                    for j in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.col_idx[j], self.values[j])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_rows > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
