//! Coordinate (COO) matrix format implementation

use std::fmt;
use std::ops::AddAssign;

use num_traits::Num;

use crate::error::Result;
use crate::kernels;

/// A sparse matrix as a list of `(row, col, value)` triples
///
/// Triples may repeat a position and may be in any order. Duplicates are
/// summed, and zero sums dropped, when converting to a compressed format.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCOO<T> {
    pub n_rows: usize,
    pub n_cols: usize,
    pub row_idx: Vec<usize>,
    pub col_idx: Vec<usize>,
    pub values: Vec<T>,
}

impl<T> SparseMatrixCOO<T>
where
    T: Copy + Num + AddAssign,
{
    /// Creates a COO matrix from parallel triple arrays
    ///
    /// # Panics
    ///
    /// Panics if the arrays differ in length or an index is out of range.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_idx: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        Self::try_new(n_rows, n_cols, row_idx, col_idx, values).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Checked form of [`new`](Self::new)
    pub fn try_new(
        n_rows: usize,
        n_cols: usize,
        row_idx: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        kernels::check_coordinates(n_rows, n_cols, &row_idx, &col_idx, values.len())?;
        Ok(Self {
            n_rows,
            n_cols,
            row_idx,
            col_idx,
            values,
        })
    }

    /// Creates an empty matrix with room for `capacity` triples
    pub fn with_capacity(n_rows: usize, n_cols: usize, capacity: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_idx: Vec::with_capacity(capacity),
            col_idx: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Number of stored triples, duplicates included
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Appends a triple
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the matrix.
    pub fn push(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < self.n_rows && col < self.n_cols,
            "entry ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.n_rows,
            self.n_cols
        );
        self.row_idx.push(row);
        self.col_idx.push(col);
        self.values.push(value);
    }

    /// Iterates over the stored triples in insertion order
    pub fn triplet_iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.row_idx
            .iter()
            .zip(&self.col_idx)
            .zip(&self.values)
            .map(|((&i, &j), &v)| (i, j, v))
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrixCOO<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCOO {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.values.len())?;

        let max_elements = 10.min(self.values.len());
        for n in 0..max_elements {
            writeln!(f, "    ({}, {}): {:?}", self.row_idx[n], self.col_idx[n], self.values[n])?;
        }
        if self.values.len() > max_elements {
            writeln!(f, "    ... ({} more)", self.values.len() - max_elements)?;
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iter() {
        let mut coo = SparseMatrixCOO::with_capacity(2, 3, 3);
        coo.push(1, 2, 5);
        coo.push(0, 0, 1);
        coo.push(1, 2, -5);

        assert_eq!(coo.nnz(), 3);
        let triples: Vec<_> = coo.triplet_iter().collect();
        assert_eq!(triples, vec![(1, 2, 5), (0, 0, 1), (1, 2, -5)]);
    }

    #[test]
    #[should_panic(expected = "out of bounds for 2x3 matrix")]
    fn test_push_out_of_bounds() {
        let mut coo = SparseMatrixCOO::with_capacity(2, 3, 1);
        coo.push(0, 3, 1.0);
    }

    #[test]
    fn test_try_new_rejects_length_mismatch() {
        let result = SparseMatrixCOO::try_new(2, 2, vec![0, 1], vec![0], vec![1.0, 2.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_dimension_rejects_entries() {
        assert!(SparseMatrixCOO::try_new(0, 3, vec![0], vec![0], vec![1]).is_err());
        assert!(SparseMatrixCOO::<i32>::try_new(0, 3, vec![], vec![], vec![]).is_ok());
    }
}
