//! Single-slot sparse accumulator used by multiplication and coalescing

use num_traits::Zero;
use std::iter::FusedIterator;
use std::mem;
use std::ops::AddAssign;

use crate::accumulator::list::ColumnList;

/// Sparse row accumulator keyed by column index
///
/// `touch` adds a contribution to a column and links the column the first
/// time it is seen. `drain` hands back every touched column exactly once,
/// most recently first-touched column first, and leaves the accumulator
/// ready for the next row.
#[derive(Debug, Clone)]
pub struct SparseAccumulator<T> {
    columns: ColumnList,
    values: Vec<T>,
}

impl<T> SparseAccumulator<T>
where
    T: Copy + Zero + AddAssign,
{
    /// Create an accumulator for columns `0..n_cols`
    pub fn new(n_cols: usize) -> Self {
        Self {
            columns: ColumnList::new(n_cols),
            values: vec![T::zero(); n_cols],
        }
    }

    /// Add `val` to column `col`
    #[inline]
    pub fn touch(&mut self, col: usize, val: T) {
        self.values[col] += val;
        self.columns.insert(col);
    }

    /// Number of distinct columns touched since the last drain
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Running value of a column (zero if untouched)
    pub fn get(&self, col: usize) -> T {
        self.values[col]
    }

    /// Drain the touched columns as `(col, value)` pairs
    ///
    /// Slots are reset as they are yielded; dropping the iterator early
    /// resets the rest.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { acc: self }
    }

    /// O(n_cols) check that nothing is linked and every value is zero
    pub fn is_reset(&self) -> bool {
        self.columns.is_reset() && self.values.iter().all(|v| v.is_zero())
    }
}

/// Draining iterator returned by [`SparseAccumulator::drain`]
pub struct Drain<'a, T>
where
    T: Copy + Zero + AddAssign,
{
    acc: &'a mut SparseAccumulator<T>,
}

impl<T> Iterator for Drain<'_, T>
where
    T: Copy + Zero + AddAssign,
{
    type Item = (usize, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let col = self.acc.columns.pop()?;
        let val = mem::replace(&mut self.acc.values[col], T::zero());
        Some((col, val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.acc.columns.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> where T: Copy + Zero + AddAssign {}

impl<T> FusedIterator for Drain<'_, T> where T: Copy + Zero + AddAssign {}

impl<T> Drop for Drain<'_, T>
where
    T: Copy + Zero + AddAssign,
{
    fn drop(&mut self) {
        self.for_each(drop);
    }
}
