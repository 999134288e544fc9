//! Two-slot accumulator for elementwise combination
//!
//! Both operands share one presence list, so a column seen in either row
//! is drained once with both running values.

use num_traits::Zero;
use std::iter::FusedIterator;
use std::mem;
use std::ops::AddAssign;

use crate::accumulator::list::ColumnList;

#[derive(Debug, Clone)]
pub struct PairAccumulator<T> {
    columns: ColumnList,
    left: Vec<T>,
    right: Vec<T>,
}

impl<T> PairAccumulator<T>
where
    T: Copy + Zero + AddAssign,
{
    pub fn new(n_cols: usize) -> Self {
        Self {
            columns: ColumnList::new(n_cols),
            left: vec![T::zero(); n_cols],
            right: vec![T::zero(); n_cols],
        }
    }

    /// Add `val` to the left operand's slot for `col`
    #[inline]
    pub fn touch_left(&mut self, col: usize, val: T) {
        self.left[col] += val;
        self.columns.insert(col);
    }

    /// Add `val` to the right operand's slot for `col`
    #[inline]
    pub fn touch_right(&mut self, col: usize, val: T) {
        self.right[col] += val;
        self.columns.insert(col);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Drain as `(col, left, right)`; an operand that never touched `col`
    /// reports zero
    pub fn drain(&mut self) -> PairDrain<'_, T> {
        PairDrain { acc: self }
    }

    pub fn is_reset(&self) -> bool {
        self.columns.is_reset()
            && self.left.iter().all(|v| v.is_zero())
            && self.right.iter().all(|v| v.is_zero())
    }
}

pub struct PairDrain<'a, T>
where
    T: Copy + Zero + AddAssign,
{
    acc: &'a mut PairAccumulator<T>,
}

impl<T> Iterator for PairDrain<'_, T>
where
    T: Copy + Zero + AddAssign,
{
    type Item = (usize, T, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let col = self.acc.columns.pop()?;
        let a = mem::replace(&mut self.acc.left[col], T::zero());
        let b = mem::replace(&mut self.acc.right[col], T::zero());
        Some((col, a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.acc.columns.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for PairDrain<'_, T> where T: Copy + Zero + AddAssign {}

impl<T> FusedIterator for PairDrain<'_, T> where T: Copy + Zero + AddAssign {}

impl<T> Drop for PairDrain<'_, T>
where
    T: Copy + Zero + AddAssign,
{
    fn drop(&mut self) {
        self.for_each(drop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_presence() {
        let mut acc = PairAccumulator::<f64>::new(4);
        acc.touch_left(0, 1.0);
        acc.touch_right(2, 3.0);
        acc.touch_right(0, 2.0);
        assert_eq!(acc.len(), 2);

        let drained: Vec<_> = acc.drain().collect();
        assert_eq!(drained, vec![(2, 0.0, 3.0), (0, 1.0, 2.0)]);
        assert!(acc.is_reset());
    }

    #[test]
    fn test_duplicates_within_one_side() {
        let mut acc = PairAccumulator::<i32>::new(3);
        acc.touch_left(1, 2);
        acc.touch_left(1, 3);
        let drained: Vec<_> = acc.drain().collect();
        assert_eq!(drained, vec![(1, 5, 0)]);
    }
}
