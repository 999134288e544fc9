//! Presence list over a dense index array
//!
//! `next[col]` doubles as the "seen" flag and the link to the column touched
//! before it. Columns are pushed at the head, so popping yields them in
//! reverse first-touch order.

/// Marks a slot that is not on the list
pub const UNVISITED: usize = usize::MAX;

/// Terminates the list (and is the head of an empty list)
pub const END: usize = usize::MAX - 1;

/// Implicit singly linked list of the columns touched in the current row
#[derive(Debug, Clone)]
pub struct ColumnList {
    next: Vec<usize>,
    head: usize,
    length: usize,
}

impl ColumnList {
    /// Creates an empty list able to hold columns `0..n_cols`
    pub fn new(n_cols: usize) -> Self {
        assert!(n_cols < END, "column dimension {} collides with list sentinels", n_cols);
        Self {
            next: vec![UNVISITED; n_cols],
            head: END,
            length: 0,
        }
    }

    /// Number of columns the list can track
    pub fn capacity(&self) -> usize {
        self.next.len()
    }

    /// Number of distinct columns touched since the last clear
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn contains(&self, col: usize) -> bool {
        self.next[col] != UNVISITED
    }

    /// Links `col` at the head if it is not on the list yet
    ///
    /// Returns `true` when the column was newly linked.
    #[inline]
    pub fn insert(&mut self, col: usize) -> bool {
        if self.next[col] != UNVISITED {
            return false;
        }
        self.next[col] = self.head;
        self.head = col;
        self.length += 1;
        true
    }

    /// Unlinks the head column and resets its slot
    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        if self.head == END {
            return None;
        }
        let col = self.head;
        self.head = self.next[col];
        self.next[col] = UNVISITED;
        self.length -= 1;
        Some(col)
    }

    /// Resets every touched slot. Costs O(len), not O(capacity).
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    /// Full O(capacity) scan confirming the list holds nothing
    pub fn is_reset(&self) -> bool {
        self.length == 0 && self.head == END && self.next.iter().all(|&n| n == UNVISITED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_order_is_reverse_first_touch() {
        let mut list = ColumnList::new(8);
        assert!(list.insert(3));
        assert!(list.insert(0));
        assert!(!list.insert(3));
        assert!(list.insert(7));

        assert_eq!(list.len(), 3);
        assert_eq!(list.pop(), Some(7));
        assert_eq!(list.pop(), Some(0));
        assert_eq!(list.pop(), Some(3));
        assert_eq!(list.pop(), None);
        assert!(list.is_reset());
    }

    #[test]
    fn test_clear_only_touches_linked_slots() {
        let mut list = ColumnList::new(1000);
        list.insert(999);
        list.insert(1);
        assert_eq!(list.next[1], 999);
        assert_eq!(list.next[999], END);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.head, END);
        assert!(list.next.iter().all(|&n| n == UNVISITED));
    }

    #[test]
    fn test_contains() {
        let mut list = ColumnList::new(4);
        list.insert(2);
        assert!(list.contains(2));
        assert!(!list.contains(1));
        list.clear();
        assert!(!list.contains(2));
    }

    #[test]
    fn test_zero_capacity() {
        let mut list = ColumnList::new(0);
        assert_eq!(list.capacity(), 0);
        assert_eq!(list.pop(), None);
        assert!(list.is_reset());
    }
}
