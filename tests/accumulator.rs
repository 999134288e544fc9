//! Integration tests for accumulators

use sparsetools::{ColumnList, PairAccumulator, SparseAccumulator};

#[test]
fn test_row_products_by_hand() {
    // A = [1 2 0; 0 3 4; 5 0 6]
    // B = [7 0 0; 0 8 0; 0 0 9]
    // C = [7 16 0; 0 24 36; 35 0 54]
    let a_rows: [&[(usize, f64)]; 3] = [&[(0, 1.0), (1, 2.0)], &[(1, 3.0), (2, 4.0)], &[(0, 5.0), (2, 6.0)]];
    let b_diag = [7.0, 8.0, 9.0];
    let expected = [vec![(0, 7.0), (1, 16.0)], vec![(1, 24.0), (2, 36.0)], vec![(0, 35.0), (2, 54.0)]];

    let mut acc = SparseAccumulator::new(3);
    for (row, want) in a_rows.iter().zip(&expected) {
        for &(k, a_val) in row.iter() {
            acc.touch(k, a_val * b_diag[k]);
        }
        let mut got: Vec<_> = acc.drain().collect();
        got.sort_by_key(|&(col, _)| col);
        assert_eq!(&got, want);
        assert!(acc.is_reset());
    }
}

#[test]
fn test_drain_order_is_reverse_first_touch() {
    let mut acc = SparseAccumulator::new(10);
    acc.touch(4, 1);
    acc.touch(9, 1);
    acc.touch(4, 1);
    acc.touch(0, 1);

    let cols: Vec<_> = acc.drain().map(|(col, _)| col).collect();
    assert_eq!(cols, vec![0, 9, 4]);
}

#[test]
fn test_cancelled_value_still_listed() {
    let mut acc = SparseAccumulator::new(3);
    acc.touch(1, 2.5);
    acc.touch(1, -2.5);

    let drained: Vec<_> = acc.drain().collect();
    assert_eq!(drained, vec![(1, 0.0)]);
}

#[test]
fn test_abandoned_drain_resets() {
    let mut acc = SparseAccumulator::new(6);
    for col in 0..6 {
        acc.touch(col, col as i64 + 1);
    }

    {
        let mut drain = acc.drain();
        assert_eq!(drain.len(), 6);
        assert_eq!(drain.next(), Some((5, 6)));
    }

    assert!(acc.is_empty());
    assert!(acc.is_reset());
}

#[test]
fn test_pair_accumulator_one_sided_columns() {
    let mut acc = PairAccumulator::new(4);
    acc.touch_left(0, 1.0);
    acc.touch_right(3, 2.0);
    acc.touch_left(3, 5.0);

    let mut drained: Vec<_> = acc.drain().collect();
    drained.sort_by_key(|&(col, _, _)| col);

    assert_eq!(drained, vec![(0, 1.0, 0.0), (3, 5.0, 2.0)]);
    assert!(acc.is_reset());
}

#[test]
fn test_column_list_clear_is_local() {
    let mut list = ColumnList::new(1000);
    assert!(list.insert(999));
    assert!(list.insert(0));
    assert!(!list.insert(999));
    assert_eq!(list.len(), 2);

    list.clear();
    assert!(list.is_empty());
    assert!(!list.contains(999));
    assert!(list.is_reset());
}
