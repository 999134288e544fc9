//! Structural checks for kernel operands
//!
//! `check_*` return the first problem found. The `assert_*` forms are what
//! the kernels call: a malformed operand is a bug in the caller, so they
//! panic with the error's message.

use crate::error::{Result, SparseError};

/// Validate a compressed triple with `n_outer` pointer slots and inner
/// indices bounded by `n_inner`
///
/// O(n_outer + nnz).
pub fn check_compressed(
    n_outer: usize,
    n_inner: usize,
    ptr: &[usize],
    idx: &[usize],
    n_values: usize,
) -> Result<()> {
    check_pointer(n_outer, ptr, idx.len(), n_values)?;
    check_indices(idx, n_inner)
}

/// Validate only the pointer array and buffer lengths. O(n_outer).
pub fn check_pointer(n_outer: usize, ptr: &[usize], n_indices: usize, n_values: usize) -> Result<()> {
    if ptr.len() != n_outer + 1 {
        return Err(SparseError::PointerLength {
            len: ptr.len(),
            expected: n_outer + 1,
        });
    }
    if ptr[0] != 0 {
        return Err(SparseError::PointerStart { first: ptr[0] });
    }
    for (idx, w) in ptr.windows(2).enumerate() {
        if w[0] > w[1] {
            return Err(SparseError::PointerNotMonotonic {
                idx,
                curr: w[0],
                next: w[1],
            });
        }
    }
    if n_indices != n_values {
        return Err(SparseError::LengthMismatch {
            indices: n_indices,
            values: n_values,
        });
    }
    if ptr[n_outer] != n_indices {
        return Err(SparseError::PointerEnd {
            last: ptr[n_outer],
            nnz: n_indices,
        });
    }
    Ok(())
}

/// Validate coordinate triples against an `n_row × n_col` shape
pub fn check_coordinates(
    n_row: usize,
    n_col: usize,
    ai: &[usize],
    aj: &[usize],
    n_values: usize,
) -> Result<()> {
    if ai.len() != aj.len() || ai.len() != n_values {
        return Err(SparseError::LengthMismatch {
            indices: ai.len().max(aj.len()),
            values: n_values,
        });
    }
    check_indices(ai, n_row)?;
    check_indices(aj, n_col)
}

fn check_indices(idx: &[usize], bound: usize) -> Result<()> {
    match idx.iter().position(|&i| i >= bound) {
        Some(position) => Err(SparseError::IndexOutOfBounds {
            position,
            index: idx[position],
            bound,
        }),
        None => Ok(()),
    }
}

#[track_caller]
pub(crate) fn assert_compressed(n_outer: usize, n_inner: usize, ptr: &[usize], idx: &[usize], n_values: usize) {
    if let Err(err) = check_compressed(n_outer, n_inner, ptr, idx, n_values) {
        panic!("invalid compressed operand: {}", err);
    }
}

#[track_caller]
pub(crate) fn assert_coordinates(n_row: usize, n_col: usize, ai: &[usize], aj: &[usize], n_values: usize) {
    if let Err(err) = check_coordinates(n_row, n_col, ai, aj, n_values) {
        panic!("invalid coordinate operand: {}", err);
    }
}

/// Output slices must be at least as long as the kernel will write
#[track_caller]
pub(crate) fn assert_output_len(name: &str, len: usize, required: usize) {
    assert!(
        len >= required,
        "output {} has length {}, need at least {}",
        name,
        len,
        required
    );
}
