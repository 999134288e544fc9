//! Error types for malformed operands
//!
//! Kernels treat every variant here as a precondition violation: they panic
//! with the error's message instead of returning it. The `check_*` helpers
//! and the `try_new` constructors hand the same values back to callers that
//! want to validate untrusted input first.

use thiserror::Error;

/// Reasons a compressed or coordinate operand is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseError {
    #[error("pointer array has length {len}, expected {expected}")]
    PointerLength { len: usize, expected: usize },

    #[error("pointer array must start at 0, found {first}")]
    PointerStart { first: usize },

    #[error("pointer array decreases at index {idx}: {curr} > {next}")]
    PointerNotMonotonic { idx: usize, curr: usize, next: usize },

    #[error("pointer array ends at {last} but {nnz} entries are stored")]
    PointerEnd { last: usize, nnz: usize },

    #[error("length mismatch: {indices} indices but {values} values")]
    LengthMismatch { indices: usize, values: usize },

    #[error("index {index} at position {position} out of bounds (dimension {bound})")]
    IndexOutOfBounds {
        position: usize,
        index: usize,
        bound: usize,
    },

    #[error("dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("dense array has shape {got:?}, expected {expected:?}")]
    DenseShape {
        expected: (usize, usize),
        got: (usize, usize),
    },
}

pub type Result<T> = std::result::Result<T, SparseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SparseError::PointerNotMonotonic {
            idx: 2,
            curr: 5,
            next: 3,
        };
        assert_eq!(err.to_string(), "pointer array decreases at index 2: 5 > 3");

        let err = SparseError::DimensionMismatch {
            op: "matmat",
            left: (2, 3),
            right: (4, 5),
        };
        assert_eq!(err.to_string(), "dimension mismatch in matmat: (2, 3) vs (4, 5)");
    }
}
