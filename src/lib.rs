//! # sparsetools: sparse matrix kernels
//!
//! Row-at-a-time kernels for compressed sparse matrices, all built around a
//! dense-array linked-list accumulator that can be cleared in time
//! proportional to the number of columns it touched.
//!
//! ## Overview
//!
//! - **Accumulators** ([`accumulator`]): the column list and the value
//!   accumulators layered on it.
//! - **Kernels** ([`kernels`]): slice-level routines over raw
//!   pointer/index/value arrays.
//!   - Counting-sort conversion between COO, CSR and CSC
//!   - Two-pass (symbolic then numeric) sparse matrix product
//!   - Elementwise add, subtract, multiply and divide
//!   - In-place duplicate coalescing
//! - **Matrix types** ([`matrix`]): owned CSR, CSC and COO containers
//!   with checked constructors over the kernels.
//!
//! Compressed rows are not required to be sorted. Conversions and
//! coalescing produce sorted output; products and elementwise results
//! list each row in accumulator drain order unless
//! [`SparseConfig::sort_indices`] is set.
//!
//! ## Usage
//!
//! ```
//! use sparsetools::{SparseConfig, SparseMatrixCOO};
//!
//! // [1 0]
//! // [2 3]
//! let coo = SparseMatrixCOO::new(2, 2, vec![0, 1, 1], vec![0, 0, 1], vec![1.0, 2.0, 3.0]);
//! let a = coo.to_csr();
//!
//! let c = a.matmul_with(&a, &SparseConfig::canonical());
//! assert_eq!(c.col_idx, vec![0, 0, 1]);
//! assert_eq!(c.values, vec![1.0, 8.0, 9.0]);
//! ```
//!
//! The kernels can also be called directly on borrowed arrays:
//!
//! ```
//! use sparsetools::kernels::csr_plus_csr;
//!
//! let (mut cp, mut cj, mut cx) = (Vec::new(), Vec::new(), Vec::new());
//! csr_plus_csr(1, 2, &[0, 1], &[0], &[1], &[0, 1], &[1], &[2], &mut cp, &mut cj, &mut cx);
//! assert_eq!(cp, vec![0, 2]);
//! assert_eq!(cx.iter().sum::<i32>(), 3);
//! ```

pub mod accumulator;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use accumulator::{ColumnList, PairAccumulator, SparseAccumulator};
pub use error::{Result, SparseError};
pub use kernels::BinaryOp;
pub use matrix::{SparseConfig, SparseMatrixCOO, SparseMatrixCSC, SparseMatrixCSR};
pub use utils::{from_sprs_csc, from_sprs_csr, to_sprs_csc, to_sprs_csr};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
