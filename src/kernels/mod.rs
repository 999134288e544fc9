//! Raw-buffer sparse kernels
//!
//! Every kernel takes the pointer/index/value arrays of its operands as
//! slices and writes into caller-provided buffers: slices when the output
//! size is known up front, `Vec`s when it is only discovered while
//! computing. Column-major (`csc_*`) kernels are the row-major kernels
//! called with the row and column roles exchanged.
//!
//! Operands are checked on entry; malformed input panics (see
//! [`validate`]).

pub mod binop;
pub mod convert;
pub mod dense;
pub mod duplicates;
pub mod matmat;
pub mod utility;
pub mod validate;

pub use binop::{
    csc_binop_csc_op, csc_eldiv_csc, csc_elmul_csc, csc_minus_csc, csc_plus_csc, csr_binop_csr,
    csr_binop_csr_op, csr_eldiv_csr, csr_elmul_csr, csr_minus_csr, csr_plus_csr, BinaryOp,
};
pub use convert::{coo_tocsc, coo_tocsr, csc_tocoo, csc_tocsr, csr_tocoo, csr_tocsc, expand_ptr};
pub use dense::{csr_to_array, csr_todense, dense_tocsr};
pub use duplicates::{csc_sum_duplicates, csr_sum_duplicates};
pub use matmat::{
    csc_matmat, csc_matmat_pass1, csc_matmat_pass2, csr_matmat, csr_matmat_pass1, csr_matmat_pass2,
};
pub use utility::{
    csc_diagonal, csc_matvec, csc_sort_indices, csr_diagonal, csr_has_canonical_format, csr_matvec,
    csr_sort_indices, csr_submatrix, spdiags,
};
pub use validate::{check_compressed, check_coordinates, check_pointer};
