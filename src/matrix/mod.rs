// Matrix data structures and operations

pub mod config;
pub mod conversion;
pub mod coo;
pub mod csc;
pub mod csr;
pub mod ops;

pub use config::SparseConfig;
pub use coo::SparseMatrixCOO;
pub use csc::SparseMatrixCSC;
pub use csr::SparseMatrixCSR;
