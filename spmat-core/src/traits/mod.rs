//! Abstract interfaces shared by sparse matrix implementations
//!
//! Traits are pure interfaces plus the zero-sized storage-order strategies.

pub mod element;
pub mod matrix;
pub mod order;

pub use element::MatrixElement;
pub use matrix::SparseMatrix;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
pub use order::{ColumnMajor, RowMajor, StorageOrder};
