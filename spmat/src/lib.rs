//! spmat - Sparse Matrix with Switchable Storage
//!
//! A generic sparse matrix that lives either as a sorted coordinate map
//! (cheap inserts) or as compressed CSR/CSC arrays (fast products), and
//! converts losslessly between the two.
//!
//! ## Architecture
//!
//! - **spmat-core**: element and storage-order traits, errors, validation (no I/O)
//! - **spmat**: the matrix itself, the multiplication kernel, the Matrix
//!   Market reader and configuration loading
//!
//! ## Quick Start
//!
//! ```rust
//! use spmat::{Matrix, RowMajor};
//!
//! fn example() -> spmat::Result<()> {
//!     let mut m: Matrix<f64, RowMajor> = Matrix::new(3, 4);
//!     m.set(0, 0, 1.0)?;
//!     m.set(1, 2, 5.0)?;
//!
//!     m.compress();
//!     let y = m.multiply(&[1.0; 4])?;
//!     assert_eq!(y, [1.0, 5.0, 0.0]);
//!
//!     // Existing entries stay writable; new coordinates are rejected
//!     m.set(1, 2, 6.0)?;
//!     assert!(m.set(2, 2, 1.0).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Accessors
//!
//! [`Matrix::get`] never changes the matrix. [`Matrix::get_mut`] inserts a
//! zero entry for an absent coordinate while expanded, so use it only on
//! write paths.

// Re-export core abstractions
pub use spmat_core::{
    // Core traits
    ColumnMajor, MatrixElement, MatrixOperations, RowMajor, SparseMatrix, StorageOrder,
    // Layout descriptors
    MatrixFormat, OrderKind,
    // Error handling
    ErrorCategory, SpmatError,
};

#[cfg(feature = "serde")]
pub mod config;
pub mod dynamic;
pub mod error;
pub mod market;
pub mod matrix;
pub mod multiply;

#[cfg(feature = "serde")]
pub use config::StorageConfig;
pub use dynamic::DynamicMatrix;
pub use error::{Error, Result};
pub use matrix::{CompressedStorage, Matrix};
