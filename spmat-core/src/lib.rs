#![no_std]

//! spmat-core - Sparse Matrix Definitions
//!
//! This crate provides the element and storage-order traits, error
//! taxonomy, layout descriptors and pure validation helpers shared by
//! sparse matrix implementations. It performs no I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::{
    parse_one_based, parse_usize, validate_compressed_layout, validate_index, validate_shape,
    validate_vector_len, MAX_DIMENSION,
};
