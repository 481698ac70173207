//! Validation utilities for sparse matrix layouts
//!
//! Pure functions with no I/O: index bounds, vector conformance,
//! compressed-array consistency and exchange-format token parsing.

pub mod bounds;
pub mod layout;
pub mod parsing;

pub use bounds::{validate_index, validate_shape, validate_vector_len, MAX_DIMENSION};
pub use layout::validate_compressed_layout;
pub use parsing::{parse_one_based, parse_usize};
