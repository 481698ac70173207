//! Layout and format descriptors shared by every matrix implementation
//!
//! Pure enum definitions and exchange-format constants. No I/O.

pub mod constants;
pub mod kinds;

pub use kinds::{MatrixFormat, OrderKind};
