//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements and multiplied against dense vectors.

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Mul};
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
///
/// Elements must be cheap to copy, printable for diagnostics, parseable
/// from the exchange text format, and closed under the `+`/`*` used by
/// the matrix-vector product.
pub trait MatrixElement:
    Copy
    + PartialEq
    + Debug
    + Display
    + FromStr
    + Add<Output = Self>
    + Mul<Output = Self>
    + AddAssign
{
    /// Value read back for coordinates with no stored entry
    const ZERO: Self;
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $zero:expr;)*) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_matrix_element! {
    f32 => 0.0;
    f64 => 0.0;
    i32 => 0;
    i64 => 0;
    u32 => 0;
    u64 => 0;
}
