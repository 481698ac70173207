//! Storage-order strategies
//!
//! A storage order decides which axis is *outer* (grouped in the compressed
//! layout) and which is *inner* (recorded per entry). Coordinates are keyed
//! as `(outer, inner)` pairs, so lexicographic tuple order on the key is
//! exactly row-major order for [`RowMajor`] and column-major order for
//! [`ColumnMajor`].

use crate::format::{MatrixFormat, OrderKind};

/// Compile-time selection of row-major or column-major storage
pub trait StorageOrder: Copy + Default + core::fmt::Debug + 'static {
    /// Runtime tag for this order
    const KIND: OrderKind;

    /// Compressed layout produced under this order
    const FORMAT: MatrixFormat = Self::KIND.compressed_format();

    /// Map a `(row, col)` coordinate to its `(outer, inner)` key
    fn to_outer_inner(row: usize, col: usize) -> (usize, usize);

    /// Map an `(outer, inner)` key back to `(row, col)`
    fn to_row_col(outer: usize, inner: usize) -> (usize, usize);

    /// Size of the outer axis for a `rows x cols` matrix
    fn outer_len(rows: usize, cols: usize) -> usize {
        Self::to_outer_inner(rows, cols).0
    }

    /// Size of the inner axis for a `rows x cols` matrix
    fn inner_len(rows: usize, cols: usize) -> usize {
        Self::to_outer_inner(rows, cols).1
    }
}

/// Rows are the outer axis (CSR when compressed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowMajor;

/// Columns are the outer axis (CSC when compressed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnMajor;

impl StorageOrder for RowMajor {
    const KIND: OrderKind = OrderKind::RowMajor;

    #[inline]
    fn to_outer_inner(row: usize, col: usize) -> (usize, usize) {
        (row, col)
    }

    #[inline]
    fn to_row_col(outer: usize, inner: usize) -> (usize, usize) {
        (outer, inner)
    }
}

impl StorageOrder for ColumnMajor {
    const KIND: OrderKind = OrderKind::ColumnMajor;

    #[inline]
    fn to_outer_inner(row: usize, col: usize) -> (usize, usize) {
        (col, row)
    }

    #[inline]
    fn to_row_col(outer: usize, inner: usize) -> (usize, usize) {
        (inner, outer)
    }
}
