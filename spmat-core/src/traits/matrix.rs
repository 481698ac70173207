//! Core matrix abstraction trait
//!
//! This module defines the read-only interface every matrix representation
//! satisfies regardless of its current physical layout.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::MatrixElement;
use crate::error::Result;

/// Core sparse matrix trait for format-agnostic access
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get the element at the specified position
    ///
    /// Absent entries read as [`MatrixElement::ZERO`]. Fails with
    /// `IndexOutOfBounds` outside the matrix dimensions.
    fn get_element(&self, row: usize, col: usize) -> Result<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of explicitly stored entries
    fn nnz(&self) -> usize;

    /// Fraction of the dense grid occupied by stored entries
    fn density(&self) -> f64 {
        let (rows, cols) = self.dimensions();
        let cells = rows.saturating_mul(cols);
        if cells == 0 {
            0.0
        } else {
            self.nnz() as f64 / cells as f64
        }
    }
}

/// Extension trait for dense row/column extraction (requires alloc)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// Dense copy of one row, absent entries as zero
    fn dense_row(&self, row: usize) -> Result<Vec<Self::Element>> {
        let (_, cols) = self.dimensions();
        (0..cols).map(|col| self.get_element(row, col)).collect()
    }

    /// Dense copy of one column, absent entries as zero
    fn dense_col(&self, col: usize) -> Result<Vec<Self::Element>> {
        let (rows, _) = self.dimensions();
        (0..rows).map(|row| self.get_element(row, col)).collect()
    }
}

#[cfg(feature = "alloc")]
impl<M: SparseMatrix + ?Sized> MatrixOperations for M {}
