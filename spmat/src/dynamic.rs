//! Matrix whose storage order is chosen at runtime
//!
//! [`Matrix`] fixes its order in the type. When the order comes from a
//! configuration file, [`DynamicMatrix`] holds either variant and forwards
//! every call.

use std::fmt;
use std::path::Path;

use spmat_core::{ColumnMajor, MatrixElement, MatrixFormat, OrderKind, RowMajor, SpmatError};

use crate::error::Result;
use crate::matrix::Matrix;

/// Matrix with a runtime-selected storage order
#[derive(Debug, Clone)]
pub enum DynamicMatrix<T> {
    RowMajor(Matrix<T, RowMajor>),
    ColumnMajor(Matrix<T, ColumnMajor>),
}

impl<T: MatrixElement> DynamicMatrix<T> {
    /// Create an empty `rows x cols` matrix with the given order
    pub fn new(order: OrderKind, rows: usize, cols: usize) -> Self {
        match order {
            OrderKind::RowMajor => DynamicMatrix::RowMajor(Matrix::new(rows, cols)),
            OrderKind::ColumnMajor => DynamicMatrix::ColumnMajor(Matrix::new(rows, cols)),
        }
    }

    /// Load a Matrix Market file with the given order
    pub fn from_matrix_market<P: AsRef<Path>>(order: OrderKind, path: P) -> Result<Self> {
        let mut matrix = Self::new(order, 0, 0);
        matrix.read_matrix_market(path)?;
        Ok(matrix)
    }

    /// Storage order
    pub fn order(&self) -> OrderKind {
        match self {
            DynamicMatrix::RowMajor(m) => m.order(),
            DynamicMatrix::ColumnMajor(m) => m.order(),
        }
    }

    /// Current physical layout
    pub fn format(&self) -> MatrixFormat {
        match self {
            DynamicMatrix::RowMajor(m) => m.format(),
            DynamicMatrix::ColumnMajor(m) => m.format(),
        }
    }

    /// Get the number of rows
    pub fn nrows(&self) -> usize {
        match self {
            DynamicMatrix::RowMajor(m) => m.nrows(),
            DynamicMatrix::ColumnMajor(m) => m.nrows(),
        }
    }

    /// Get the number of columns
    pub fn ncols(&self) -> usize {
        match self {
            DynamicMatrix::RowMajor(m) => m.ncols(),
            DynamicMatrix::ColumnMajor(m) => m.ncols(),
        }
    }

    /// Get the number of stored entries
    pub fn nnz(&self) -> usize {
        match self {
            DynamicMatrix::RowMajor(m) => m.nnz(),
            DynamicMatrix::ColumnMajor(m) => m.nnz(),
        }
    }

    /// Whether the matrix currently holds compressed arrays
    pub fn is_compressed(&self) -> bool {
        match self {
            DynamicMatrix::RowMajor(m) => m.is_compressed(),
            DynamicMatrix::ColumnMajor(m) => m.is_compressed(),
        }
    }

    /// Switch to CSR or CSC arrays, matching the storage order
    pub fn compress(&mut self) {
        match self {
            DynamicMatrix::RowMajor(m) => m.compress(),
            DynamicMatrix::ColumnMajor(m) => m.compress(),
        }
    }

    /// Switch back to the coordinate map
    pub fn uncompress(&mut self) {
        match self {
            DynamicMatrix::RowMajor(m) => m.uncompress(),
            DynamicMatrix::ColumnMajor(m) => m.uncompress(),
        }
    }

    /// Set new dimensions and drop every stored entry
    pub fn resize(&mut self, rows: usize, cols: usize) {
        match self {
            DynamicMatrix::RowMajor(m) => m.resize(rows, cols),
            DynamicMatrix::ColumnMajor(m) => m.resize(rows, cols),
        }
    }

    /// Read the entry at `(row, col)`, absent entries as zero
    pub fn get(&self, row: usize, col: usize) -> std::result::Result<T, SpmatError> {
        match self {
            DynamicMatrix::RowMajor(m) => m.get(row, col),
            DynamicMatrix::ColumnMajor(m) => m.get(row, col),
        }
    }

    /// Mutable handle to the entry at `(row, col)`, inserting when expanded
    pub fn get_mut(&mut self, row: usize, col: usize) -> std::result::Result<&mut T, SpmatError> {
        match self {
            DynamicMatrix::RowMajor(m) => m.get_mut(row, col),
            DynamicMatrix::ColumnMajor(m) => m.get_mut(row, col),
        }
    }

    /// Write `value` at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: T) -> std::result::Result<(), SpmatError> {
        match self {
            DynamicMatrix::RowMajor(m) => m.set(row, col, value),
            DynamicMatrix::ColumnMajor(m) => m.set(row, col, value),
        }
    }

    /// Compute `self * vector`
    pub fn multiply(&self, vector: &[T]) -> std::result::Result<Vec<T>, SpmatError> {
        match self {
            DynamicMatrix::RowMajor(m) => m.multiply(vector),
            DynamicMatrix::ColumnMajor(m) => m.multiply(vector),
        }
    }

    /// Replace this matrix with the contents of a Matrix Market file
    pub fn read_matrix_market<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        match self {
            DynamicMatrix::RowMajor(m) => m.read_matrix_market(path),
            DynamicMatrix::ColumnMajor(m) => m.read_matrix_market(path),
        }
    }
}

impl<T: MatrixElement> fmt::Display for DynamicMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicMatrix::RowMajor(m) => fmt::Display::fmt(m, f),
            DynamicMatrix::ColumnMajor(m) => fmt::Display::fmt(m, f),
        }
    }
}

impl<T: MatrixElement> From<Matrix<T, RowMajor>> for DynamicMatrix<T> {
    fn from(matrix: Matrix<T, RowMajor>) -> Self {
        DynamicMatrix::RowMajor(matrix)
    }
}

impl<T: MatrixElement> From<Matrix<T, ColumnMajor>> for DynamicMatrix<T> {
    fn from(matrix: Matrix<T, ColumnMajor>) -> Self {
        DynamicMatrix::ColumnMajor(matrix)
    }
}
