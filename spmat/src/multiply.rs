//! Sparse matrix times dense vector
//!
//! The product runs directly on whichever representation is active. The
//! compressed path has a single branch on storage order: CSR gathers one
//! row at a time, CSC scatters one column at a time.

use std::ops::Mul;

use spmat_core::{validate_vector_len, MatrixElement, OrderKind, SpmatError, StorageOrder};

use crate::matrix::Matrix;

impl<T: MatrixElement, O: StorageOrder> Matrix<T, O> {
    /// Compute `self * vector`
    ///
    /// `vector.len()` must equal the column count. The result has one entry
    /// per row, starting from `T::ZERO`. O(nnz) in both states.
    pub fn multiply(&self, vector: &[T]) -> Result<Vec<T>, SpmatError> {
        validate_vector_len(vector.len(), self.ncols())?;
        let mut result = vec![T::ZERO; self.nrows()];

        let Some(compressed) = self.compressed() else {
            for (row, col, value) in self.iter() {
                result[row] += value * vector[col];
            }
            return Ok(result);
        };

        let values = compressed.values();
        let inner_index = compressed.inner_index();
        match O::KIND {
            OrderKind::RowMajor => {
                for (row, slot) in result.iter_mut().enumerate() {
                    for pos in compressed.outer_slice(row) {
                        *slot += values[pos] * vector[inner_index[pos]];
                    }
                }
            }
            OrderKind::ColumnMajor => {
                for (col, &x) in vector.iter().enumerate() {
                    for pos in compressed.outer_slice(col) {
                        result[inner_index[pos]] += values[pos] * x;
                    }
                }
            }
        }

        Ok(result)
    }
}

impl<T: MatrixElement, O: StorageOrder> Mul<&[T]> for &Matrix<T, O> {
    type Output = Result<Vec<T>, SpmatError>;

    fn mul(self, vector: &[T]) -> Self::Output {
        self.multiply(vector)
    }
}

impl<T: MatrixElement, O: StorageOrder> Mul<&Vec<T>> for &Matrix<T, O> {
    type Output = Result<Vec<T>, SpmatError>;

    fn mul(self, vector: &Vec<T>) -> Self::Output {
        self.multiply(vector)
    }
}
