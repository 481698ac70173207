//! Sparse matrix with switchable expanded and compressed storage
//!
//! A [`Matrix`] starts out *expanded*: entries live in a sorted coordinate
//! map and can be inserted freely. [`Matrix::compress`] drains the map into
//! CSR (row-major) or CSC (column-major) arrays, after which existing
//! entries can still be overwritten but new coordinates are rejected.
//! [`Matrix::uncompress`] goes back.
//!
//! The storage order is a type parameter, so every `Matrix<T, RowMajor>` is
//! CSR when compressed and every `Matrix<T, ColumnMajor>` is CSC.

mod compress;
mod display;
mod storage;

use std::collections::BTreeMap;
use std::marker::PhantomData;

use spmat_core::{
    validate_index, validate_shape, MatrixElement, MatrixFormat, OrderKind, RowMajor,
    SparseMatrix, SpmatError, StorageOrder,
};
use tracing::debug;

pub use storage::CompressedStorage;
use storage::Storage;

/// Sparse matrix with a fixed storage order `O`
#[derive(Debug, Clone)]
pub struct Matrix<T, O = RowMajor> {
    rows: usize,
    cols: usize,
    storage: Storage<T>,
    _order: PhantomData<O>,
}

impl<T: MatrixElement, O: StorageOrder> Default for Matrix<T, O> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T: MatrixElement, O: StorageOrder> Matrix<T, O> {
    /// Create an empty `rows x cols` matrix in the expanded state
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            storage: Storage::empty(),
            _order: PhantomData,
        }
    }

    /// Build an expanded matrix from `(row, col, value)` triplets
    ///
    /// Later triplets overwrite earlier ones at the same coordinate.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self, SpmatError>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        validate_shape(rows, cols)?;
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in triplets {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Set new dimensions and drop every stored entry
    ///
    /// This does not reshape: the result is an empty expanded matrix even
    /// when the old matrix was compressed or the new shape is larger.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        debug!(
            from_rows = self.rows,
            from_cols = self.cols,
            rows,
            cols,
            dropped = self.storage.nnz(),
            "resizing matrix"
        );
        self.rows = rows;
        self.cols = cols;
        self.storage = Storage::empty();
    }

    /// Whether the matrix currently holds compressed arrays
    pub fn is_compressed(&self) -> bool {
        matches!(self.storage, Storage::Compressed(_))
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Dimensions as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of explicitly stored entries, zero-valued ones included
    pub fn nnz(&self) -> usize {
        self.storage.nnz()
    }

    /// Storage order of this matrix type
    pub fn order(&self) -> OrderKind {
        O::KIND
    }

    /// Current physical layout
    pub fn format(&self) -> MatrixFormat {
        match self.storage {
            Storage::Expanded(_) => MatrixFormat::Coo,
            Storage::Compressed(_) => O::FORMAT,
        }
    }

    /// Compressed arrays, if the matrix is compressed
    pub fn compressed(&self) -> Option<&CompressedStorage<T>> {
        match &self.storage {
            Storage::Compressed(compressed) => Some(compressed),
            Storage::Expanded(_) => None,
        }
    }

    /// Read the entry at `(row, col)`
    ///
    /// Absent entries read as `T::ZERO`. Never changes the sparsity
    /// pattern; use this for every read-only access.
    pub fn get(&self, row: usize, col: usize) -> Result<T, SpmatError> {
        validate_index(row, col, self.rows, self.cols)?;
        let (outer, inner) = O::to_outer_inner(row, col);

        let value = match &self.storage {
            Storage::Expanded(map) => map.get(&(outer, inner)).copied(),
            Storage::Compressed(compressed) => compressed
                .position(outer, inner)
                .map(|pos| compressed.values[pos]),
        };
        Ok(value.unwrap_or(T::ZERO))
    }

    /// Mutable handle to the entry at `(row, col)`
    ///
    /// Expanded: inserts a `T::ZERO` entry first if the coordinate is
    /// absent, so even a read through this handle grows the pattern.
    /// Compressed: fails with `UnsupportedMutation` for absent coordinates.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, SpmatError> {
        validate_index(row, col, self.rows, self.cols)?;
        let (outer, inner) = O::to_outer_inner(row, col);

        match &mut self.storage {
            Storage::Expanded(map) => Ok(map.entry((outer, inner)).or_insert(T::ZERO)),
            Storage::Compressed(compressed) => match compressed.position(outer, inner) {
                Some(pos) => Ok(&mut compressed.values[pos]),
                None => Err(SpmatError::UnsupportedMutation { row, col }),
            },
        }
    }

    /// Write `value` at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), SpmatError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Iterate stored entries as `(row, col, value)` in storage order
    pub fn iter(&self) -> Box<dyn Iterator<Item = (usize, usize, T)> + '_> {
        match &self.storage {
            Storage::Expanded(map) => Box::new(map.iter().map(|(&(outer, inner), &value)| {
                let (row, col) = O::to_row_col(outer, inner);
                (row, col, value)
            })),
            Storage::Compressed(compressed) => {
                Box::new((0..compressed.outer_len()).flat_map(move |outer| {
                    compressed.outer_slice(outer).map(move |pos| {
                        let (row, col) = O::to_row_col(outer, compressed.inner_index[pos]);
                        (row, col, compressed.values[pos])
                    })
                }))
            }
        }
    }

    /// Snapshot of the stored entries keyed by `(row, col)`
    pub fn to_entries(&self) -> BTreeMap<(usize, usize), T> {
        self.iter()
            .map(|(row, col, value)| ((row, col), value))
            .collect()
    }
}

impl<T: MatrixElement, O: StorageOrder> SparseMatrix for Matrix<T, O> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Result<T, SpmatError> {
        self.get(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        self.shape()
    }

    fn nnz(&self) -> usize {
        self.storage.nnz()
    }
}
