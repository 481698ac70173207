//! Physical representations backing a [`Matrix`](super::Matrix)

use std::collections::BTreeMap;
use std::ops::Range;

/// Coordinate mapping keyed by `(outer, inner)`
pub(crate) type CoordinateMap<T> = BTreeMap<(usize, usize), T>;

/// The two mutually exclusive states of a matrix
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Storage<T> {
    /// Sorted coordinate mapping; accepts inserts
    Expanded(CoordinateMap<T>),
    /// CSR/CSC arrays; sparsity pattern is frozen
    Compressed(CompressedStorage<T>),
}

impl<T> Storage<T> {
    pub(crate) fn empty() -> Self {
        Storage::Expanded(BTreeMap::new())
    }

    pub(crate) fn nnz(&self) -> usize {
        match self {
            Storage::Expanded(map) => map.len(),
            Storage::Compressed(compressed) => compressed.nnz(),
        }
    }
}

/// Compressed sparse arrays grouped along the outer axis
///
/// Entries of outer slice `k` live at positions
/// `outer_offset[k]..outer_offset[k + 1]` of `values` and `inner_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedStorage<T> {
    pub(crate) values: Vec<T>,
    pub(crate) inner_index: Vec<usize>,
    pub(crate) outer_offset: Vec<usize>,
}

impl<T> CompressedStorage<T> {
    /// Stored values in outer-then-inner order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Inner-axis index of each stored value
    pub fn inner_index(&self) -> &[usize] {
        &self.inner_index
    }

    /// Start of every outer slice, followed by `nnz`
    pub fn outer_offset(&self) -> &[usize] {
        &self.outer_offset
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Size of the outer axis
    pub fn outer_len(&self) -> usize {
        self.outer_offset.len().saturating_sub(1)
    }

    /// Positions belonging to outer slice `outer`
    #[inline]
    pub fn outer_slice(&self, outer: usize) -> Range<usize> {
        self.outer_offset[outer]..self.outer_offset[outer + 1]
    }

    /// Position of `(outer, inner)` found by scanning its outer slice
    pub fn position(&self, outer: usize, inner: usize) -> Option<usize> {
        let slice = self.outer_slice(outer);
        let start = slice.start;
        self.inner_index[slice]
            .iter()
            .position(|&i| i == inner)
            .map(|offset| start + offset)
    }
}
