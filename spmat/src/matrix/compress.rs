//! Conversion between the coordinate map and compressed arrays

use std::time::Instant;

use spmat_core::{validate_compressed_layout, MatrixElement, StorageOrder};
use tracing::debug;

use super::storage::{CompressedStorage, CoordinateMap, Storage};
use super::Matrix;

impl<T: MatrixElement> CompressedStorage<T> {
    /// Build compressed arrays from a map already sorted outer-then-inner
    ///
    /// Outer slices with no entries get the offset of the next populated
    /// slice, so `outer_offset` is non-decreasing over `0..=outer_len`.
    pub(crate) fn from_coordinate_map(map: &CoordinateMap<T>, outer_len: usize) -> Self {
        let nnz = map.len();
        let mut values = Vec::with_capacity(nnz);
        let mut inner_index = Vec::with_capacity(nnz);
        let mut outer_offset = Vec::with_capacity(outer_len.saturating_add(1));

        for (&(outer, inner), &value) in map {
            // Open every slice up to and including `outer`
            while outer_offset.len() <= outer {
                outer_offset.push(values.len());
            }
            values.push(value);
            inner_index.push(inner);
        }
        while outer_offset.len() <= outer_len {
            outer_offset.push(values.len());
        }

        Self {
            values,
            inner_index,
            outer_offset,
        }
    }

    /// Rebuild the coordinate map
    pub(crate) fn to_coordinate_map(&self) -> CoordinateMap<T> {
        (0..self.outer_len())
            .flat_map(|outer| {
                self.outer_slice(outer)
                    .map(move |pos| ((outer, self.inner_index[pos]), self.values[pos]))
            })
            .collect()
    }
}

impl<T: MatrixElement, O: StorageOrder> Matrix<T, O> {
    /// Switch to compressed storage (CSR for row-major, CSC for column-major)
    ///
    /// No-op when already compressed. Runs in O(nnz + outer_len). The
    /// coordinate map is released only after the arrays are complete.
    ///
    /// # Panics
    ///
    /// Panics when the outer dimension exceeds
    /// [`MAX_DIMENSION`](spmat_core::MAX_DIMENSION), which only
    /// [`Matrix::new`] and [`Matrix::resize`] accept unchecked.
    pub fn compress(&mut self) {
        let Storage::Expanded(map) = &self.storage else {
            return;
        };

        let start = Instant::now();
        let outer_len = O::outer_len(self.rows, self.cols);
        let compressed = CompressedStorage::from_coordinate_map(map, outer_len);
        debug_assert_eq!(
            validate_compressed_layout(
                &compressed.outer_offset,
                &compressed.inner_index,
                compressed.values.len(),
                outer_len,
                O::inner_len(self.rows, self.cols),
            ),
            Ok(())
        );

        self.storage = Storage::Compressed(compressed);
        debug!(
            format = %O::FORMAT,
            nnz = self.nnz(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "compressed matrix"
        );
    }

    /// Switch back to the coordinate map
    ///
    /// No-op when already expanded. Runs in O(nnz).
    pub fn uncompress(&mut self) {
        let Storage::Compressed(compressed) = &self.storage else {
            return;
        };

        let start = Instant::now();
        let map = compressed.to_coordinate_map();
        self.storage = Storage::Expanded(map);
        debug!(
            nnz = self.nnz(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "uncompressed matrix"
        );
    }
}

#[cfg(test)]
mod tests {
    use spmat_core::{ColumnMajor, MatrixFormat, RowMajor};

    use super::*;

    fn scenario<O: StorageOrder>() -> Matrix<f64, O> {
        Matrix::from_triplets(
            3,
            4,
            [
                (0, 0, 1.0),
                (0, 1, 2.0),
                (0, 3, 3.0),
                (1, 1, 4.0),
                (1, 2, 5.0),
                (2, 3, 6.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_compress_row_major_arrays() {
        let mut m = scenario::<RowMajor>();
        m.compress();
        assert!(m.is_compressed());
        assert_eq!(m.format(), MatrixFormat::Csr);

        let csr = m.compressed().unwrap();
        assert_eq!(csr.values(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(csr.inner_index(), [0, 1, 3, 1, 2, 3]);
        assert_eq!(csr.outer_offset(), [0, 3, 5, 6]);
    }

    #[test]
    fn test_compress_column_major_arrays() {
        let mut m = scenario::<ColumnMajor>();
        m.compress();
        assert_eq!(m.format(), MatrixFormat::Csc);

        let csc = m.compressed().unwrap();
        assert_eq!(csc.values(), [1.0, 2.0, 4.0, 5.0, 3.0, 6.0]);
        assert_eq!(csc.inner_index(), [0, 0, 1, 1, 0, 2]);
        assert_eq!(csc.outer_offset(), [0, 1, 3, 4, 6]);
    }

    #[test]
    fn test_empty_outer_slices_are_filled() {
        // Rows 0, 2 and 4 of a 5x3 matrix are empty
        let mut m: Matrix<i32> = Matrix::from_triplets(5, 3, [(1, 2, 7), (3, 0, 8)]).unwrap();
        m.compress();
        let csr = m.compressed().unwrap();
        assert_eq!(csr.outer_offset(), [0, 0, 1, 1, 2, 2]);
        assert_eq!(m.get(3, 0), Ok(8));
        assert_eq!(m.get(4, 2), Ok(0));
    }

    #[test]
    fn test_compress_empty_matrix() {
        let mut m: Matrix<f64, ColumnMajor> = Matrix::new(2, 3);
        m.compress();
        assert!(m.is_compressed());
        assert_eq!(m.compressed().unwrap().outer_offset(), [0, 0, 0, 0]);
        assert!(m.set(0, 0, 1.0).is_err());

        let mut zero: Matrix<f64> = Matrix::default();
        zero.compress();
        assert_eq!(zero.compressed().unwrap().outer_offset(), [0]);
        zero.uncompress();
        assert_eq!(zero.nnz(), 0);
    }

    #[test]
    fn test_round_trip_preserves_entries() {
        let mut m = scenario::<ColumnMajor>();
        m.set(2, 1, 0.0).unwrap();
        let before = m.to_entries();

        m.compress();
        m.uncompress();
        assert!(!m.is_compressed());
        assert_eq!(m.to_entries(), before);
        assert_eq!(m.get(2, 1), Ok(0.0));
        assert_eq!(m.nnz(), 7);
    }

    #[test]
    fn test_idempotence() {
        let mut once = scenario::<RowMajor>();
        once.compress();
        let mut twice = scenario::<RowMajor>();
        twice.compress();
        twice.compress();
        assert_eq!(once.compressed(), twice.compressed());

        twice.uncompress();
        twice.uncompress();
        assert_eq!(twice.to_entries(), scenario::<RowMajor>().to_entries());
    }
}
