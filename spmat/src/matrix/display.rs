//! Human-readable dumps of either representation
//!
//! Expanded matrices print as a dense grid; compressed matrices print their
//! three raw arrays. Neither form is meant to be parsed back.

use std::fmt;

use spmat_core::{MatrixElement, StorageOrder};

use super::storage::Storage;
use super::Matrix;

fn write_array<V: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    items: &[V],
) -> fmt::Result {
    write!(f, "{label}: [ ")?;
    for item in items {
        write!(f, "{item} ")?;
    }
    writeln!(f, "]")
}

impl<T: MatrixElement, O: StorageOrder> fmt::Display for Matrix<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.storage {
            Storage::Expanded(map) => {
                writeln!(f, "Matrix:")?;
                for row in 0..self.rows {
                    for col in 0..self.cols {
                        let value = map
                            .get(&O::to_outer_inner(row, col))
                            .copied()
                            .unwrap_or(T::ZERO);
                        write!(f, "{value:>4} ")?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
            Storage::Compressed(compressed) => {
                writeln!(f, "Compressed matrix in {} format:", O::FORMAT)?;
                write_array(f, "values", &compressed.values)?;
                write_array(f, "inner_index", &compressed.inner_index)?;
                write_array(f, "outer_offset", &compressed.outer_offset)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use spmat_core::{ColumnMajor, RowMajor};

    use super::*;

    #[test]
    fn test_expanded_grid() {
        let m: Matrix<i32> = Matrix::from_triplets(2, 3, [(0, 0, 1), (1, 2, 42)]).unwrap();
        assert_eq!(m.to_string(), "Matrix:\n   1    0    0 \n   0    0   42 \n");
    }

    #[test]
    fn test_compressed_arrays() {
        let mut m: Matrix<i32, ColumnMajor> =
            Matrix::from_triplets(2, 3, [(0, 0, 1), (1, 2, 42)]).unwrap();
        m.compress();
        assert_eq!(
            m.to_string(),
            "Compressed matrix in CSC format:\n\
             values: [ 1 42 ]\n\
             inner_index: [ 0 1 ]\n\
             outer_offset: [ 0 1 1 2 ]\n"
        );

        let mut r: Matrix<i32, RowMajor> = Matrix::new(1, 1);
        r.compress();
        assert!(r.to_string().starts_with("Compressed matrix in CSR format:"));
    }
}
