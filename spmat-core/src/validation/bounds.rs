//! Index and dimension validation
//!
//! These checks run on every element access and multiplication, and on
//! shapes declared by external input.

use crate::SpmatError;

/// Validate that `(row, col)` lies inside a `rows x cols` matrix
#[inline]
pub const fn validate_index(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<(), SpmatError> {
    if row >= rows || col >= cols {
        return Err(SpmatError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(())
}

/// Largest row or column count whose compressed offset array fits in memory
///
/// A compressed matrix stores `outer_len + 1` offsets, and a `Vec<usize>`
/// may not span more than `isize::MAX` bytes.
pub const MAX_DIMENSION: usize = isize::MAX as usize / core::mem::size_of::<usize>() - 1;

/// Validate that a `rows x cols` matrix can be compressed in either order
#[inline]
pub const fn validate_shape(rows: usize, cols: usize) -> Result<(), SpmatError> {
    if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
        return Err(SpmatError::ShapeTooLarge { rows, cols });
    }
    Ok(())
}

/// Validate that a dense vector conforms to the matrix column count
#[inline]
pub const fn validate_vector_len(len: usize, cols: usize) -> Result<(), SpmatError> {
    if len != cols {
        return Err(SpmatError::DimensionMismatch {
            expected: cols,
            actual: len,
        });
    }
    Ok(())
}
