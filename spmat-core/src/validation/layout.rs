//! Compressed layout validation
//!
//! Checks the offset/index invariants of a CSR or CSC triple. The arrays
//! are described in outer/inner terms so one routine covers both orders.

use crate::SpmatError;

/// Validate compressed arrays against the outer and inner axis sizes
///
/// Requirements:
/// - `outer_offset.len() == outer_len + 1`
/// - `outer_offset[0] == 0` and `outer_offset[outer_len] == values_len`
/// - offsets are non-decreasing
/// - `inner_index.len() == values_len`
/// - inner indices are `< inner_len` and strictly increasing in each slice
pub fn validate_compressed_layout(
    outer_offset: &[usize],
    inner_index: &[usize],
    values_len: usize,
    outer_len: usize,
    inner_len: usize,
) -> Result<(), SpmatError> {
    if outer_len.checked_add(1) != Some(outer_offset.len()) || inner_index.len() != values_len {
        return Err(SpmatError::CorruptedLayout);
    }
    if outer_offset[0] != 0 || outer_offset[outer_len] != values_len {
        return Err(SpmatError::CorruptedLayout);
    }

    for window in outer_offset.windows(2) {
        let (start, end) = (window[0], window[1]);
        if start > end || end > values_len {
            return Err(SpmatError::CorruptedLayout);
        }

        let mut previous: Option<usize> = None;
        for &inner in &inner_index[start..end] {
            if inner >= inner_len {
                return Err(SpmatError::CorruptedLayout);
            }
            if previous.is_some_and(|p| inner <= p) {
                return Err(SpmatError::CorruptedLayout);
            }
            previous = Some(inner);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_layouts() {
        // 3x4 row-major example: rows {0,1,3}, {1,2}, {3}
        let offsets = [0, 3, 5, 6];
        let inner = [0, 1, 3, 1, 2, 3];
        assert_eq!(validate_compressed_layout(&offsets, &inner, 6, 3, 4), Ok(()));

        // Empty outer slices in the middle and at the end
        let offsets = [0, 1, 1, 2, 2];
        let inner = [0, 2];
        assert_eq!(validate_compressed_layout(&offsets, &inner, 2, 4, 3), Ok(()));

        // 0x0 matrix
        assert_eq!(validate_compressed_layout(&[0], &[], 0, 0, 0), Ok(()));
    }

    #[test]
    fn test_invalid_layouts() {
        // Wrong offset length
        assert_eq!(
            validate_compressed_layout(&[0, 1], &[0], 1, 2, 2),
            Err(SpmatError::CorruptedLayout)
        );
        // Outer length at the top of the address space
        assert_eq!(
            validate_compressed_layout(&[0], &[], 0, usize::MAX, 1),
            Err(SpmatError::CorruptedLayout)
        );
        // Last offset does not equal nnz
        assert_eq!(
            validate_compressed_layout(&[0, 1, 1], &[0, 1], 2, 2, 2),
            Err(SpmatError::CorruptedLayout)
        );
        // Decreasing offsets
        assert_eq!(
            validate_compressed_layout(&[0, 2, 1, 2], &[0, 1], 2, 3, 2),
            Err(SpmatError::CorruptedLayout)
        );
        // Inner index out of range
        assert_eq!(
            validate_compressed_layout(&[0, 1], &[5], 1, 1, 2),
            Err(SpmatError::CorruptedLayout)
        );
        // Duplicate inner index inside one slice
        assert_eq!(
            validate_compressed_layout(&[0, 2], &[1, 1], 2, 1, 2),
            Err(SpmatError::CorruptedLayout)
        );
    }
}
