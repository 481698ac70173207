//! Error types for sparse matrix operations

/// Errors that can occur while accessing or transforming a sparse matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Row or column index is not below the matrix dimension
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Write to a coordinate that is absent from the compressed layout
    UnsupportedMutation { row: usize, col: usize },
    /// Vector length does not match the matrix column count
    DimensionMismatch { expected: usize, actual: usize },
    /// Declared shape is too large for a compressed offset array
    ShapeTooLarge { rows: usize, cols: usize },
    /// Exchange-format header is missing its comment marker
    InvalidHeader,
    /// Exchange-format integer token is malformed, or a 1-based index is 0
    InvalidIndex,
    /// Compressed arrays violate the offset/index invariants
    CorruptedLayout,
}

/// Coarse classification of errors, independent of the variant payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Bounds,
    Mutation,
    Dimension,
    Format,
    Io,
}

impl SpmatError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmatError::IndexOutOfBounds { .. } => ErrorCategory::Bounds,
            SpmatError::UnsupportedMutation { .. } => ErrorCategory::Mutation,
            SpmatError::DimensionMismatch { .. } | SpmatError::ShapeTooLarge { .. } => {
                ErrorCategory::Dimension
            }
            SpmatError::InvalidHeader | SpmatError::InvalidIndex | SpmatError::CorruptedLayout => {
                ErrorCategory::Format
            }
        }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Index ({row}, {col}) out of bounds for {rows}x{cols} matrix"
            ),
            SpmatError::UnsupportedMutation { row, col } => write!(
                f,
                "Cannot insert ({row}, {col}): matrix is in compressed state"
            ),
            SpmatError::DimensionMismatch { expected, actual } => write!(
                f,
                "Dimension mismatch: expected vector of length {expected}, got {actual}"
            ),
            SpmatError::ShapeTooLarge { rows, cols } => {
                write!(f, "Shape {rows}x{cols} exceeds the supported matrix size")
            }
            SpmatError::InvalidHeader => write!(f, "Invalid Matrix Market header"),
            SpmatError::InvalidIndex => write!(f, "Invalid index token"),
            SpmatError::CorruptedLayout => write!(f, "Compressed layout is inconsistent"),
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for core sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        let err = SpmatError::IndexOutOfBounds {
            row: 3,
            col: 0,
            rows: 3,
            cols: 4,
        };
        assert_eq!(err.category(), ErrorCategory::Bounds);
        assert_eq!(
            SpmatError::UnsupportedMutation { row: 1, col: 1 }.category(),
            ErrorCategory::Mutation
        );
        assert_eq!(
            SpmatError::DimensionMismatch {
                expected: 4,
                actual: 3
            }
            .category(),
            ErrorCategory::Dimension
        );
        assert_eq!(
            SpmatError::ShapeTooLarge {
                rows: usize::MAX,
                cols: 1
            }
            .category(),
            ErrorCategory::Dimension
        );
        assert_eq!(SpmatError::InvalidHeader.category(), ErrorCategory::Format);
        assert_eq!(SpmatError::CorruptedLayout.category(), ErrorCategory::Format);
    }
}
