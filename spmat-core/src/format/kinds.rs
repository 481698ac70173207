//! Storage order and layout enums

use super::constants::config::ROW_MAJOR_VALUE;

/// Runtime tag for the two supported storage orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderKind {
    /// Entries grouped by row; compressed layout is CSR
    #[default]
    RowMajor,
    /// Entries grouped by column; compressed layout is CSC
    ColumnMajor,
}

impl OrderKind {
    /// Resolve the integer stored in a configuration document
    ///
    /// `0` selects row-major storage, any other value column-major.
    pub const fn from_config_value(value: i64) -> Self {
        if value == ROW_MAJOR_VALUE {
            OrderKind::RowMajor
        } else {
            OrderKind::ColumnMajor
        }
    }

    /// Compressed layout produced for this order
    pub const fn compressed_format(self) -> MatrixFormat {
        match self {
            OrderKind::RowMajor => MatrixFormat::Csr,
            OrderKind::ColumnMajor => MatrixFormat::Csc,
        }
    }
}

impl core::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderKind::RowMajor => write!(f, "RowMajor"),
            OrderKind::ColumnMajor => write!(f, "ColumnMajor"),
        }
    }
}

/// Physical layout currently holding a matrix's entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    /// Coordinate mapping (expanded state)
    Coo,
    /// Compressed Sparse Row
    Csr,
    /// Compressed Sparse Column
    Csc,
}

impl MatrixFormat {
    /// Whether this is one of the compressed layouts
    pub const fn is_compressed(self) -> bool {
        !matches!(self, MatrixFormat::Coo)
    }
}

impl core::fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixFormat::Coo => write!(f, "COO"),
            MatrixFormat::Csr => write!(f, "CSR"),
            MatrixFormat::Csc => write!(f, "CSC"),
        }
    }
}
