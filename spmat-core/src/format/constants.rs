//! Exchange-format and configuration constants

/// Comment marker that must open the first line of a Matrix Market file
pub const COMMENT_MARKER: char = '%';

/// Full banner prefix written by conforming Matrix Market producers
pub const BANNER_PREFIX: &str = "%%MatrixMarket";

/// Number of integers on the size line: rows, columns, entries
pub const SIZE_LINE_FIELDS: usize = 3;

/// Configuration document key
pub mod config {
    /// Key selecting the storage order (0 = row-major, otherwise column-major)
    pub const STORAGE_ORDER_KEY: &str = "storage_order";

    /// Value of [`STORAGE_ORDER_KEY`] that selects row-major storage
    pub const ROW_MAJOR_VALUE: i64 = 0;
}
