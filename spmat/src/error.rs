//! Error type for matrix operations that touch I/O or configuration

use std::io;
use std::path::PathBuf;

use spmat_core::{ErrorCategory, SpmatError};

/// Errors returned by the `spmat` crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bounds, mutation, dimension or layout violation
    #[error(transparent)]
    Matrix(#[from] SpmatError),

    /// File could not be opened
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Read failed part way through a stream
    #[error("read failed: {0}")]
    Read(#[from] io::Error),

    /// Token could not be parsed as the expected item
    #[error("line {line}: expected {expected}, found {token:?}")]
    Parse {
        line: usize,
        token: String,
        expected: &'static str,
    },

    /// Input ended before the declared content was consumed
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    /// Configuration document is not valid JSON for the expected schema
    #[cfg(feature = "serde")]
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Classify this error into the core taxonomy
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Matrix(err) => err.category(),
            Error::Open { .. } | Error::Read(_) | Error::UnexpectedEof { .. } => ErrorCategory::Io,
            Error::Parse { .. } => ErrorCategory::Format,
            #[cfg(feature = "serde")]
            Error::Config(_) => ErrorCategory::Format,
        }
    }
}

/// Result type for `spmat` operations
pub type Result<T> = std::result::Result<T, Error>;
