//! Matrix Market coordinate reader
//!
//! Reads the text exchange format:
//!
//! ```text
//! %%MatrixMarket matrix coordinate real general
//! % optional comments
//! 3 4 6
//! 1 1 1.0
//! ...
//! ```
//!
//! The first non-blank line must start with `%`. Then come the row count,
//! column count and entry count, followed by that many `row col value`
//! triplets with 1-based indices. Tokens are consumed as a stream, so line
//! breaks inside the data are not significant; later `%` lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::time::Instant;

use spmat_core::{
    constants::{BANNER_PREFIX, COMMENT_MARKER, SIZE_LINE_FIELDS},
    parse_one_based, parse_usize, validate_shape, MatrixElement, SpmatError, StorageOrder,
};
use tracing::{debug, info, trace};

use crate::error::{Error, Result};
use crate::matrix::Matrix;

const SIZE_LINE_LABELS: [&str; SIZE_LINE_FIELDS] = ["row count", "column count", "entry count"];

/// Whitespace-separated tokens with their 1-based line numbers
struct TokenStream<R> {
    lines: Lines<R>,
    line: usize,
    pending: std::vec::IntoIter<String>,
}

impl<R: BufRead> TokenStream<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            pending: Vec::new().into_iter(),
        }
    }

    /// First non-blank line, which must carry the comment marker
    fn header(&mut self) -> Result<String> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if !trimmed.starts_with(COMMENT_MARKER) {
                return Err(SpmatError::InvalidHeader.into());
            }
            return Ok(trimmed.to_owned());
        }
        Err(SpmatError::InvalidHeader.into())
    }

    fn next_token(&mut self, expected: &'static str) -> Result<(usize, String)> {
        loop {
            if let Some(token) = self.pending.next() {
                return Ok((self.line, token));
            }
            let Some(line) = self.lines.next() else {
                return Err(Error::UnexpectedEof { expected });
            };
            let line = line?;
            self.line += 1;
            if line.trim_start().starts_with(COMMENT_MARKER) {
                continue;
            }
            self.pending = line
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }

    fn next_usize(&mut self, expected: &'static str) -> Result<usize> {
        let (line, token) = self.next_token(expected)?;
        parse_usize(&token).map_err(|_| Error::Parse {
            line,
            token,
            expected,
        })
    }

    fn next_index(&mut self, expected: &'static str) -> Result<usize> {
        let (line, token) = self.next_token(expected)?;
        parse_one_based(&token).map_err(|_| Error::Parse {
            line,
            token,
            expected,
        })
    }

    fn next_value<T: MatrixElement>(&mut self) -> Result<T> {
        let expected = "value";
        let (line, token) = self.next_token(expected)?;
        token.parse::<T>().map_err(|_| Error::Parse {
            line,
            token,
            expected,
        })
    }
}

impl<T: MatrixElement, O: StorageOrder> Matrix<T, O> {
    /// Load a Matrix Market file into a new expanded matrix
    pub fn from_matrix_market<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut matrix = Self::default();
        matrix.read_matrix_market(path)?;
        Ok(matrix)
    }

    /// Replace this matrix with the contents of a Matrix Market file
    ///
    /// The matrix is resized to the declared shape first, which discards
    /// every previous entry. On error the matrix holds whatever was read
    /// up to the failing token. A header or size line that fails to parse,
    /// or a shape above [`MAX_DIMENSION`](spmat_core::MAX_DIMENSION),
    /// leaves the matrix untouched.
    pub fn read_matrix_market<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened Matrix Market file");
        self.read_from(BufReader::new(file))
    }

    /// Replace this matrix with Matrix Market data from any buffered reader
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let start = Instant::now();
        let mut tokens = TokenStream::new(reader);

        let header = tokens.header()?;
        if !header.starts_with(BANNER_PREFIX) {
            trace!(%header, "header lacks the MatrixMarket banner");
        }

        let [rows_label, cols_label, nnz_label] = SIZE_LINE_LABELS;
        let rows = tokens.next_usize(rows_label)?;
        let cols = tokens.next_usize(cols_label)?;
        let nnz = tokens.next_usize(nnz_label)?;
        info!(rows, cols, nnz, "reading Matrix Market data");
        validate_shape(rows, cols)?;

        self.resize(rows, cols);
        for _ in 0..nnz {
            let row = tokens.next_index("row index")?;
            let col = tokens.next_index("column index")?;
            let value = tokens.next_value::<T>()?;
            *self.get_mut(row, col)? = value;
        }

        debug!(
            nnz = self.nnz(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Matrix Market data loaded"
        );
        Ok(())
    }
}
