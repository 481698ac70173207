//! Loading Matrix Market files from disk

use std::io::Write;

use spmat::{
    ColumnMajor, DynamicMatrix, Error, ErrorCategory, Matrix, OrderKind, RowMajor, SpmatError,
};
use tempfile::NamedTempFile;

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SCENARIO: &str = "%%MatrixMarket matrix coordinate real general\n\
                        3 4 6\n\
                        1 1 1.0\n\
                        1 2 2.0\n\
                        1 4 3.0\n\
                        2 2 4.0\n\
                        2 3 5.0\n\
                        3 4 6.0\n";

#[test]
fn single_entry_file() {
    let file = write_file("%\n2 2 1\n1 1 5.0\n");
    let matrix = Matrix::<f64, RowMajor>::from_matrix_market(file.path()).unwrap();

    assert_eq!(matrix.shape(), (2, 2));
    assert_eq!(matrix.get(0, 0), Ok(5.0));
    for (row, col) in [(0, 1), (1, 0), (1, 1)] {
        assert_eq!(matrix.get(row, col), Ok(0.0));
    }
}

#[test]
fn loaded_matrix_multiplies_in_both_states() {
    let file = write_file(SCENARIO);
    let mut matrix = Matrix::<f64, ColumnMajor>::from_matrix_market(file.path()).unwrap();
    let ones = vec![1.0; 4];

    assert_eq!(matrix.multiply(&ones).unwrap(), [6.0, 9.0, 6.0]);
    matrix.compress();
    assert_eq!(matrix.multiply(&ones).unwrap(), [6.0, 9.0, 6.0]);
    assert_eq!(matrix.compressed().unwrap().outer_offset(), [0, 1, 3, 4, 6]);
}

#[test]
fn dynamic_matrix_from_file() {
    let file = write_file(SCENARIO);
    for order in [OrderKind::RowMajor, OrderKind::ColumnMajor] {
        let mut matrix = DynamicMatrix::<f64>::from_matrix_market(order, file.path()).unwrap();
        assert_eq!(matrix.order(), order);
        assert_eq!(matrix.nnz(), 6);
        matrix.compress();
        assert_eq!(matrix.get(1, 2), Ok(5.0));
    }
}

#[test]
fn reading_into_existing_matrix_resizes() {
    let file = write_file(SCENARIO);
    let mut matrix: Matrix<f64> = Matrix::new(100, 100);
    matrix.set(99, 99, 1.0).unwrap();
    matrix.compress();

    matrix.read_matrix_market(file.path()).unwrap();
    assert!(!matrix.is_compressed());
    assert_eq!(matrix.shape(), (3, 4));
    assert_eq!(matrix.nnz(), 6);
}

#[test]
fn rejects_missing_header() {
    let file = write_file("2 2 1\n1 1 5.0\n");
    let err = Matrix::<f64, RowMajor>::from_matrix_market(file.path()).unwrap_err();
    assert!(matches!(err, Error::Matrix(SpmatError::InvalidHeader)));
    assert_eq!(err.category(), ErrorCategory::Format);
}

#[test]
fn reports_unopenable_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.mtx");
    let err = Matrix::<f64, RowMajor>::from_matrix_market(&missing).unwrap_err();
    assert!(matches!(err, Error::Open { ref path, .. } if path == &missing));
    assert_eq!(err.category(), ErrorCategory::Io);
}
