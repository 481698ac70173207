//! Randomized checks that compression never changes what a matrix holds

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spmat::{ColumnMajor, Matrix, RowMajor, StorageOrder};

/// Random matrix with integer-valued entries so products are exact in f64
fn random_matrix<O: StorageOrder>(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<f64, O> {
    let mut matrix = Matrix::new(rows, cols);
    if rows == 0 || cols == 0 {
        return matrix;
    }
    let writes = rng.gen_range(0..=rows * cols);
    for _ in 0..writes {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        // Explicit zeros are written too and must survive as stored entries
        let value = rng.gen_range(-4i32..=4) as f64;
        matrix.set(row, col, value).unwrap();
    }
    matrix
}

fn check_order<O: StorageOrder>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..50 {
        let rows = rng.gen_range(0..12);
        let cols = rng.gen_range(0..12);
        let mut matrix = random_matrix::<O>(&mut rng, rows, cols);
        let x: Vec<f64> = (0..cols).map(|_| rng.gen_range(-3i32..=3) as f64).collect();

        let entries = matrix.to_entries();
        let expanded_product = matrix.multiply(&x).unwrap();

        matrix.compress();
        assert!(matrix.is_compressed());
        assert_eq!(matrix.nnz(), entries.len());
        assert_eq!(matrix.to_entries(), entries);
        assert_eq!(matrix.multiply(&x).unwrap(), expanded_product);

        // Every coordinate reads the same in the compressed state
        for row in 0..rows {
            for col in 0..cols {
                let expected = entries.get(&(row, col)).copied().unwrap_or(0.0);
                assert_eq!(matrix.get(row, col), Ok(expected));
            }
        }

        matrix.uncompress();
        assert!(!matrix.is_compressed());
        assert_eq!(matrix.to_entries(), entries);
        assert_eq!(matrix.multiply(&x).unwrap(), expanded_product);
    }
}

#[test]
fn random_round_trip_row_major() {
    check_order::<RowMajor>(7);
}

#[test]
fn random_round_trip_column_major() {
    check_order::<ColumnMajor>(11);
}

#[test]
fn orders_agree_on_products() {
    let mut rng = StdRng::seed_from_u64(42);
    let row_major = random_matrix::<RowMajor>(&mut rng, 9, 6);
    let mut col_major: Matrix<f64, ColumnMajor> =
        Matrix::from_triplets(9, 6, row_major.iter()).unwrap();
    col_major.compress();

    let x: Vec<f64> = (0..6).map(|i| i as f64 - 2.0).collect();
    assert_eq!(row_major.multiply(&x), col_major.multiply(&x));
}
