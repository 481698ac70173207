//! Load a Matrix Market file and print a short summary

use std::time::Instant;

use spmat::{Matrix, RowMajor, SparseMatrix};

fn main() -> spmat::Result<()> {
    let filename = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "matrix.mtx".to_string());

    if !std::path::Path::new(&filename).exists() {
        println!("File '{filename}' not found!");
        println!("   Usage: cargo run --example read_matrix_market -- <file.mtx>");
        return Ok(());
    }

    println!("Reading sparse matrix from '{filename}'...");
    let start = Instant::now();
    let mut matrix = Matrix::<f64, RowMajor>::from_matrix_market(&filename)?;
    let load_time = start.elapsed();
    println!("Loaded in {:.3}ms", load_time.as_secs_f64() * 1000.0);

    let (rows, cols) = matrix.dimensions();
    println!("\nMatrix Information:");
    println!("   Dimensions: {rows} x {cols}");
    println!("   Non-zeros: {}", matrix.nnz());
    println!("   Format: {}", matrix.format());
    println!("   Sparsity: {:.6}%", matrix.density() * 100.0);

    let start = Instant::now();
    matrix.compress();
    println!(
        "\nCompressed to {} in {:.3}ms",
        matrix.format(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    if let Some(csr) = matrix.compressed() {
        let longest = (0..csr.outer_len())
            .map(|row| csr.outer_slice(row).len())
            .max()
            .unwrap_or(0);
        println!("   Longest row: {longest} entries");
    }

    Ok(())
}
