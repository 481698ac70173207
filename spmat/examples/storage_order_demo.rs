//! Pick a storage order from JSON, show both layouts, and time products
//!
//! ```text
//! cargo run --example storage_order_demo -- --config storage_order.json --matrix lnsp_131.mtx
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use spmat::{
    ColumnMajor, DynamicMatrix, Matrix, OrderKind, RowMajor, StorageConfig, StorageOrder,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Compare expanded and compressed sparse matrix storage")]
struct Cli {
    /// JSON file with a `storage_order` key (0 = row-major)
    #[arg(long, default_value = "storage_order.json")]
    config: PathBuf,

    /// Override the configured order instead of reading the config file
    #[arg(long, value_parser = ["row", "column"])]
    order: Option<String>,

    /// Matrix Market file to load and benchmark
    #[arg(long)]
    matrix: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let order = match cli.order.as_deref() {
        Some("row") => OrderKind::RowMajor,
        Some(_) => OrderKind::ColumnMajor,
        None if cli.config.exists() => StorageConfig::from_json_file(&cli.config)?.order_kind(),
        None => {
            println!(
                "Config '{}' not found, using default order",
                cli.config.display()
            );
            StorageConfig::default().order_kind()
        }
    };
    println!("Selected storage order: {order}");

    match order {
        OrderKind::RowMajor => run::<RowMajor>(cli.matrix.as_deref()),
        OrderKind::ColumnMajor => run::<ColumnMajor>(cli.matrix.as_deref()),
    }
}

fn run<O: StorageOrder>(matrix_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>>
where
    DynamicMatrix<f64>: From<Matrix<f64, O>>,
{
    let mut mat: Matrix<f64, O> = Matrix::new(3, 4);
    for (row, col, value) in [
        (0, 0, 1.0),
        (0, 1, 2.0),
        (0, 3, 3.0),
        (1, 1, 4.0),
        (1, 2, 5.0),
        (2, 3, 6.0),
    ] {
        mat.set(row, col, value)?;
    }

    print!("{mat}");
    mat.compress();
    print!("{mat}");
    mat.uncompress();
    print!("{mat}");

    let Some(path) = matrix_path else {
        println!("No --matrix given, skipping timing run");
        return Ok(());
    };

    let mut mat: DynamicMatrix<f64> = mat.into();
    mat.read_matrix_market(path)?;
    println!(
        "Loaded {}: {} x {}, {} entries",
        path.display(),
        mat.nrows(),
        mat.ncols(),
        mat.nnz()
    );
    let x = vec![1.0; mat.ncols()];

    let start = Instant::now();
    let y_expanded = mat.multiply(&x)?;
    let multiply_expanded = start.elapsed();

    let start = Instant::now();
    mat.compress();
    let compress_time = start.elapsed();

    let start = Instant::now();
    let y_compressed = mat.multiply(&x)?;
    let multiply_compressed = start.elapsed();

    println!(
        "Compression time: {} microseconds",
        compress_time.as_micros()
    );
    println!(
        "Matrix-vector product before compression took: {} microseconds",
        multiply_expanded.as_micros()
    );
    println!(
        "Matrix-vector product after compression took: {} microseconds",
        multiply_compressed.as_micros()
    );

    let max_diff = y_expanded
        .iter()
        .zip(&y_compressed)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    println!("Max difference between products: {max_diff:e}");

    Ok(())
}
