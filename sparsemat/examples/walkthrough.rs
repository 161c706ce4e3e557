//! Walkthrough of sparse rows and matrices
//!
//! Builds rows and matrices from literal values and prints them with the
//! standard rendering.
//!
//! Usage:
//!     RUST_LOG=debug cargo run --example walkthrough -- --precision 2

use clap::Parser;
use sparsemat::{MatrixStats, RenderConfig, SparseMatrix, SparseRow};

#[derive(Parser)]
#[command(author, version, about = "Walk through sparse row and matrix operations")]
struct Cli {
    /// Fixed number of decimals for stored values
    #[arg(long)]
    precision: Option<usize>,
}

const RULE: &str = "_______________________";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut render = RenderConfig::default();
    if let Some(precision) = cli.precision {
        render = render.with_precision(precision);
    }

    rows_and_copies(&render)?;
    subtraction(&render)?;
    checks()?;
    square_and_transpose(&render)?;
    rectangular_product(&render)?;
    Ok(())
}

fn rows_and_copies(render: &RenderConfig) -> sparsemat::Result<()> {
    let mut list = SparseRow::new(5)?;
    println!("Starting List: {}", render.render_row(&list));
    println!("Setting some elements...");
    list.set(0, 1.0)?;
    list.set(3, 4.5)?;
    list.set(4, 9.0)?;
    list.set(4, 10.0)?;

    for col in [0, 3, 4] {
        println!("Element at [{col}]: {}", list.get(col)?);
    }
    println!("----------------");
    println!("Current List: {}", render.render_row(&list));

    let another = list.clone();
    println!("Copy of List: {}", render.render_row(&another));
    println!("{RULE}");
    Ok(())
}

fn subtraction(render: &RenderConfig) -> sparsemat::Result<()> {
    let lhs = SparseRow::from_entries(5, [(0, 1.0), (3, 2.0)])?;
    let rhs = SparseRow::from_entries(5, [(0, 2.0), (1, 4.0), (3, 1.0)])?;
    println!("Subtracting lists: ");
    println!(
        "{} - {} = {}",
        render.render_row(&lhs),
        render.render_row(&rhs),
        render.render_row(&(&lhs - &rhs))
    );
    println!("{RULE}");
    Ok(())
}

fn checks() -> sparsemat::Result<()> {
    let report = |name: &str, passed: bool| {
        let verdict = if passed { "Passed" } else { "Failed" };
        println!("{verdict} {name} Unit Test");
    };

    let a = SparseMatrix::from_triplets(3, 5, &[(0, 1, 1.0), (0, 4, 5.0), (1, 2, 2.0), (2, 2, 3.0)])?;
    let b = SparseMatrix::from_triplets(
        5,
        3,
        &[(0, 0, 1.0), (1, 1, 6.0), (2, 2, 2.0), (3, 0, 0.0), (3, 2, 3.0)],
    )?;
    let c = a.multiply(&b)?;
    report(
        "Multiply",
        c.dimensions() == (3, 3) && c.get(0, 1)? == 6.0 && c.get(1, 2)? == 4.0 && c.get(2, 2)? == 6.0,
    );

    let a = SparseMatrix::from_triplets(2, 3, &[(0, 1, 1.0), (0, 2, 2.0), (1, 0, 3.0), (1, 1, 4.0), (1, 2, 5.0)])?;
    let b = a.clone();
    let same_counts = a.rows().zip(b.rows()).all(|(x, y)| x.nnz() == y.nnz());
    report("Equals", b.dimensions() == a.dimensions() && same_counts && b == a);

    let a = SparseMatrix::from_triplets(3, 5, &[(0, 0, 2.0), (0, 2, 1.0), (0, 3, 9.0), (1, 4, 4.0), (2, 1, 7.0)])?;
    let b = a.tr();
    report(
        "Transpose",
        b.dimensions() == (5, 3)
            && a.nnz() == b.nnz()
            && b.get(0, 0)? == 2.0
            && b.get(1, 2)? == 7.0
            && b.get(2, 0)? == 1.0
            && b.get(3, 0)? == 9.0
            && b.get(4, 1)? == 4.0,
    );
    println!("{RULE}");
    Ok(())
}

fn square_and_transpose(render: &RenderConfig) -> sparsemat::Result<()> {
    let matrix = SparseMatrix::from_triplets(3, 5, &[(0, 0, 1.0), (1, 1, 2.0), (2, 2, 3.0), (2, 4, 4.0)])?;
    let transposed = matrix.tr();
    println!(
        "The transpose of\n{} is \n\n{}\n",
        render.render_matrix(&matrix),
        render.render_matrix(&transposed)
    );

    let square = matrix.multiply(&transposed)?;
    println!(
        "The square of\n{} is \n\n{}\n",
        render.render_matrix(&matrix),
        render.render_matrix(&square)
    );
    println!("{}", MatrixStats::from_matrix(&square));
    println!("{RULE}");
    Ok(())
}

fn rectangular_product(render: &RenderConfig) -> sparsemat::Result<()> {
    let a = SparseMatrix::from_triplets(2, 3, &[(0, 0, 1.0), (0, 1, 2.0), (1, 1, 4.0)])?;
    let b = SparseMatrix::from_triplets(3, 2, &[(0, 0, 3.0), (1, 1, 2.0)])?;
    let c = a.multiply(&b)?;
    println!(
        "{}\n*\n{}\nis\n\n{}",
        render.render_matrix(&a),
        render.render_matrix(&b),
        render.render_matrix(&c)
    );
    Ok(())
}
