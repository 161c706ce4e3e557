//! sparsemat - Sparse matrices with lazy insertion and merge arithmetic
//!
//! This library stores matrices in which only explicitly assigned entries
//! occupy memory. Each row is a column-sorted entry list; matrices are
//! built from such rows and support transpose, multiplication and
//! elementwise arithmetic.
//!
//! ## Architecture
//!
//! - **sparsemat-core**: the containers, errors and validation (`no_std` + `alloc`)
//! - **sparsemat**: std conveniences on top: triplet building, configurable
//!   rendering and occupancy statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsemat::{SparseMatrix, SparseError};
//!
//! fn example() -> Result<(), SparseError> {
//!     let mut a = SparseMatrix::new(2, 3)?;
//!     a.set(0, 1, 2.0)?;
//!     a.set(1, 2, 4.0)?;
//!
//!     let product = a.multiply(&a.tr())?;
//!     assert_eq!(product.get(1, 1)?, 16.0);
//!     println!("{product}");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export the core containers and abstractions
pub use sparsemat_core::{
    // Containers
    Entry, RowMut, SparseMatrix, SparseRow,
    // Traits
    MatrixElement, MatrixOperations, SparseAccess,
    // Error handling
    ErrorCategory, Result, SparseError,
    // Validation utilities
    check_dimensions, check_index, check_product_shape, check_same_shape,
};

pub mod builder;
pub mod render;
pub mod stats;

pub use builder::{DuplicatePolicy, MatrixBuilder};
pub use render::{render_matrix, render_row, RenderConfig};
pub use stats::MatrixStats;
