#![no_std]

//! sparsemat-core - Sparse rows and sparse matrices
//!
//! This crate provides the core containers: a [`SparseRow`] holding
//! column-sorted `(column, value)` entries with lazy insertion on write,
//! and a [`SparseMatrix`] built from such rows with transpose and matrix
//! multiplication. Everything here is `no_std` with `alloc`.
//!
//! Every accessor validates its indices and fails with a [`SparseError`]
//! before touching storage.

extern crate alloc;

pub mod entry;
pub mod error;
pub mod matrix;
pub mod row;
pub mod traits;
pub mod validation;

pub use entry::Entry;
pub use error::*;
pub use matrix::{RowMut, SparseMatrix};
pub use row::SparseRow;
pub use traits::{MatrixElement, MatrixOperations, SparseAccess};
pub use validation::{check_dimensions, check_index, check_product_shape, check_same_shape};
