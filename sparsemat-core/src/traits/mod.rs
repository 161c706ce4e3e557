//! Abstract interfaces for sparse containers
//!
//! This module defines the trait abstractions used across the crate:
//! the numeric element bound and the read-only access traits.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{MatrixOperations, SparseAccess};
