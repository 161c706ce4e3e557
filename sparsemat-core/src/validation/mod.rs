//! Validation utilities for sparse containers
//!
//! This module contains pure validation functions used by the row and
//! matrix accessors before any storage is touched.

pub mod bounds;

pub use bounds::{check_dimensions, check_index, check_product_shape, check_same_shape};
