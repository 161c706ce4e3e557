//! Index and shape validation for sparse containers
//!
//! Pure checks with no side effects. Every accessor in the crate runs one
//! of these before it touches storage, so a failed call never leaves a
//! partially mutated row or matrix behind.

use crate::SparseError;

/// Validate that `index` lies in `[0, bound)`
pub const fn check_index(index: usize, bound: usize) -> Result<usize, SparseError> {
    if index >= bound {
        return Err(SparseError::IndexOutOfRange { index, bound });
    }
    Ok(index)
}

/// Validate construction dimensions
///
/// Both dimensions must be nonzero; a zero-sized structure is rejected
/// rather than silently produced.
pub const fn check_dimensions(rows: usize, cols: usize) -> Result<(usize, usize), SparseError> {
    if rows == 0 || cols == 0 {
        return Err(SparseError::InvalidDimensions { rows, cols });
    }
    Ok((rows, cols))
}

/// Validate that `left * right` is defined
///
/// Returns the shape of the product.
pub const fn check_product_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(usize, usize), SparseError> {
    if left.1 != right.0 {
        return Err(SparseError::DimensionMismatch { left, right });
    }
    Ok((left.0, right.1))
}

/// Validate that two operands have the same shape
pub fn check_same_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(usize, usize), SparseError> {
    if left != right {
        return Err(SparseError::DimensionMismatch { left, right });
    }
    Ok(left)
}
