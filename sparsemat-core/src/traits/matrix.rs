//! Format-agnostic access traits for sparse containers
//!
//! These traits describe read access only. The concrete containers in
//! this crate implement them on top of their checked accessors.

use alloc::vec::Vec;

use super::element::MatrixElement;

/// Core read trait for sparse storage
///
/// This is the minimal lookup interface shared by rows and matrices. It
/// never fails: positions that are unstored or out of bounds yield `None`.
/// Callers that need to distinguish the two use the checked `get`
/// accessors on the concrete types instead.
pub trait SparseAccess {
    /// The element type stored
    type Element: MatrixElement;

    /// Get the stored element at the specified position
    ///
    /// Returns `None` if no entry is stored there or if the position is
    /// out of bounds. An explicitly stored zero is returned as `Some`.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored entries, explicit zeros included
    fn nnz(&self) -> usize;

    /// Fraction of positions that hold a stored entry
    fn density(&self) -> f64 {
        let (rows, cols) = self.dimensions();
        let total = rows as f64 * cols as f64;
        if total == 0.0 {
            return 0.0;
        }
        self.nnz() as f64 / total
    }
}

/// Extension trait for whole-row and whole-column reads
pub trait MatrixOperations: SparseAccess {
    /// Get all stored entries in a row as `(col, value)`, in column order
    ///
    /// Returns an empty vector for an out-of-range row.
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Get all stored entries in a column as `(row, value)`, in row order
    ///
    /// Returns an empty vector for an out-of-range column.
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
