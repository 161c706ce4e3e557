//! Occupancy statistics for sparse matrices

use std::fmt;

use sparsemat_core::{MatrixElement, SparseAccess, SparseMatrix};

/// Density above which sparse storage stops paying for itself
pub const SPARSE_DENSITY_THRESHOLD: f64 = 0.1;

/// Shape and occupancy summary of a [`SparseMatrix`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixStats {
    pub rows: usize,
    pub cols: usize,
    /// Stored entries, explicit zeros included
    pub nnz: usize,
    /// Stored entries whose value is exactly zero
    pub explicit_zeros: usize,
    /// `nnz / (rows * cols)`
    pub density: f64,
    pub max_row_nnz: usize,
    pub min_row_nnz: usize,
    /// Rows with no stored entry
    pub empty_rows: usize,
}

impl MatrixStats {
    /// Collect statistics for `matrix`
    pub fn from_matrix<T: MatrixElement>(matrix: &SparseMatrix<T>) -> Self {
        let (rows, cols) = matrix.dimensions();
        let mut stats = Self {
            rows,
            cols,
            nnz: 0,
            explicit_zeros: 0,
            density: matrix.density(),
            max_row_nnz: 0,
            min_row_nnz: usize::MAX,
            empty_rows: 0,
        };

        for row in matrix.rows() {
            let count = row.nnz();
            stats.nnz += count;
            stats.max_row_nnz = stats.max_row_nnz.max(count);
            stats.min_row_nnz = stats.min_row_nnz.min(count);
            if count == 0 {
                stats.empty_rows += 1;
            }
            stats.explicit_zeros += row.iter().filter(|(_, value)| value.is_zero()).count();
        }
        stats
    }

    /// True when the matrix is sparse enough for row-list storage
    pub fn recommended_for_sparse(&self) -> bool {
        self.density < SPARSE_DENSITY_THRESHOLD
    }
}

impl fmt::Display for MatrixStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} matrix, {} stored ({} explicit zeros), density {:.4}, row occupancy {}..={}, {} empty rows",
            self.rows,
            self.cols,
            self.nnz,
            self.explicit_zeros,
            self.density,
            self.min_row_nnz,
            self.max_row_nnz,
            self.empty_rows
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let mut matrix = SparseMatrix::new(4, 5).unwrap();
        matrix.set(0, 0, 1.0).unwrap();
        matrix.set(0, 3, 0.0).unwrap();
        matrix.set(2, 4, 2.0).unwrap();

        let stats = MatrixStats::from_matrix(&matrix);
        assert_eq!((stats.rows, stats.cols), (4, 5));
        assert_eq!(stats.nnz, 3);
        assert_eq!(stats.explicit_zeros, 1);
        assert_eq!(stats.max_row_nnz, 2);
        assert_eq!(stats.min_row_nnz, 0);
        assert_eq!(stats.empty_rows, 2);
        assert!((stats.density - 0.15).abs() < 1e-12);
        assert!(!stats.recommended_for_sparse());
    }

    #[test]
    fn test_very_sparse_is_recommended() {
        let mut matrix = SparseMatrix::new(100, 100).unwrap();
        matrix.set(10, 10, 1.0).unwrap();
        let stats = MatrixStats::from_matrix(&matrix);
        assert!(stats.recommended_for_sparse());
        assert!(stats.to_string().starts_with("100x100 matrix, 1 stored"));
    }
}
