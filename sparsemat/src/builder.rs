//! Streaming triplet builder for sparse matrices
//!
//! Collects `(row, col, value)` triplets in any order, resolves duplicates
//! according to a [`DuplicatePolicy`], and produces a [`SparseMatrix`] once
//! all input has been seen.

use hashbrown::HashMap;
use sparsemat_core::{check_dimensions, check_index, MatrixElement, Result, SparseMatrix};

/// How repeated `(row, col)` positions are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Add values at the same position
    #[default]
    Sum,
    /// Keep the last value pushed
    Overwrite,
}

/// Accumulates triplets and builds a [`SparseMatrix`]
#[derive(Debug, Clone)]
pub struct MatrixBuilder<T = f64> {
    num_rows: usize,
    num_cols: usize,
    policy: DuplicatePolicy,
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> MatrixBuilder<T> {
    /// Create a builder for a `num_rows` x `num_cols` matrix
    ///
    /// Dimensions and indices are validated in [`MatrixBuilder::build`].
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            policy: DuplicatePolicy::default(),
            entries: HashMap::new(),
        }
    }

    /// Reserve room for `additional` distinct positions
    pub fn with_capacity(mut self, additional: usize) -> Self {
        self.entries.reserve(additional);
        self
    }

    /// Set the duplicate policy
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the duplicate policy
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Add one triplet
    pub fn push(&mut self, row: usize, col: usize, value: T) -> &mut Self {
        match self.policy {
            DuplicatePolicy::Sum => {
                self.entries
                    .entry((row, col))
                    .and_modify(|stored| *stored = *stored + value)
                    .or_insert(value);
            }
            DuplicatePolicy::Overwrite => {
                self.entries.insert((row, col), value);
            }
        }
        self
    }

    /// Number of distinct positions collected so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been pushed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate everything and produce the matrix
    ///
    /// Fails with `InvalidDimensions` for a zero dimension, or with
    /// `IndexOutOfRange` for the first offending triplet in row-major order.
    /// Every collected position becomes a stored entry, zero values included.
    pub fn build(self) -> Result<SparseMatrix<T>> {
        check_dimensions(self.num_rows, self.num_cols)?;

        let mut triplets: Vec<(usize, usize, T)> = self
            .entries
            .into_iter()
            .map(|((row, col), value)| (row, col, value))
            .collect();
        triplets.sort_unstable_by_key(|&(row, col, _)| (row, col));

        for &(row, col, _) in &triplets {
            check_index(row, self.num_rows)?;
            check_index(col, self.num_cols)?;
        }

        log::debug!(
            "building {}x{} matrix from {} positions",
            self.num_rows,
            self.num_cols,
            triplets.len()
        );
        SparseMatrix::from_triplets(self.num_rows, self.num_cols, &triplets)
    }
}

impl<T: MatrixElement> Extend<(usize, usize, T)> for MatrixBuilder<T> {
    fn extend<I: IntoIterator<Item = (usize, usize, T)>>(&mut self, iter: I) {
        for (row, col, value) in iter {
            self.push(row, col, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparsemat_core::SparseError;

    #[test]
    fn test_build_sums_duplicates() {
        let mut builder = MatrixBuilder::new(2, 3);
        builder.push(0, 1, 1.0).push(0, 1, 2.5).push(1, 2, 4.0);
        assert_eq!(builder.len(), 2);

        let matrix = builder.build().unwrap();
        assert_eq!(matrix.get(0, 1), Ok(3.5));
        assert_eq!(matrix.get(1, 2), Ok(4.0));
        assert_eq!(matrix.nnz(), 2);
    }

    #[test]
    fn test_build_overwrites_duplicates() {
        let mut builder = MatrixBuilder::new(2, 2).with_policy(DuplicatePolicy::Overwrite);
        builder.extend([(1, 1, 1.0), (1, 1, 7.0)]);
        let matrix = builder.build().unwrap();
        assert_eq!(matrix.get(1, 1), Ok(7.0));
    }

    #[test]
    fn test_build_keeps_zero_values() {
        let mut builder = MatrixBuilder::new(1, 2);
        builder.push(0, 0, 1.0).push(0, 0, -1.0);
        let matrix = builder.build().unwrap();
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(matrix.get(0, 0), Ok(0.0));
    }

    #[test]
    fn test_build_validates() {
        let mut builder = MatrixBuilder::new(2, 2);
        builder.push(0, 0, 1.0).push(3, 1, 1.0).push(2, 0, 1.0);
        assert_eq!(
            builder.build(),
            Err(SparseError::IndexOutOfRange { index: 2, bound: 2 })
        );

        let builder = MatrixBuilder::<f64>::new(0, 4);
        assert!(builder.is_empty());
        assert_eq!(
            builder.build(),
            Err(SparseError::InvalidDimensions { rows: 0, cols: 4 })
        );
    }
}
