//! Sparse matrices built from sparse rows
//!
//! A [`SparseMatrix`] owns exactly `nrows` [`SparseRow`]s, each with
//! capacity `ncols`. Matrix operations decompose into row reads and writes:
//! transpose walks the stored entries of every row, multiplication takes
//! index-based dot products through the read-only lookup, and the
//! elementwise operations merge corresponding rows.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, Mul};

use crate::error::Result;
use crate::row::SparseRow;
use crate::traits::{MatrixElement, MatrixOperations, SparseAccess};
use crate::validation::{check_dimensions, check_index, check_product_shape, check_same_shape};

/// Row-major sparse matrix with lazy insertion on write
///
/// `PartialEq` compares stored entries exactly, so an explicitly stored
/// zero differs from an implicit one. Compare through [`SparseMatrix::get`]
/// for value equality.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SparseMatrix<T = f64> {
    /// One row per matrix row, each of capacity `num_cols`
    rows: Vec<SparseRow<T>>,
    /// Number of columns
    num_cols: usize,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty `num_rows` x `num_cols` matrix
    pub fn new(num_rows: usize, num_cols: usize) -> Result<Self> {
        check_dimensions(num_rows, num_cols)?;
        Ok(Self::empty(num_rows, num_cols))
    }

    fn empty(num_rows: usize, num_cols: usize) -> Self {
        Self {
            rows: (0..num_rows).map(|_| SparseRow::empty(num_cols)).collect(),
            num_cols,
        }
    }

    /// Create an `n` x `n` identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        let mut matrix = Self::new(n, n)?;
        let one = T::from_f64(1.0);
        for (i, row) in matrix.rows.iter_mut().enumerate() {
            *row.slot_unchecked(i) = one;
        }
        Ok(matrix)
    }

    /// Create a matrix from `(row, col, value)` triplets
    ///
    /// All indices are validated before anything is written. Triplets are
    /// applied in order through [`SparseMatrix::set`], so a repeated
    /// position keeps the last value.
    pub fn from_triplets(num_rows: usize, num_cols: usize, triplets: &[(usize, usize, T)]) -> Result<Self> {
        let mut matrix = Self::new(num_rows, num_cols)?;
        for &(row, col, _) in triplets {
            check_index(row, num_rows)?;
            check_index(col, num_cols)?;
        }
        for &(row, col, value) in triplets {
            *matrix.rows[row].slot_unchecked(col) = value;
        }
        Ok(matrix)
    }

    /// Create a matrix from dense rows, storing only nonzero values
    ///
    /// Every row must have the same nonzero length.
    pub fn from_dense(dense: &[Vec<T>]) -> Result<Self> {
        let num_cols = dense.first().map_or(0, Vec::len);
        check_dimensions(dense.len(), num_cols)?;

        let rows = dense
            .iter()
            .map(|values| {
                check_same_shape((1, values.len()), (1, num_cols))?;
                SparseRow::from_dense(values)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows, num_cols })
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.num_cols
    }

    /// Dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.num_cols)
    }

    /// Total number of stored entries, explicit zeros included
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(SparseRow::nnz).sum()
    }

    /// Read-only view of row `row`
    pub fn row(&self, row: usize) -> Result<&SparseRow<T>> {
        check_index(row, self.rows.len())?;
        Ok(&self.rows[row])
    }

    /// Mutable handle to row `row`
    ///
    /// The handle can write entries but cannot replace the row, so every
    /// row keeps capacity `ncols`.
    pub fn row_mut(&mut self, row: usize) -> Result<RowMut<'_, T>> {
        check_index(row, self.rows.len())?;
        Ok(RowMut {
            row: &mut self.rows[row],
        })
    }

    /// Iterate over the rows in order
    pub fn rows(&self) -> core::slice::Iter<'_, SparseRow<T>> {
        self.rows.iter()
    }

    /// Iterate over stored `(row, col, value)` triplets in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().map(move |(c, value)| (r, c, value)))
    }

    /// Read the value at `(row, col)`, zero when nothing is stored
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.row(row)?.get(col)
    }

    /// Mutable access to the value at `(row, col)`, inserting a zero entry if absent
    pub fn slot(&mut self, row: usize, col: usize) -> Result<&mut T> {
        check_index(row, self.rows.len())?;
        self.rows[row].slot(col)
    }

    /// Store `value` at `(row, col)`
    ///
    /// Always materializes an entry, even when `value` is zero.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.slot(row, col)? = value;
        Ok(())
    }

    /// Transposed copy: an `ncols` x `nrows` matrix with every stored
    /// entry `(r, c, v)` moved to `(c, r, v)`
    ///
    /// Stored explicit zeros are carried over, so the stored-entry count is
    /// preserved exactly.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::empty(self.num_cols, self.rows.len());
        for (r, row) in self.rows.iter().enumerate() {
            for (c, value) in row {
                *transposed.rows[c].slot_unchecked(r) = value;
            }
        }
        log::trace!(
            "transposed {}x{} matrix ({} stored entries)",
            self.rows.len(),
            self.num_cols,
            transposed.nnz()
        );
        transposed
    }

    /// Short alias for [`SparseMatrix::transpose`]
    pub fn tr(&self) -> Self {
        self.transpose()
    }

    /// Matrix product `self * rhs`
    ///
    /// Requires `self.ncols() == rhs.nrows()`, checked before any work is
    /// done. Every output position is the dot product over the shared
    /// dimension, read without materializing entries in either operand.
    /// Sums that are exactly zero are not stored; any other sum is.
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        let (out_rows, out_cols) = check_product_shape(self.dimensions(), rhs.dimensions())
            .inspect_err(|err| log::debug!("rejected product: {err}"))?;
        let inner = self.num_cols;
        log::debug!(
            "multiplying {}x{} by {}x{}",
            out_rows,
            inner,
            inner,
            out_cols
        );

        let mut product = Self::empty(out_rows, out_cols);
        for (lhs_row, out_row) in self.rows.iter().zip(product.rows.iter_mut()) {
            for col in 0..out_cols {
                let mut sum = T::zero();
                for (k, rhs_row) in rhs.rows.iter().enumerate() {
                    sum = sum + lhs_row.value_at(k) * rhs_row.value_at(col);
                }
                if !sum.is_zero() {
                    *out_row.slot_unchecked(col) = sum;
                }
            }
        }

        log::debug!("product has {} stored entries", product.nnz());
        Ok(product)
    }

    /// Elementwise sum of two matrices of the same shape
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        check_same_shape(self.dimensions(), rhs.dimensions())?;
        Ok(self.zip_rows(rhs, |a, b| a + b))
    }

    /// Elementwise difference of two matrices of the same shape
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        check_same_shape(self.dimensions(), rhs.dimensions())?;
        Ok(self.zip_rows(rhs, |a, b| a - b))
    }

    /// Multiply every stored value by `factor`
    pub fn scale(&mut self, factor: T) {
        for row in &mut self.rows {
            row.scale(factor);
        }
    }

    /// Remove explicitly stored zeros from every row
    ///
    /// Returns the number of entries removed.
    pub fn prune_zeros(&mut self) -> usize {
        self.rows.iter_mut().map(SparseRow::prune_zeros).sum()
    }

    /// Dense copy, row-major
    pub fn to_dense(&self) -> Vec<Vec<T>> {
        self.rows.iter().map(SparseRow::to_dense).collect()
    }

    fn zip_rows(&self, rhs: &Self, op: impl Fn(&SparseRow<T>, &SparseRow<T>) -> SparseRow<T>) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .zip(&rhs.rows)
                .map(|(a, b)| op(a, b))
                .collect(),
            num_cols: self.num_cols,
        }
    }
}

impl<'a, T: MatrixElement> Mul<&'a SparseMatrix<T>> for &'a SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>>;

    fn mul(self, rhs: &'a SparseMatrix<T>) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: MatrixElement> fmt::Display for SparseMatrix<T> {
    /// Rows rendered one per line, no trailing line break
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            fmt::Display::fmt(row, f)?;
        }
        Ok(())
    }
}

impl<T: MatrixElement> SparseAccess for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if col >= self.num_cols {
            return None;
        }
        self.rows.get(row)?.lookup(col)
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        self.rows
            .get(row_index)
            .map(|row| row.iter().collect())
            .unwrap_or_default()
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        if col_index >= self.num_cols {
            return Vec::new();
        }
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(r, row)| row.lookup(col_index).map(|value| (r, value)))
            .collect()
    }
}

/// Mutable handle to one row of a [`SparseMatrix`]
///
/// Derefs to the row for reads. Writes go through the lazy-insertion
/// accessors; the row itself cannot be swapped out.
#[derive(Debug)]
pub struct RowMut<'a, T> {
    row: &'a mut SparseRow<T>,
}

impl<T: MatrixElement> RowMut<'_, T> {
    /// See [`SparseRow::slot`]
    pub fn slot(&mut self, col: usize) -> Result<&mut T> {
        self.row.slot(col)
    }

    /// See [`SparseRow::set`]
    pub fn set(&mut self, col: usize, value: T) -> Result<()> {
        self.row.set(col, value)
    }

    /// See [`SparseRow::scale`]
    pub fn scale(&mut self, factor: T) {
        self.row.scale(factor);
    }

    /// See [`SparseRow::prune_zeros`]
    pub fn prune_zeros(&mut self) -> usize {
        self.row.prune_zeros()
    }
}

impl<T> Deref for RowMut<'_, T> {
    type Target = SparseRow<T>;

    fn deref(&self) -> &SparseRow<T> {
        self.row
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: MatrixElement + serde::Deserialize<'de>"))]
struct RawMatrix<T> {
    rows: Vec<SparseRow<T>>,
    num_cols: usize,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SparseMatrix<T>
where
    T: MatrixElement + serde::Deserialize<'de>,
{
    /// Deserialized matrices must have nonzero dimensions and rows of capacity `num_cols`
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = RawMatrix::<T>::deserialize(deserializer)?;
        check_dimensions(raw.rows.len(), raw.num_cols).map_err(D::Error::custom)?;
        for row in &raw.rows {
            check_same_shape((1, row.capacity()), (1, raw.num_cols)).map_err(D::Error::custom)?;
        }
        Ok(Self {
            rows: raw.rows,
            num_cols: raw.num_cols,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparseError;
    use alloc::string::ToString;
    use alloc::vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, density: f64) -> SparseMatrix {
        let mut matrix = SparseMatrix::new(rows, cols).unwrap();
        for r in 0..rows {
            for c in 0..cols {
                if rng.gen_bool(density) {
                    matrix.set(r, c, rng.gen_range(-4..=4) as f64).unwrap();
                }
            }
        }
        matrix
    }

    fn dense_product(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let inner = b.len();
        let cols = b[0].len();
        a.iter()
            .map(|row| {
                (0..cols)
                    .map(|c| (0..inner).map(|k| row[k] * b[k][c]).sum::<f64>())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            SparseMatrix::<f64>::new(0, 3),
            Err(SparseError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert!(SparseMatrix::<f64>::new(3, 0).is_err());
    }

    #[test]
    fn test_new_matrix_is_empty() {
        let matrix = SparseMatrix::<f64>::new(3, 5).unwrap();
        assert_eq!(matrix.dimensions(), (3, 5));
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.rows().all(|row| row.capacity() == 5));
        assert_eq!(
            matrix.to_string(),
            "[ 0 0 0 0 0 ]\n[ 0 0 0 0 0 ]\n[ 0 0 0 0 0 ]"
        );
    }

    #[test]
    fn test_set_materializes_entries() {
        let mut matrix = SparseMatrix::new(2, 2).unwrap();
        matrix.set(0, 1, 0.0).unwrap();
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(matrix.get_element(0, 1), Some(0.0));

        *matrix.slot(1, 0).unwrap() += 3.0;
        assert_eq!(matrix.get(1, 0), Ok(3.0));
        assert_eq!(matrix.nnz(), 2);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut matrix = SparseMatrix::<f64>::new(2, 3).unwrap();
        assert_eq!(
            matrix.get(2, 0),
            Err(SparseError::IndexOutOfRange { index: 2, bound: 2 })
        );
        assert_eq!(
            matrix.get(0, 3),
            Err(SparseError::IndexOutOfRange { index: 3, bound: 3 })
        );
        assert!(matrix.set(5, 0, 1.0).is_err());
        assert!(matrix.set(0, 5, 1.0).is_err());
        assert!(matrix.row(2).is_err());
        assert!(matrix.row_mut(2).is_err());
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_row_mut_writes_through() {
        let mut matrix = SparseMatrix::new(2, 4).unwrap();
        {
            let mut row = matrix.row_mut(1).unwrap();
            row.set(3, 2.0).unwrap();
            *row.slot(0).unwrap() = -1.0;
            assert_eq!(row.capacity(), 4);
            assert_eq!(row.nnz(), 2);
        }
        assert_eq!(matrix.row(1).unwrap().to_string(), "[ -1 0 0 2 ]");
        assert!(matrix.row(0).unwrap().is_empty());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut a = SparseMatrix::from_triplets(2, 3, &[(0, 1, 1.0), (1, 2, 5.0)]).unwrap();
        let mut b = a.clone();
        b.set(0, 1, 9.0).unwrap();
        b.set(1, 0, 4.0).unwrap();
        assert_eq!(a.get(0, 1), Ok(1.0));
        assert_eq!(a.get(1, 0), Ok(0.0));
        assert_eq!(a.nnz(), 2);

        a.set(1, 2, -5.0).unwrap();
        assert_eq!(b.get(1, 2), Ok(5.0));

        let mut c = SparseMatrix::new(7, 7).unwrap();
        c.set(6, 6, 1.0).unwrap();
        c.clone_from(&a);
        assert_eq!(c.dimensions(), (2, 3));
        assert_eq!(c, a);
    }

    #[test]
    fn test_from_triplets_validates_first() {
        let err = SparseMatrix::from_triplets(2, 2, &[(0, 0, 1.0), (2, 0, 1.0)]);
        assert_eq!(err, Err(SparseError::IndexOutOfRange { index: 2, bound: 2 }));

        let matrix = SparseMatrix::from_triplets(2, 2, &[(1, 1, 1.0), (1, 1, 4.0)]).unwrap();
        assert_eq!(matrix.get(1, 1), Ok(4.0));
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_from_dense_and_back() {
        let dense = vec![vec![0.0, 1.0, 2.0], vec![3.0, 0.0, 0.0]];
        let matrix = SparseMatrix::from_dense(&dense).unwrap();
        assert_eq!(matrix.nnz(), 3);
        assert_eq!(matrix.to_dense(), dense);

        let ragged = vec![vec![1.0, 2.0], vec![1.0]];
        assert!(SparseMatrix::from_dense(&ragged).is_err());
        assert!(SparseMatrix::<f64>::from_dense(&[]).is_err());
    }

    #[test]
    fn test_identity() {
        let eye = SparseMatrix::<f64>::identity(3).unwrap();
        assert_eq!(eye.nnz(), 3);
        assert_eq!(eye.to_string(), "[ 1 0 0 ]\n[ 0 1 0 ]\n[ 0 0 1 ]");
    }

    #[test]
    fn test_transpose_moves_entries() {
        let mut a = SparseMatrix::new(3, 5).unwrap();
        a.set(0, 0, 2.0).unwrap();
        a.set(0, 2, 1.0).unwrap();
        a.set(0, 3, 9.0).unwrap();
        a.set(1, 4, 4.0).unwrap();
        a.set(2, 1, 7.0).unwrap();

        let b = a.tr();
        assert_eq!(b.dimensions(), (5, 3));
        assert_eq!(b.nnz(), a.nnz());
        assert_eq!(b.get(0, 0), Ok(2.0));
        assert_eq!(b.get(1, 2), Ok(7.0));
        assert_eq!(b.get(2, 0), Ok(1.0));
        assert_eq!(b.get(3, 0), Ok(9.0));
        assert_eq!(b.get(4, 1), Ok(4.0));
    }

    #[test]
    fn test_transpose_keeps_explicit_zeros() {
        let mut a = SparseMatrix::new(2, 3).unwrap();
        a.set(1, 2, 0.0).unwrap();
        let b = a.transpose();
        assert_eq!(b.nnz(), 1);
        assert_eq!(b.get_element(2, 1), Some(0.0));
    }

    #[test]
    fn test_transpose_involution() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let (rows, cols) = (rng.gen_range(1..8), rng.gen_range(1..8));
            let m = random_matrix(&mut rng, rows, cols, 0.3);
            let t = m.transpose();
            assert_eq!(t.nnz(), m.nnz());
            let back = t.transpose();
            assert_eq!(back.dimensions(), m.dimensions());
            for r in 0..rows {
                for c in 0..cols {
                    assert_eq!(back.get(r, c), m.get(r, c));
                    assert_eq!(t.get(c, r), m.get(r, c));
                }
            }
        }
    }

    #[test]
    fn test_multiply() {
        let a = SparseMatrix::from_triplets(
            3,
            5,
            &[(0, 1, 1.0), (0, 4, 5.0), (1, 2, 2.0), (2, 2, 3.0)],
        )
        .unwrap();
        let b = SparseMatrix::from_triplets(
            5,
            3,
            &[(0, 0, 1.0), (1, 1, 6.0), (2, 2, 2.0), (3, 0, 0.0), (3, 2, 3.0)],
        )
        .unwrap();

        let c = (&a * &b).unwrap();
        assert_eq!(c.dimensions(), (3, 3));
        assert_eq!(c.get(0, 1), Ok(6.0));
        assert_eq!(c.get(1, 2), Ok(4.0));
        assert_eq!(c.get(2, 2), Ok(6.0));
        assert_eq!(c.nnz(), 3);
    }

    #[test]
    fn test_multiply_does_not_store_zero_sums() {
        let a = SparseMatrix::from_triplets(1, 2, &[(0, 0, 1.0), (0, 1, 1.0)]).unwrap();
        let b = SparseMatrix::from_triplets(2, 1, &[(0, 0, 2.0), (1, 0, -2.0)]).unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.nnz(), 0);
        assert_eq!(c.get(0, 0), Ok(0.0));
    }

    #[test]
    fn test_multiply_reads_without_materializing() {
        let a = SparseMatrix::from_triplets(2, 2, &[(0, 0, 1.0)]).unwrap();
        let b = SparseMatrix::from_triplets(2, 2, &[(1, 1, 1.0)]).unwrap();
        let _ = a.multiply(&b).unwrap();
        assert_eq!(a.nnz(), 1);
        assert_eq!(b.nnz(), 1);
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = SparseMatrix::<f64>::new(2, 3).unwrap();
        let b = SparseMatrix::<f64>::new(2, 2).unwrap();
        assert_eq!(
            a.multiply(&b),
            Err(SparseError::DimensionMismatch {
                left: (2, 3),
                right: (2, 2)
            })
        );
    }

    #[test]
    fn test_multiply_matches_dense_reference() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..30 {
            let (n, m, p) = (rng.gen_range(1..6), rng.gen_range(1..6), rng.gen_range(1..6));
            let a = random_matrix(&mut rng, n, m, 0.4);
            let b = random_matrix(&mut rng, m, p, 0.4);
            let c = a.multiply(&b).unwrap();
            assert_eq!(c.dimensions(), (n, p));
            assert_eq!(c.to_dense(), dense_product(&a.to_dense(), &b.to_dense()));
            assert!(c.iter().all(|(_, _, value)| value != 0.0));
        }
    }

    #[test]
    fn test_elementwise_add_sub() {
        let a = SparseMatrix::from_triplets(2, 2, &[(0, 0, 1.0), (1, 1, 2.0)]).unwrap();
        let b = SparseMatrix::from_triplets(2, 2, &[(0, 0, 3.0), (0, 1, 4.0)]).unwrap();
        assert_eq!(a.try_add(&b).unwrap().to_string(), "[ 4 4 ]\n[ 0 2 ]");
        assert_eq!(a.try_sub(&b).unwrap().to_string(), "[ -2 -4 ]\n[ 0 2 ]");

        let c = SparseMatrix::<f64>::new(2, 3).unwrap();
        assert!(a.try_add(&c).is_err());
        assert!(a.try_sub(&c).is_err());
    }

    #[test]
    fn test_scale_and_prune() {
        let mut m = SparseMatrix::from_triplets(2, 2, &[(0, 0, 1.0), (1, 1, 0.0)]).unwrap();
        m.scale(3.0);
        assert_eq!(m.get(0, 0), Ok(3.0));
        assert_eq!(m.prune_zeros(), 1);
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn test_row_and_col_views() {
        let m = SparseMatrix::from_triplets(3, 3, &[(0, 2, 1.0), (1, 2, 2.0), (1, 0, 3.0)]).unwrap();
        assert_eq!(m.get_row(1), vec![(0, 3.0), (2, 2.0)]);
        assert_eq!(m.get_col(2), vec![(0, 1.0), (1, 2.0)]);
        assert!(m.get_row(9).is_empty());
        assert!(m.get_col(9).is_empty());
        assert_eq!(m.get_element(1, 0), Some(3.0));
        assert_eq!(m.get_element(2, 2), None);
        assert_eq!(m.get_element(0, 7), None);
        assert!((m.density() - 3.0 / 9.0).abs() < 1e-12);

        let triplets: Vec<_> = m.iter().collect();
        assert_eq!(triplets, vec![(0, 2, 1.0), (1, 0, 3.0), (1, 2, 2.0)]);
    }

    #[test]
    fn test_display_has_no_trailing_newline() {
        let m = SparseMatrix::from_triplets(2, 3, &[(0, 0, 1.5), (1, 2, -2.0)]).unwrap();
        let text = m.to_string();
        assert_eq!(text, "[ 1.5 0 0 ]\n[ 0 0 -2 ]");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_f32_elements() {
        let a = SparseMatrix::<f32>::from_triplets(1, 2, &[(0, 0, 2.0), (0, 1, 3.0)]).unwrap();
        let b = a.transpose();
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.get(0, 0), Ok(13.0f32));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_and_validation() {
        let m = SparseMatrix::from_triplets(2, 3, &[(0, 1, 1.0), (1, 2, 0.0)]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: SparseMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        let bad = r#"{"rows":[{"entries":[],"max_cols":2}],"num_cols":3}"#;
        assert!(serde_json::from_str::<SparseMatrix>(bad).is_err());
    }
}
