//! Sparse rows: column-sorted entry lists with lazy insertion
//!
//! A [`SparseRow`] stores only the positions that have been written. Its
//! entries live in one contiguous vector kept strictly increasing by
//! column, so lookups are a binary search and the pairwise arithmetic is a
//! single two-pointer merge walk over both operands.
//!
//! Writing through [`SparseRow::slot`] materializes an entry even if the
//! value written is zero. Those entries stay stored until the row is
//! dropped or [`SparseRow::prune_zeros`] is called explicitly.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Add, Sub};

use crate::entry::Entry;
use crate::error::Result;
use crate::traits::{MatrixElement, SparseAccess};
use crate::validation::{check_dimensions, check_index};
use crate::SparseError;

/// One row of a sparse matrix, or any sparse vector of fixed logical length
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SparseRow<T = f64> {
    /// Stored entries, strictly increasing by column
    entries: Vec<Entry<T>>,
    /// Logical number of columns
    max_cols: usize,
}

impl<T: MatrixElement> SparseRow<T> {
    /// Create an empty row with `capacity` logical columns
    pub fn new(capacity: usize) -> Result<Self> {
        check_dimensions(1, capacity)?;
        Ok(Self::empty(capacity))
    }

    pub(crate) fn empty(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_cols: capacity,
        }
    }

    /// Build a row from `(col, value)` pairs
    ///
    /// Every column is validated before anything is stored. Pairs are
    /// written in order through [`SparseRow::set`], so a repeated column
    /// keeps the last value given for it.
    pub fn from_entries<I>(capacity: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let mut row = Self::new(capacity)?;
        let pairs: Vec<(usize, T)> = entries.into_iter().collect();
        for &(col, _) in &pairs {
            check_index(col, capacity)?;
        }
        for (col, value) in pairs {
            *row.slot_unchecked(col) = value;
        }
        Ok(row)
    }

    /// Build a row from a dense slice, storing only nonzero values
    pub fn from_dense(values: &[T]) -> Result<Self> {
        let mut row = Self::new(values.len())?;
        row.entries = values
            .iter()
            .enumerate()
            .filter(|(_, value)| !value.is_zero())
            .map(|(col, &value)| Entry::new(col, value))
            .collect();
        Ok(row)
    }

    /// Logical number of columns
    pub fn capacity(&self) -> usize {
        self.max_cols
    }

    /// Number of stored entries, explicit zeros included
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True if no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries in ascending column order
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// True if an entry is stored at `col`
    pub fn contains(&self, col: usize) -> bool {
        self.position(col).is_ok()
    }

    /// Read the value at `col`
    ///
    /// Returns the stored value, or zero when no entry exists there.
    pub fn get(&self, col: usize) -> Result<T> {
        check_index(col, self.max_cols)?;
        Ok(self.value_at(col))
    }

    /// Mutable access to the value at `col`, inserting a zero entry if absent
    ///
    /// The bounds check runs first; on error the row is untouched.
    pub fn slot(&mut self, col: usize) -> Result<&mut T> {
        check_index(col, self.max_cols)?;
        Ok(self.slot_unchecked(col))
    }

    /// Store `value` at `col`
    ///
    /// Always leaves an entry stored at `col`, even when `value` is zero.
    pub fn set(&mut self, col: usize, value: T) -> Result<()> {
        *self.slot(col)? = value;
        Ok(())
    }

    /// Iterate over stored `(col, value)` pairs in ascending column order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Dense copy of the row, implicit positions filled with zero
    pub fn to_dense(&self) -> Vec<T> {
        let mut dense = alloc::vec![T::zero(); self.max_cols];
        for entry in &self.entries {
            dense[entry.col] = entry.value;
        }
        dense
    }

    /// Inner product with another row of the same capacity
    pub fn dot(&self, other: &Self) -> Result<T> {
        if self.max_cols != other.max_cols {
            return Err(SparseError::DimensionMismatch {
                left: (1, self.max_cols),
                right: (1, other.max_cols),
            });
        }

        let (mut i, mut j) = (0, 0);
        let mut sum = T::zero();
        while i < self.entries.len() && j < other.entries.len() {
            let (left, right) = (self.entries[i], other.entries[j]);
            match left.col.cmp(&right.col) {
                Ordering::Equal => {
                    sum = sum + left.value * right.value;
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        Ok(sum)
    }

    /// Multiply every stored value by `factor`
    ///
    /// Entries are kept even if they become zero.
    pub fn scale(&mut self, factor: T) {
        for entry in &mut self.entries {
            entry.value = entry.value * factor;
        }
    }

    /// Remove explicitly stored zeros, returning how many were removed
    pub fn prune_zeros(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.value.is_zero());
        before - self.entries.len()
    }

    /// Stored value at `col`, `None` when absent. No bounds check.
    pub(crate) fn lookup(&self, col: usize) -> Option<T> {
        self.position(col).ok().map(|i| self.entries[i].value)
    }

    /// Value at `col` with implicit zeros. No bounds check.
    pub(crate) fn value_at(&self, col: usize) -> T {
        self.lookup(col).unwrap_or_else(T::zero)
    }

    /// Lazy insertion without the bounds check; callers validate `col`.
    pub(crate) fn slot_unchecked(&mut self, col: usize) -> &mut T {
        debug_assert!(col < self.max_cols);
        let index = match self.position(col) {
            Ok(index) => index,
            Err(index) => {
                self.entries.insert(index, Entry::new(col, T::zero()));
                index
            }
        };
        &mut self.entries[index].value
    }

    fn position(&self, col: usize) -> core::result::Result<usize, usize> {
        self.entries.binary_search_by_key(&col, |entry| entry.col)
    }

    /// Two-pointer merge of two sorted entry lists
    ///
    /// `both` combines values present in both rows, `right_only` maps
    /// values present only in `other`. Values present only in `self` are
    /// copied verbatim. Every visited column yields exactly one entry.
    fn merge_with(&self, other: &Self, both: impl Fn(T, T) -> T, right_only: impl Fn(T) -> T) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + other.entries.len());
        let (mut i, mut j) = (0, 0);

        while i < self.entries.len() || j < other.entries.len() {
            match (self.entries.get(i), other.entries.get(j)) {
                (Some(left), Some(right)) => match left.col.cmp(&right.col) {
                    Ordering::Equal => {
                        entries.push(Entry::new(left.col, both(left.value, right.value)));
                        i += 1;
                        j += 1;
                    }
                    Ordering::Less => {
                        entries.push(*left);
                        i += 1;
                    }
                    Ordering::Greater => {
                        entries.push(Entry::new(right.col, right_only(right.value)));
                        j += 1;
                    }
                },
                (Some(left), None) => {
                    entries.push(*left);
                    i += 1;
                }
                (None, Some(right)) => {
                    entries.push(Entry::new(right.col, right_only(right.value)));
                    j += 1;
                }
                (None, None) => break,
            }
        }

        Self {
            entries,
            max_cols: self.max_cols.max(other.max_cols),
        }
    }
}

impl<'a, T: MatrixElement> Add<&'a SparseRow<T>> for &'a SparseRow<T> {
    type Output = SparseRow<T>;

    /// Elementwise sum; the result capacity is the larger of the two
    fn add(self, rhs: &'a SparseRow<T>) -> SparseRow<T> {
        self.merge_with(rhs, |a, b| a + b, |b| b)
    }
}

impl<'a, T: MatrixElement> Sub<&'a SparseRow<T>> for &'a SparseRow<T> {
    type Output = SparseRow<T>;

    /// Elementwise difference; entries only in `rhs` are negated
    fn sub(self, rhs: &'a SparseRow<T>) -> SparseRow<T> {
        self.merge_with(rhs, |a, b| a - b, |b| -b)
    }
}

impl<T: MatrixElement> Add for SparseRow<T> {
    type Output = SparseRow<T>;

    fn add(self, rhs: SparseRow<T>) -> SparseRow<T> {
        &self + &rhs
    }
}

impl<T: MatrixElement> Sub for SparseRow<T> {
    type Output = SparseRow<T>;

    fn sub(self, rhs: SparseRow<T>) -> SparseRow<T> {
        &self - &rhs
    }
}

/// Write one value, honoring a precision requested by the formatter
pub(crate) fn write_value<T: MatrixElement>(f: &mut fmt::Formatter<'_>, value: T) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{value:.precision$}"),
        None => write!(f, "{value}"),
    }
}

impl<T: MatrixElement> fmt::Display for SparseRow<T> {
    /// Renders as `[ v0 v1 ... vN ]` with `0` at implicit positions
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        let mut stored = self.entries.iter().peekable();
        for col in 0..self.max_cols {
            match stored.next_if(|entry| entry.col == col) {
                Some(entry) => write_value(f, entry.value)?,
                None => f.write_str("0")?,
            }
            f.write_str(" ")?;
        }
        f.write_str("]")
    }
}

impl<T: MatrixElement> SparseAccess for SparseRow<T> {
    type Element = T;

    /// A row is addressed as a 1xN matrix; any `row` other than 0 is out of bounds
    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if row != 0 || col >= self.max_cols {
            return None;
        }
        self.lookup(col)
    }

    fn dimensions(&self) -> (usize, usize) {
        (1, self.max_cols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

/// Iterator over the stored `(col, value)` pairs of a [`SparseRow`]
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, Entry<T>>,
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.col, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Copy> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| (entry.col, entry.value))
    }
}

impl<T: Copy> ExactSizeIterator for Iter<'_, T> {}

impl<T: Copy> FusedIterator for Iter<'_, T> {}

impl<'a, T: MatrixElement> IntoIterator for &'a SparseRow<T> {
    type Item = (usize, T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRow<T> {
    entries: Vec<Entry<T>>,
    max_cols: usize,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SparseRow<T>
where
    T: MatrixElement + serde::Deserialize<'de>,
{
    /// Deserialized rows are rebuilt through the checked constructor
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawRow::<T>::deserialize(deserializer)?;
        SparseRow::from_entries(raw.max_cols, raw.entries.into_iter().map(Into::into))
            .map_err(serde::de::Error::custom)
    }
}
