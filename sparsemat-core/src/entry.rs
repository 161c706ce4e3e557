//! Stored `(column, value)` pairs

/// One assigned position in a sparse row
///
/// An entry's presence marks the position as assigned, even when its value
/// is zero. Entries are owned by exactly one row.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T = f64> {
    /// Column index within the owning row
    pub col: usize,
    /// Stored value
    pub value: T,
}

impl<T> Entry<T> {
    /// Create a new entry
    pub const fn new(col: usize, value: T) -> Self {
        Self { col, value }
    }
}

impl<T> From<(usize, T)> for Entry<T> {
    fn from((col, value): (usize, T)) -> Self {
        Self::new(col, value)
    }
}

impl<T> From<Entry<T>> for (usize, T) {
    fn from(entry: Entry<T>) -> Self {
        (entry.col, entry.value)
    }
}
