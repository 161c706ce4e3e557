//! Error types for sparse row and matrix operations

/// Errors that can occur during sparse row and matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseError {
    /// A row or column index fell outside `[0, bound)`
    IndexOutOfRange { index: usize, bound: usize },
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A row or matrix was constructed with a zero dimension
    InvalidDimensions { rows: usize, cols: usize },
}

/// Broad classification of a [`SparseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad index at an accessor
    Index,
    /// Bad shape at construction or in an arithmetic operation
    Shape,
}

impl SparseError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SparseError::IndexOutOfRange { .. } => ErrorCategory::Index,
            SparseError::DimensionMismatch { .. } | SparseError::InvalidDimensions { .. } => {
                ErrorCategory::Shape
            }
        }
    }
}

impl core::fmt::Display for SparseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SparseError::IndexOutOfRange { index, bound } => {
                write!(f, "Index {index} out of range (must be < {bound})")
            }
            SparseError::DimensionMismatch { left, right } => write!(
                f,
                "Dimension mismatch: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            SparseError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid dimensions {rows}x{cols}: both must be nonzero")
            }
        }
    }
}

impl core::error::Error for SparseError {}

/// Result type for sparse operations
pub type Result<T> = core::result::Result<T, SparseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_messages() {
        let err = SparseError::IndexOutOfRange { index: 7, bound: 5 };
        assert_eq!(err.to_string(), "Index 7 out of range (must be < 5)");

        let err = SparseError::DimensionMismatch {
            left: (2, 3),
            right: (2, 2),
        };
        assert_eq!(err.to_string(), "Dimension mismatch: 2x3 and 2x2");
    }

    #[test]
    fn test_category() {
        assert_eq!(
            SparseError::IndexOutOfRange { index: 0, bound: 0 }.category(),
            ErrorCategory::Index
        );
        assert_eq!(
            SparseError::InvalidDimensions { rows: 0, cols: 1 }.category(),
            ErrorCategory::Shape
        );
    }
}
