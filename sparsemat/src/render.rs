//! Configurable text rendering for rows and matrices
//!
//! The default [`RenderConfig`] produces exactly the `Display` output of
//! the core types: `[ v0 v1 ... vN ]` per row, rows joined by `\n` with no
//! trailing line break.

use std::fmt::Write;

use sparsemat_core::{MatrixElement, SparseMatrix, SparseRow};

/// Configuration for rendering rows and matrices as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Fixed number of decimals for stored values, `None` for shortest form
    pub precision: Option<usize>,
    /// Text placed between the brackets and each value
    pub separator: String,
    /// Text placed between rendered rows
    pub row_separator: String,
}

impl RenderConfig {
    /// Set the number of decimals for stored values
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the separator between values
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the separator between rows
    pub fn with_row_separator(mut self, row_separator: impl Into<String>) -> Self {
        self.row_separator = row_separator.into();
        self
    }

    /// Render a single row
    pub fn render_row<T: MatrixElement>(&self, row: &SparseRow<T>) -> String {
        let mut out = String::with_capacity(2 + row.capacity() * (self.separator.len() + 2));
        self.write_row(&mut out, row);
        out
    }

    /// Render a whole matrix
    pub fn render_matrix<T: MatrixElement>(&self, matrix: &SparseMatrix<T>) -> String {
        let mut out = String::new();
        for (i, row) in matrix.rows().enumerate() {
            if i > 0 {
                out.push_str(&self.row_separator);
            }
            self.write_row(&mut out, row);
        }
        out
    }

    fn write_row<T: MatrixElement>(&self, out: &mut String, row: &SparseRow<T>) {
        out.push('[');
        let mut stored = row.iter().peekable();
        for col in 0..row.capacity() {
            out.push_str(&self.separator);
            match stored.next_if(|&(c, _)| c == col) {
                // Writing into a String cannot fail.
                Some((_, value)) => {
                    let _ = match self.precision {
                        Some(precision) => write!(out, "{value:.precision$}"),
                        None => write!(out, "{value}"),
                    };
                }
                None => out.push('0'),
            }
        }
        out.push_str(&self.separator);
        out.push(']');
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            precision: None,
            separator: " ".to_string(),
            row_separator: "\n".to_string(),
        }
    }
}

/// Render a row with the default configuration
pub fn render_row<T: MatrixElement>(row: &SparseRow<T>) -> String {
    RenderConfig::default().render_row(row)
}

/// Render a matrix with the default configuration
pub fn render_matrix<T: MatrixElement>(matrix: &SparseMatrix<T>) -> String {
    RenderConfig::default().render_matrix(matrix)
}
