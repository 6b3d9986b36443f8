// src/numerics/error.rs

/// Raised when a matrix is built from a grid whose dimensions do not match
/// the fixed size of the target matrix type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("Matrix must be {expected}x{expected}: got {found} rows")]
    RowCount { expected: usize, found: usize },

    #[error("Matrix must be {expected}x{expected}: row {row} has {found} columns")]
    RowLength { row: usize, expected: usize, found: usize },
}

impl ShapeError {
    /// The square dimension the failed construction required.
    pub fn expected(&self) -> usize {
        match self {
            ShapeError::RowCount { expected, .. } | ShapeError::RowLength { expected, .. } => *expected,
        }
    }
}
