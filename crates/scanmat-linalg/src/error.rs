use scanmat_matrix::MatrixError;
use thiserror::Error;

/// An error type for factorizations and derived operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// The operation is only defined for square matrices.
    #[error("Matrix of {cols} x {rows} is not square")]
    NotSquare {
        /// Number of columns.
        cols: usize,
        /// Number of rows.
        rows: usize,
    },

    /// The operation is undefined for a matrix without elements.
    #[error("Operation {0} is undefined for an empty matrix")]
    EmptyMatrix(&'static str),

    /// Elimination met an exactly zero pivot.
    #[error("Matrix is singular: zero pivot in column {pivot}")]
    SingularMatrix {
        /// Column (and row) of the zero pivot.
        pivot: usize,
    },

    /// The numerical routine could not process its input.
    #[error("Decomposition failed at row {index}: {reason}")]
    DecompositionFailed {
        /// Index of the offending row.
        index: usize,
        /// What went wrong.
        reason: String,
    },

    /// Operand shapes are incompatible.
    #[error("Dimension mismatch in {operation}: left is {lhs}, right is {rhs}")]
    DimensionMismatch {
        /// Name of the operation that failed.
        operation: &'static str,
        /// Shape of the left operand, formatted as `cols x rows`.
        lhs: String,
        /// Shape of the right operand, formatted as `cols x rows`.
        rhs: String,
    },

    /// Unknown norm name.
    #[error("Invalid norm {0:?}; expected one of inf, 1, 2, fro")]
    InvalidNorm(String),

    /// Error from the underlying matrix operation.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl LinalgError {
    /// Creates a NotSquare error from a `(cols, rows)` pair.
    pub fn not_square((cols, rows): (usize, usize)) -> Self {
        Self::NotSquare { cols, rows }
    }

    /// Creates a DimensionMismatch error from two `(cols, rows)` pairs.
    pub fn dimension_mismatch(
        operation: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch {
            operation,
            lhs: format!("{} x {}", lhs.0, lhs.1),
            rhs: format!("{} x {}", rhs.0, rhs.1),
        }
    }
}
