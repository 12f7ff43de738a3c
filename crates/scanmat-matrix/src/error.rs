use thiserror::Error;

/// An error type for matrix construction, access and arithmetic.
///
/// Messages are owned and released with the error value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// The requested extents cannot be stored.
    ///
    /// `rows * cols` must fit into the 32-bit signed range.
    #[error("Invalid dimension: {cols} x {rows} elements exceed the supported matrix size")]
    InvalidDimension {
        /// Requested number of columns.
        cols: usize,
        /// Requested number of rows.
        rows: usize,
    },

    /// The element buffer could not be reserved.
    #[error("Failed to allocate a buffer of {0} elements")]
    AllocationFailed(usize),

    /// An index lies outside the valid range of the addressed dimension.
    #[error("Index {index} out of range for {axis} of size {size}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The size of the addressed dimension.
        size: usize,
        /// Human-readable name of the dimension (`"row"`, `"column"`, `"element"`).
        axis: &'static str,
    },

    /// One-dimensional access on a matrix that is neither a row nor a column vector.
    #[error("Matrix of {cols} x {rows} is not a vector; use two-dimensional access")]
    NotAVector {
        /// Number of columns.
        cols: usize,
        /// Number of rows.
        rows: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    #[error("Dimension mismatch in {operation}: left is {lhs}, right is {rhs}")]
    DimensionMismatch {
        /// Name of the operation that failed.
        operation: &'static str,
        /// Shape of the left operand, formatted as `cols x rows`.
        lhs: String,
        /// Shape of the right operand, formatted as `cols x rows`.
        rhs: String,
    },

    /// A reduction was requested on a matrix without elements.
    #[error("Operation {0} is undefined for an empty matrix")]
    EmptyMatrix(&'static str),

    /// A reinterpretation would change the number of elements.
    #[error("Size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch {
        /// Number of elements the operation requires.
        expected: usize,
        /// Number of elements that were supplied.
        actual: usize,
    },

    /// A quarter-turn count outside `0..4` reached the rotation dispatch.
    #[error("Invalid rotation by {0} quarter turns")]
    InvalidRotation(i32),

    /// A rectangular region exceeds the source extents.
    #[error("Region at ({left}, {top}) of {width} x {height} exceeds matrix of {cols} x {rows}")]
    OutOfBounds {
        /// Left edge of the region.
        left: usize,
        /// Top edge of the region.
        top: usize,
        /// Region width.
        width: usize,
        /// Region height.
        height: usize,
        /// Source columns.
        cols: usize,
        /// Source rows.
        rows: usize,
    },

    /// The matrix cannot be reduced to the requested shape.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// A text row holds a different number of elements than the first row.
    #[error("Irregular shape: row {row} has {found} elements, expected {expected}")]
    IrregularShape {
        /// Zero-based data row.
        row: usize,
        /// Number of columns fixed by the first row.
        expected: usize,
        /// Number of elements found in this row.
        found: usize,
    },

    /// A text token is not a number of the element type.
    #[error("Invalid element {token:?} at row {row}, column {col}")]
    InvalidElement {
        /// The token as written.
        token: String,
        /// Zero-based data row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
}

impl MatrixError {
    /// Creates an IndexOutOfRange error.
    pub fn index_out_of_range(index: usize, size: usize, axis: &'static str) -> Self {
        Self::IndexOutOfRange { index, size, axis }
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

    /// Returns true if the error reports misuse of the API rather than bad input data.
    pub fn is_programming_error(&self) -> bool {
        match self {
            Self::AllocationFailed(_)
            | Self::IrregularShape { .. }
            | Self::InvalidElement { .. } => false,
            Self::InvalidDimension { .. }
            | Self::IndexOutOfRange { .. }
            | Self::NotAVector { .. }
            | Self::DimensionMismatch { .. }
            | Self::EmptyMatrix(_)
            | Self::SizeMismatch { .. }
            | Self::InvalidRotation(_)
            | Self::OutOfBounds { .. }
            | Self::InvalidShape(_) => true,
        }
    }
}
