//! Element buffer and extents of a matrix.
//!
//! The buffer is one contiguous row-major block: element `(x, y)` lives at
//! `y * cols + x`. An empty shape never holds an allocation.

use crate::{Element, MatrixError};

/// Largest number of elements a matrix may hold (`i32::MAX`).
pub const MAX_ELEMENTS: usize = i32::MAX as usize;

/// Row and column extents of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    /// Number of columns (width).
    pub cols: usize,
    /// Number of rows (height).
    pub rows: usize,
}

impl Shape {
    /// Creates a new shape of `cols` x `rows`.
    #[inline]
    pub const fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Validates the shape and returns its element count.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if `rows * cols` overflows or exceeds
    /// [`MAX_ELEMENTS`].
    pub fn checked_numel(&self) -> Result<usize, MatrixError> {
        self.cols
            .checked_mul(self.rows)
            .filter(|&n| n <= MAX_ELEMENTS)
            .ok_or(MatrixError::InvalidDimension {
                cols: self.cols,
                rows: self.rows,
            })
    }

    /// Number of elements, zero if either extent is zero.
    #[inline]
    pub fn numel(&self) -> usize {
        if self.cols == 0 || self.rows == 0 {
            0
        } else {
            self.cols * self.rows
        }
    }

    /// True if the shape holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.numel() == 0
    }

    /// True for a row vector (1 x n) or a column vector (n x 1).
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    /// True if rows and columns are equal.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Linear offset of element `(x, y)`; no bounds check.
    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Linear offset of element `(x, y)` if it lies inside the shape.
    #[inline]
    pub fn checked_offset(&self, x: usize, y: usize) -> Result<usize, MatrixError> {
        if x >= self.cols {
            return Err(MatrixError::index_out_of_range(x, self.cols, "column"));
        }
        if y >= self.rows {
            return Err(MatrixError::index_out_of_range(y, self.rows, "row"));
        }
        Ok(self.offset(x, y))
    }

    /// Returns the shape with rows and columns exchanged.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::new(self.rows, self.cols)
    }

    /// The `(cols, rows)` pair, as used in error messages.
    #[inline]
    pub fn pair(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.cols, self.rows)
    }
}

/// Allocates a zero-filled buffer for `shape`.
///
/// An empty shape yields an empty vector without touching the allocator.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidDimension`] for oversized shapes and
/// [`MatrixError::AllocationFailed`] if the reservation fails.
pub fn allocate<T: Element>(shape: Shape) -> Result<Vec<T>, MatrixError> {
    let numel = shape.checked_numel()?;
    if numel == 0 {
        return Ok(Vec::new());
    }
    let mut data = Vec::new();
    data.try_reserve_exact(numel)
        .map_err(|_| MatrixError::AllocationFailed(numel))?;
    data.resize(numel, T::zero());
    log::debug!("allocated matrix buffer of {shape} ({numel} elements)");
    Ok(data)
}

/// Copies `src` into a freshly reserved buffer.
pub fn allocate_copy<T: Element>(src: &[T]) -> Result<Vec<T>, MatrixError> {
    let mut data = Vec::new();
    data.try_reserve_exact(src.len())
        .map_err(|_| MatrixError::AllocationFailed(src.len()))?;
    data.extend_from_slice(src);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_offsets() -> Result<(), MatrixError> {
        let shape = Shape::new(3, 2);
        assert_eq!(shape.numel(), 6);
        assert_eq!(shape.offset(2, 1), 5);
        assert_eq!(shape.checked_offset(0, 1)?, 3);
        assert_eq!(
            shape.checked_offset(3, 0),
            Err(MatrixError::index_out_of_range(3, 3, "column"))
        );
        assert_eq!(
            shape.checked_offset(0, 2),
            Err(MatrixError::index_out_of_range(2, 2, "row"))
        );
        Ok(())
    }

    #[test]
    fn test_empty_shape_does_not_allocate() -> Result<(), MatrixError> {
        let data = allocate::<f64>(Shape::new(0, 0))?;
        assert!(data.is_empty());
        assert_eq!(data.capacity(), 0);
        let data = allocate::<f64>(Shape::new(5, 0))?;
        assert_eq!(data.capacity(), 0);
        Ok(())
    }

    #[test]
    fn test_oversized_shape_is_rejected() {
        let shape = Shape::new(1 << 16, 1 << 16);
        assert_eq!(
            allocate::<u8>(shape),
            Err(MatrixError::InvalidDimension {
                cols: 1 << 16,
                rows: 1 << 16
            })
        );
        assert!(Shape::new(usize::MAX, 2).checked_numel().is_err());
    }

    #[test]
    fn test_allocate_zero_fills() -> Result<(), MatrixError> {
        let data = allocate::<i32>(Shape::new(2, 2))?;
        assert_eq!(data, vec![0, 0, 0, 0]);
        Ok(())
    }
}
