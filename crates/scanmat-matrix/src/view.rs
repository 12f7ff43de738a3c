use crate::{storage::Shape, Element, Matrix, MatrixError};

/// A non-owning alias of a matrix buffer.
///
/// `MatrixView` is what a shallow copy of a [`Matrix`] is: it shares the
/// elements of the matrix it was taken from without owning them. The borrow
/// ties its lifetime to the owner, so the owner cannot be dropped or resized
/// while the view exists.
///
/// # Examples
///
/// ```rust
/// use scanmat_matrix::Matrix;
///
/// let m = Matrix::<i32>::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// let view = m.shallow_copy();
/// assert_eq!(view.as_slice().as_ptr(), m.as_slice().as_ptr());
///
/// // reinterpret the same buffer as 2 x 3
/// let reshaped = view.reshape(2, 3).unwrap();
/// assert_eq!(reshaped.get(1, 2), Ok(6));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    pub(crate) data: &'a [T],
    pub(crate) shape: Shape,
}

impl<'a, T: Element> MatrixView<'a, T> {
    /// Creates a view of `cols` x `rows` over borrowed row-major data.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::SizeMismatch`] unless `data.len() == cols * rows`.
    pub fn from_slice(cols: usize, rows: usize, data: &'a [T]) -> Result<Self, MatrixError> {
        let shape = Shape::new(cols, rows);
        let numel = shape.checked_numel()?;
        if numel != data.len() {
            return Err(MatrixError::SizeMismatch {
                expected: numel,
                actual: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// The extents of the view.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// The aliased elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns element `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<T, MatrixError> {
        let offset = self.shape.checked_offset(x, y)?;
        Ok(self.data[offset])
    }

    /// Borrows row `n`.
    pub fn row(&self, n: usize) -> Result<&'a [T], MatrixError> {
        if n >= self.shape.rows {
            return Err(MatrixError::index_out_of_range(n, self.shape.rows, "row"));
        }
        let start = n * self.shape.cols;
        Ok(&self.data[start..start + self.shape.cols])
    }

    /// Reinterprets the same elements with new extents.
    pub fn reshape(&self, cols: usize, rows: usize) -> Result<Self, MatrixError> {
        let numel = Shape::new(cols, rows).checked_numel()?;
        if numel != self.data.len() {
            return Err(MatrixError::SizeMismatch {
                expected: self.data.len(),
                actual: numel,
            });
        }
        Ok(Self {
            data: self.data,
            shape: Shape::new(cols, rows),
        })
    }

    /// Deep-copies the viewed elements into an owned matrix.
    pub fn to_matrix(&self) -> Result<Matrix<T>, MatrixError> {
        Matrix::from_slice(self.shape.cols, self.shape.rows, self.data)
    }
}

/// A mutable non-owning alias of a matrix buffer.
///
/// Writes through the view land in the owner's buffer.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    pub(crate) data: &'a mut [T],
    pub(crate) shape: Shape,
}

impl<T: Element> MatrixViewMut<'_, T> {
    /// The extents of the view.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The aliased elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    /// The aliased elements in row-major order, mutable.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Returns element `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<T, MatrixError> {
        let offset = self.shape.checked_offset(x, y)?;
        Ok(self.data[offset])
    }

    /// Writes element `(x, y)` into the owner's buffer.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), MatrixError> {
        let offset = self.shape.checked_offset(x, y)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Borrows row `n` mutably.
    pub fn row_mut(&mut self, n: usize) -> Result<&mut [T], MatrixError> {
        if n >= self.shape.rows {
            return Err(MatrixError::index_out_of_range(n, self.shape.rows, "row"));
        }
        let start = n * self.shape.cols;
        Ok(&mut self.data[start..start + self.shape.cols])
    }

    /// Sets every aliased element to `value`.
    pub fn fill_with(&mut self, value: T) {
        self.data.iter_mut().for_each(|v| *v = value);
    }
}
