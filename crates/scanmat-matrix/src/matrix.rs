use std::ops::{Index, IndexMut};

use num_traits::AsPrimitive;

use crate::{
    storage::{allocate, allocate_copy, Shape},
    view::{MatrixView, MatrixViewMut},
    Element, MatrixError,
};

/// A dense two-dimensional matrix that owns its elements.
///
/// Elements are stored in one contiguous row-major buffer; element `(x, y)`
/// (column `x`, row `y`) lives at offset `y * cols + x`. A matrix with zero
/// rows or zero columns holds no allocation.
///
/// Cloning is always a deep copy. Use [`Matrix::shallow_copy`] for a
/// borrowed alias of the same buffer.
///
/// # Examples
///
/// ```
/// use scanmat_matrix::Matrix;
///
/// let m = Matrix::<f64>::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(m.get(1, 0), Ok(2.0));
/// assert_eq!(m.get(0, 1), Ok(3.0));
/// ```
#[derive(Debug)]
pub struct Matrix<T> {
    pub(crate) data: Vec<T>,
    pub(crate) shape: Shape,
    pub(crate) name: Option<String>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            shape: Shape::default(),
            name: None,
        }
    }
}

impl<T: Element> Matrix<T> {
    /// Creates a zero-filled matrix of `cols` x `rows`.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::InvalidDimension`] if the element count exceeds the
    /// 32-bit signed range.
    pub fn new(cols: usize, rows: usize) -> Result<Self, MatrixError> {
        let shape = Shape::new(cols, rows);
        Ok(Self {
            data: allocate(shape)?,
            shape,
            name: None,
        })
    }

    /// Creates an empty matrix (0 x 0) without allocating.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Alias of [`Matrix::new`], spelled after the fill it performs.
    pub fn zeros(cols: usize, rows: usize) -> Result<Self, MatrixError> {
        Self::new(cols, rows)
    }

    /// Creates a matrix of `cols` x `rows` with every element set to `value`.
    pub fn from_elem(cols: usize, rows: usize, value: T) -> Result<Self, MatrixError> {
        let mut m = Self::new(cols, rows)?;
        m.data.iter_mut().for_each(|v| *v = value);
        Ok(m)
    }

    /// Creates a matrix of ones.
    pub fn ones(cols: usize, rows: usize) -> Result<Self, MatrixError> {
        Self::from_elem(cols, rows, T::one())
    }

    /// Creates a `cols` x `rows` matrix with ones on the main diagonal.
    pub fn eye(cols: usize, rows: usize) -> Result<Self, MatrixError> {
        Self::from_fn(cols, rows, |x, y| if x == y { T::one() } else { T::zero() })
    }

    /// Creates the `n` x `n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        Self::eye(n, n)
    }

    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::SizeMismatch`] unless `data.len() == cols * rows`.
    pub fn from_vec(cols: usize, rows: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        let shape = Shape::new(cols, rows);
        let numel = shape.checked_numel()?;
        if numel != data.len() {
            return Err(MatrixError::SizeMismatch {
                expected: numel,
                actual: data.len(),
            });
        }
        let data = if numel == 0 { Vec::new() } else { data };
        Ok(Self {
            data,
            shape,
            name: None,
        })
    }

    /// Creates a matrix by copying row-major data from a slice.
    pub fn from_slice(cols: usize, rows: usize, data: &[T]) -> Result<Self, MatrixError> {
        Self::from_vec(cols, rows, allocate_copy(data)?)
    }

    /// Creates a matrix whose element `(x, y)` is `f(x, y)`.
    pub fn from_fn<F>(cols: usize, rows: usize, mut f: F) -> Result<Self, MatrixError>
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut m = Self::new(cols, rows)?;
        for y in 0..rows {
            for x in 0..cols {
                m.data[y * cols + x] = f(x, y);
            }
        }
        Ok(m)
    }

    /// Creates a matrix from a row-major sample buffer handed over by a capture or
    /// image pipeline, converting every sample to `T`.
    ///
    /// The samples are copied; the buffer is not retained.
    ///
    /// # Examples
    ///
    /// ```
    /// use scanmat_matrix::Matrix;
    ///
    /// let pixels: [u8; 4] = [0, 64, 128, 255];
    /// let m = Matrix::<f64>::from_samples(2, 2, &pixels).unwrap();
    /// assert_eq!(m.get(1, 1), Ok(255.0));
    /// ```
    pub fn from_samples<S>(cols: usize, rows: usize, samples: &[S]) -> Result<Self, MatrixError>
    where
        S: AsPrimitive<T>,
    {
        let shape = Shape::new(cols, rows);
        let numel = shape.checked_numel()?;
        if samples.len() != numel {
            return Err(MatrixError::SizeMismatch {
                expected: numel,
                actual: samples.len(),
            });
        }
        let mut m = Self::new(cols, rows)?;
        m.data
            .iter_mut()
            .zip(samples.iter())
            .for_each(|(dst, src)| *dst = src.as_());
        Ok(m)
    }

    /// (Re)allocates the buffer to `cols` x `rows` zeroed elements, discarding the
    /// previous contents. A zero extent leaves the matrix empty without allocating.
    pub fn create(&mut self, cols: usize, rows: usize) -> Result<(), MatrixError> {
        let shape = Shape::new(cols, rows);
        self.data = allocate(shape)?;
        self.shape = shape;
        Ok(())
    }

    /// Releases the buffer and resets the extents to 0 x 0. The name is kept.
    pub fn clear(&mut self) {
        self.data = Vec::new();
        self.shape = Shape::default();
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

    /// The extents of the matrix.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of elements (`rows * cols`).
    #[inline]
    pub fn size(&self) -> usize {
        self.shape.numel()
    }

    /// True if the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() || self.shape.is_empty()
    }

    /// True for a row or column vector.
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.shape.is_vector()
    }

    /// True if rows and columns are equal.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.shape.is_square()
    }

    /// The elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements in row-major order, mutable.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the matrix and returns its row-major elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterates over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the elements in row-major order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns element `(x, y)`.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::IndexOutOfRange`] outside the extents.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Result<T, MatrixError> {
        let offset = self.shape.checked_offset(x, y)?;
        Ok(self.data[offset])
    }

    /// Writes element `(x, y)`.
    ///
    /// Out-of-range writes fail; they are never silently dropped.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), MatrixError> {
        let offset = self.shape.checked_offset(x, y)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Returns element `i` of a row or column vector.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::NotAVector`] if the matrix has more than one row and
    /// more than one column, and with [`MatrixError::IndexOutOfRange`] past the end.
    pub fn vector_get(&self, i: usize) -> Result<T, MatrixError> {
        let offset = self.vector_offset(i)?;
        Ok(self.data[offset])
    }

    /// Writes element `i` of a row or column vector.
    pub fn vector_set(&mut self, i: usize, value: T) -> Result<(), MatrixError> {
        let offset = self.vector_offset(i)?;
        self.data[offset] = value;
        Ok(())
    }

    fn vector_offset(&self, i: usize) -> Result<usize, MatrixError> {
        if !self.shape.is_vector() {
            return Err(MatrixError::NotAVector {
                cols: self.shape.cols,
                rows: self.shape.rows,
            });
        }
        if i >= self.data.len() {
            return Err(MatrixError::index_out_of_range(i, self.data.len(), "element"));
        }
        Ok(i)
    }

    /// Borrows row `n` as a contiguous slice.
    pub fn row(&self, n: usize) -> Result<&[T], MatrixError> {
        if n >= self.shape.rows {
            return Err(MatrixError::index_out_of_range(n, self.shape.rows, "row"));
        }
        let start = n * self.shape.cols;
        Ok(&self.data[start..start + self.shape.cols])
    }

    /// Borrows row `n` as a mutable contiguous slice.
    pub fn row_mut(&mut self, n: usize) -> Result<&mut [T], MatrixError> {
        if n >= self.shape.rows {
            return Err(MatrixError::index_out_of_range(n, self.shape.rows, "row"));
        }
        let start = n * self.shape.cols;
        Ok(&mut self.data[start..start + self.shape.cols])
    }

    /// Copies column `n` into a `1` x `rows` column vector.
    pub fn col(&self, n: usize) -> Result<Matrix<T>, MatrixError> {
        if n >= self.shape.cols {
            return Err(MatrixError::index_out_of_range(n, self.shape.cols, "column"));
        }
        Matrix::from_fn(1, self.shape.rows, |_, y| self.data[self.shape.offset(n, y)])
    }

    /// A borrowed alias of this matrix's buffer.
    ///
    /// The view does not own the elements and cannot outlive the matrix.
    pub fn shallow_copy(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: &self.data,
            shape: self.shape,
        }
    }

    /// A mutable borrowed alias of this matrix's buffer.
    pub fn shallow_copy_mut(&mut self) -> MatrixViewMut<'_, T> {
        MatrixViewMut {
            data: &mut self.data,
            shape: self.shape,
        }
    }

    /// Sets every element to zero, keeping the allocation.
    pub fn set_zero(&mut self) {
        self.data.iter_mut().for_each(|v| *v = T::zero());
    }

    /// Snaps every element with `|v| <= epsilon` to exactly zero.
    ///
    /// Returns the number of elements that are zero afterwards because of the snap,
    /// including those that already were zero.
    pub fn round_zero(&mut self, epsilon: T) -> usize {
        let mut count = 0;
        for v in self.data.iter_mut() {
            if v.abs_elem() <= epsilon {
                *v = T::zero();
                count += 1;
            }
        }
        count
    }

    /// Copies `src` into `self`, reallocating only if the shapes differ.
    ///
    /// The name is copied as well. The buffers never alias afterwards.
    pub fn assign(&mut self, src: &Matrix<T>) -> Result<(), MatrixError> {
        if self.shape != src.shape || self.data.len() != src.data.len() {
            self.data = allocate_copy(&src.data)?;
            self.shape = src.shape;
        } else {
            self.data.copy_from_slice(&src.data);
        }
        self.name.clone_from(&src.name);
        Ok(())
    }
}

impl<T> Matrix<T> {
    /// Associates a diagnostic label with the matrix.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Builder form of [`Matrix::set_name`].
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    /// The diagnostic label, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Case-sensitive comparison of the diagnostic label.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

impl<T: Element> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            shape: self.shape,
            name: self.name.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.shape == source.shape && self.data.len() == source.data.len() {
            self.data.copy_from_slice(&source.data);
        } else {
            self.data.clone_from(&source.data);
            self.shape = source.shape;
        }
        self.name.clone_from(&source.name);
    }
}

/// Exact elementwise comparison; the name is not compared.
impl<T: Element> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

/// Panics if `(x, y)` is out of range.
impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        match self.shape.checked_offset(x, y) {
            Ok(offset) => &self.data[offset],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        match self.shape.checked_offset(x, y) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("{e}"),
        }
    }
}

/// Linear row-major indexing; panics past the end.
impl<T: Element> Index<usize> for Matrix<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Element> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_zero_is_empty() -> Result<(), MatrixError> {
        let mut m = Matrix::<f64>::new(3, 2)?;
        assert_eq!(m.size(), 6);
        m.create(0, 0)?;
        assert!(m.is_empty());
        assert_eq!(m.size(), 0);
        assert_eq!(m.as_slice().len(), 0);

        let m = Matrix::<f64>::new(4, 0)?;
        assert!(m.is_empty());
        assert_eq!(m.size(), 0);
        Ok(())
    }

    #[test]
    fn test_clear_is_idempotent() -> Result<(), MatrixError> {
        let mut m = Matrix::<i32>::ones(2, 2)?.with_name("K");
        m.clear();
        m.clear();
        assert!(m.is_empty());
        assert_eq!((m.cols(), m.rows()), (0, 0));
        assert!(m.has_name("K"));
        Ok(())
    }

    #[test]
    fn test_get_set_2d() -> Result<(), MatrixError> {
        let mut m = Matrix::<i32>::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6])?;
        assert_eq!(m.get(2, 0)?, 3);
        assert_eq!(m.get(0, 1)?, 4);
        m.set(1, 1, 50)?;
        assert_eq!(m[(1, 1)], 50);
        assert_eq!(m[4], 50);
        assert_eq!(
            m.set(3, 0, 7),
            Err(MatrixError::index_out_of_range(3, 3, "column"))
        );
        assert_eq!(
            m.get(0, 2),
            Err(MatrixError::index_out_of_range(2, 2, "row"))
        );
        Ok(())
    }

    #[test]
    fn test_vector_access() -> Result<(), MatrixError> {
        let mut row = Matrix::<u8>::from_vec(3, 1, vec![7, 8, 9])?;
        assert_eq!(row.vector_get(2)?, 9);
        row.vector_set(0, 1)?;
        assert_eq!(row.as_slice(), &[1, 8, 9]);
        assert_eq!(
            row.vector_get(3),
            Err(MatrixError::index_out_of_range(3, 3, "element"))
        );

        let col = Matrix::<u8>::from_vec(1, 2, vec![4, 5])?;
        assert_eq!(col.vector_get(1)?, 5);

        let square = Matrix::<u8>::new(2, 2)?;
        assert_eq!(
            square.vector_get(0),
            Err(MatrixError::NotAVector { cols: 2, rows: 2 })
        );
        Ok(())
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        assert_eq!(
            Matrix::<f32>::from_vec(2, 2, vec![1.0; 3]),
            Err(MatrixError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_from_samples_converts() -> Result<(), MatrixError> {
        let samples: Vec<u8> = vec![0, 1, 254, 255, 10, 20];
        let m = Matrix::<f64>::from_samples(3, 2, &samples)?;
        assert_eq!(m.as_slice(), &[0.0, 1.0, 254.0, 255.0, 10.0, 20.0]);

        let f = Matrix::<f32>::from_samples(2, 1, &[0.5f64, 1.5])?;
        assert_eq!(f.as_slice(), &[0.5, 1.5]);
        assert!(Matrix::<f64>::from_samples(2, 2, &samples).is_err());
        Ok(())
    }

    #[test]
    fn test_row_and_col() -> Result<(), MatrixError> {
        let mut m = Matrix::<i32>::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6])?;
        assert_eq!(m.row(1)?, &[3, 4]);
        m.row_mut(2)?[0] = 50;
        assert_eq!(m.get(0, 2)?, 50);
        assert!(m.row(3).is_err());

        let c = m.col(1)?;
        assert_eq!((c.cols(), c.rows()), (1, 3));
        assert_eq!(c.as_slice(), &[2, 4, 6]);
        Ok(())
    }

    #[test]
    fn test_deep_copy_never_aliases() -> Result<(), MatrixError> {
        let a = Matrix::<f64>::from_vec(2, 1, vec![1.0, 2.0])?;
        let mut b = a.clone();
        b.set(0, 0, 10.0)?;
        assert_eq!(a.get(0, 0)?, 1.0);
        assert_ne!(a.as_slice().as_ptr(), b.as_slice().as_ptr());
        Ok(())
    }

    #[test]
    fn test_clone_from_reuses_matching_buffer() -> Result<(), MatrixError> {
        let src = Matrix::<f64>::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
        let mut dst = Matrix::<f64>::new(2, 2)?;
        let before = dst.as_slice().as_ptr();
        dst.clone_from(&src);
        assert_eq!(dst, src);
        assert_eq!(dst.as_slice().as_ptr(), before);

        let mut other = Matrix::<f64>::new(3, 1)?;
        other.assign(&src)?;
        assert_eq!(other, src);
        assert_eq!(other.shape(), Shape::new(2, 2));
        Ok(())
    }

    #[test]
    fn test_equality_ignores_name() -> Result<(), MatrixError> {
        let a = Matrix::<i32>::identity(2)?.with_name("A");
        let b = Matrix::<i32>::identity(2)?;
        assert_eq!(a, b);
        assert_ne!(a, Matrix::<i32>::identity(3)?);
        assert_ne!(
            Matrix::<i32>::from_vec(2, 1, vec![1, 2])?,
            Matrix::<i32>::from_vec(1, 2, vec![1, 2])?
        );
        Ok(())
    }

    #[test]
    fn test_round_zero() -> Result<(), MatrixError> {
        let mut m = Matrix::<f64>::from_vec(4, 1, vec![1e-15, -1e-13, 0.5, 0.0])?;
        assert_eq!(m.round_zero(1e-12), 3);
        assert_eq!(m.as_slice(), &[0.0, 0.0, 0.5, 0.0]);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_panics_out_of_range() {
        let m = Matrix::<f64>::default();
        let _value: f64 = m[(0, 0)];
    }
}
