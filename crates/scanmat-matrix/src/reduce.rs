use crate::{Element, Matrix, MatrixError};

impl<T: Element> Matrix<T> {
    /// Smallest element.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::EmptyMatrix`] on an empty matrix.
    pub fn min(&self) -> Result<T, MatrixError> {
        self.min_with_index().map(|(v, _)| v)
    }

    /// Largest element.
    pub fn max(&self) -> Result<T, MatrixError> {
        self.max_with_index().map(|(v, _)| v)
    }

    /// Smallest element and the linear index of its first occurrence.
    pub fn min_with_index(&self) -> Result<(T, usize), MatrixError> {
        extremum(&self.data, "min", |candidate, best| candidate < best)
    }

    /// Largest element and the linear index of its first occurrence.
    pub fn max_with_index(&self) -> Result<(T, usize), MatrixError> {
        extremum(&self.data, "max", |candidate, best| candidate > best)
    }

    /// Sum of all elements, wrapping on integer overflow.
    pub fn sum(&self) -> Result<T, MatrixError> {
        self.sum_with_overflow().map(|(sum, _)| sum)
    }

    /// Sum of all elements and whether any partial sum overflowed.
    ///
    /// Integers report wraparound exactly; floats report a finite accumulator
    /// turning infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use scanmat_matrix::Matrix;
    ///
    /// let m = Matrix::<u8>::from_vec(2, 1, vec![200, 100]).unwrap();
    /// assert_eq!(m.sum_with_overflow(), Ok((44, true)));
    /// ```
    pub fn sum_with_overflow(&self) -> Result<(T, bool), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix("sum"));
        }
        Ok(self
            .data
            .iter()
            .fold((T::zero(), false), |(acc, overflow), &v| {
                let (next, wrapped) = acc.overflowing_add_elem(v);
                (next, overflow || wrapped)
            }))
    }

    /// Per-row minima as a `1` x `rows` column vector.
    pub fn row_minima(&self) -> Result<Matrix<T>, MatrixError> {
        self.reduce_rows("row_minima", |row| {
            extremum(row, "row_minima", |c, b| c < b).map(|(v, _)| v)
        })
    }

    /// Per-row maxima as a `1` x `rows` column vector.
    pub fn row_maxima(&self) -> Result<Matrix<T>, MatrixError> {
        self.reduce_rows("row_maxima", |row| {
            extremum(row, "row_maxima", |c, b| c > b).map(|(v, _)| v)
        })
    }

    /// Per-row sums as a `1` x `rows` column vector.
    pub fn row_sums(&self) -> Result<Matrix<T>, MatrixError> {
        self.reduce_rows("row_sums", |row| Ok(sum_of(row.iter().copied())))
    }

    /// Per-column minima as a `cols` x `1` row vector.
    pub fn col_minima(&self) -> Result<Matrix<T>, MatrixError> {
        self.reduce_cols("col_minima", |n| {
            self.col_iter(n)?
                .reduce(|best, v| if v < best { v } else { best })
                .ok_or(MatrixError::EmptyMatrix("col_minima"))
        })
    }

    /// Per-column maxima as a `cols` x `1` row vector.
    pub fn col_maxima(&self) -> Result<Matrix<T>, MatrixError> {
        self.reduce_cols("col_maxima", |n| {
            self.col_iter(n)?
                .reduce(|best, v| if v > best { v } else { best })
                .ok_or(MatrixError::EmptyMatrix("col_maxima"))
        })
    }

    /// Per-column sums as a `cols` x `1` row vector.
    pub fn col_sums(&self) -> Result<Matrix<T>, MatrixError> {
        self.reduce_cols("col_sums", |n| Ok(sum_of(self.col_iter(n)?)))
    }

    /// Sum of row `n`, wrapping on integer overflow like [`Matrix::sum`].
    pub fn row_sum(&self, n: usize) -> Result<T, MatrixError> {
        Ok(sum_of(self.row(n)?.iter().copied()))
    }

    /// Sum of the absolute values of row `n`.
    pub fn row_sum_abs(&self, n: usize) -> Result<T, MatrixError> {
        Ok(sum_of(self.row(n)?.iter().map(|v| v.abs_elem())))
    }

    /// Sum of column `n`.
    pub fn col_sum(&self, n: usize) -> Result<T, MatrixError> {
        Ok(sum_of(self.col_iter(n)?))
    }

    /// Sum of the absolute values of column `n`.
    pub fn col_sum_abs(&self, n: usize) -> Result<T, MatrixError> {
        Ok(sum_of(self.col_iter(n)?.map(|v| v.abs_elem())))
    }

    fn col_iter(&self, n: usize) -> Result<impl Iterator<Item = T> + '_, MatrixError> {
        if n >= self.shape.cols {
            return Err(MatrixError::index_out_of_range(n, self.shape.cols, "column"));
        }
        Ok(self.data.iter().skip(n).step_by(self.shape.cols).copied())
    }

    fn reduce_rows<F>(&self, operation: &'static str, mut f: F) -> Result<Matrix<T>, MatrixError>
    where
        F: FnMut(&[T]) -> Result<T, MatrixError>,
    {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix(operation));
        }
        let values = self
            .data
            .chunks_exact(self.shape.cols)
            .map(&mut f)
            .collect::<Result<Vec<_>, _>>()?;
        Matrix::from_vec(1, self.shape.rows, values)
    }

    fn reduce_cols<F>(&self, operation: &'static str, mut f: F) -> Result<Matrix<T>, MatrixError>
    where
        F: FnMut(usize) -> Result<T, MatrixError>,
    {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix(operation));
        }
        let values = (0..self.shape.cols)
            .map(&mut f)
            .collect::<Result<Vec<_>, _>>()?;
        Matrix::from_vec(self.shape.cols, 1, values)
    }
}

fn extremum<T, F>(data: &[T], operation: &'static str, better: F) -> Result<(T, usize), MatrixError>
where
    T: Element,
    F: Fn(T, T) -> bool,
{
    let (&first, rest) = data
        .split_first()
        .ok_or(MatrixError::EmptyMatrix(operation))?;
    Ok(rest
        .iter()
        .enumerate()
        .fold((first, 0), |(best, index), (i, &v)| {
            if better(v, best) {
                (v, i + 1)
            } else {
                (best, index)
            }
        }))
}

fn sum_of<T: Element>(values: impl Iterator<Item = T>) -> T {
    values.fold(T::zero(), T::wrapping_add_elem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Shape;

    fn sample() -> Result<Matrix<i32>, MatrixError> {
        // 3 -1  4
        // 1 -5  9
        Matrix::from_vec(3, 2, vec![3, -1, 4, 1, -5, 9])
    }

    #[test]
    fn test_min_max_with_index() -> Result<(), MatrixError> {
        let m = sample()?;
        assert_eq!(m.min_with_index()?, (-5, 4));
        assert_eq!(m.max_with_index()?, (9, 5));
        assert_eq!(m.min()?, -5);
        assert_eq!(m.max()?, 9);

        let ties = Matrix::<u8>::from_vec(3, 1, vec![2, 7, 7])?;
        assert_eq!(ties.max_with_index()?, (7, 1));
        Ok(())
    }

    #[test]
    fn test_empty_reductions_fail() {
        let m = Matrix::<f64>::empty();
        assert_eq!(m.min(), Err(MatrixError::EmptyMatrix("min")));
        assert_eq!(m.max_with_index(), Err(MatrixError::EmptyMatrix("max")));
        assert_eq!(m.sum(), Err(MatrixError::EmptyMatrix("sum")));
        assert_eq!(m.row_sums(), Err(MatrixError::EmptyMatrix("row_sums")));
        assert_eq!(m.col_maxima(), Err(MatrixError::EmptyMatrix("col_maxima")));
    }

    #[test]
    fn test_sum_overflow_detection() -> Result<(), MatrixError> {
        assert_eq!(sample()?.sum_with_overflow()?, (11, false));

        let m = Matrix::<i8>::from_vec(3, 1, vec![100, 100, -100])?;
        let (sum, overflow) = m.sum_with_overflow()?;
        assert!(overflow);
        assert_eq!(sum, 100);

        let f = Matrix::<f32>::from_vec(2, 1, vec![f32::MAX, f32::MAX])?;
        assert!(f.sum_with_overflow()?.1);
        Ok(())
    }

    #[test]
    fn test_row_and_col_sums_wrap() -> Result<(), MatrixError> {
        let m = Matrix::<u8>::from_vec(2, 2, vec![200, 100, 250, 6])?;
        assert_eq!(m.sum_with_overflow()?, (44, true));
        assert_eq!(m.row_sum(0)?, 44);
        assert_eq!(m.row_sum_abs(0)?, 44);
        assert_eq!(m.row_sums()?.as_slice(), &[44, 0]);
        assert_eq!(m.col_sum(0)?, 194);
        assert_eq!(m.col_sum_abs(1)?, 106);
        assert_eq!(m.col_sums()?.as_slice(), &[194, 106]);

        let s = Matrix::<i8>::from_vec(2, 1, vec![i8::MIN, 1])?;
        assert_eq!(s.row_sum_abs(0)?, -127);
        Ok(())
    }

    #[test]
    fn test_row_reductions() -> Result<(), MatrixError> {
        let m = sample()?;
        let minima = m.row_minima()?;
        assert_eq!(minima.shape(), Shape::new(1, 2));
        assert_eq!(minima.as_slice(), &[-1, -5]);
        assert_eq!(m.row_maxima()?.as_slice(), &[4, 9]);
        assert_eq!(m.row_sums()?.as_slice(), &[6, 5]);
        assert_eq!(m.row_sum(1)?, 5);
        assert_eq!(m.row_sum_abs(1)?, 15);
        assert_eq!(
            m.row_sum(2),
            Err(MatrixError::index_out_of_range(2, 2, "row"))
        );
        Ok(())
    }

    #[test]
    fn test_col_reductions() -> Result<(), MatrixError> {
        let m = sample()?;
        let sums = m.col_sums()?;
        assert_eq!(sums.shape(), Shape::new(3, 1));
        assert_eq!(sums.as_slice(), &[4, -6, 13]);
        assert_eq!(m.col_minima()?.as_slice(), &[1, -5, 4]);
        assert_eq!(m.col_maxima()?.as_slice(), &[3, -1, 9]);
        assert_eq!(m.col_sum(1)?, -6);
        assert_eq!(m.col_sum_abs(1)?, 6);
        assert_eq!(
            m.col_sum_abs(3),
            Err(MatrixError::index_out_of_range(3, 3, "column"))
        );
        Ok(())
    }
}
