//! Structural transforms: regions, elimination, transposition, mirroring and
//! rotation, diagonal extraction.
//!
//! Two clipping operations deliberately do not fail on out-of-range input:
//! [`Matrix::set_sub_matrix`] skips cells that fall outside either matrix, and
//! [`Matrix::remove_rows`] / [`Matrix::remove_cols`] clamp `start` and `count`
//! to the available extents. Everything else fails fast.

use crate::{storage::Shape, Element, Matrix, MatrixError};

impl<T: Element> Matrix<T> {
    /// Deep-copies the region of `width` x `height` whose top-left cell is `(left, top)`.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::OutOfBounds`] if the region exceeds the extents.
    pub fn sub_matrix(
        &self,
        left: usize,
        top: usize,
        width: usize,
        height: usize,
    ) -> Result<Matrix<T>, MatrixError> {
        let fits = left
            .checked_add(width)
            .is_some_and(|right| right <= self.shape.cols)
            && top
                .checked_add(height)
                .is_some_and(|bottom| bottom <= self.shape.rows);
        if !fits {
            return Err(MatrixError::OutOfBounds {
                left,
                top,
                width,
                height,
                cols: self.shape.cols,
                rows: self.shape.rows,
            });
        }
        let mut out = Matrix::new(width, height)?;
        for y in 0..height {
            let src = self.shape.offset(left, top + y);
            out.data[y * width..(y + 1) * width].copy_from_slice(&self.data[src..src + width]);
        }
        Ok(out)
    }

    /// Pastes the top-left `width` x `height` cells of `source` into `self` at `(left, top)`.
    ///
    /// Clipping, not failing: any cell outside `source` or outside `self` is skipped,
    /// so offsets may be negative or reach past the edges.
    pub fn set_sub_matrix(
        &mut self,
        left: isize,
        top: isize,
        width: usize,
        height: usize,
        source: &Matrix<T>,
    ) {
        let width = width.min(source.shape.cols);
        let height = height.min(source.shape.rows);
        for y in 0..height {
            let Some(dst_y) = offset_within(top, y, self.shape.rows) else {
                continue;
            };
            for x in 0..width {
                let Some(dst_x) = offset_within(left, x, self.shape.cols) else {
                    continue;
                };
                self.data[self.shape.offset(dst_x, dst_y)] = source.data[source.shape.offset(x, y)];
            }
        }
    }

    /// The `(cols - 1)` x `(rows - 1)` matrix left after striking one column and one row.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::InvalidShape`] if the matrix is empty or an index is
    /// out of range.
    pub fn minor(&self, strike_col: usize, strike_row: usize) -> Result<Matrix<T>, MatrixError> {
        if self.is_empty() || strike_col >= self.shape.cols || strike_row >= self.shape.rows {
            return Err(MatrixError::InvalidShape(format!(
                "cannot strike column {strike_col} and row {strike_row} from a {} matrix",
                self.shape
            )));
        }
        Matrix::from_fn(self.shape.cols - 1, self.shape.rows - 1, |x, y| {
            let sx = if x >= strike_col { x + 1 } else { x };
            let sy = if y >= strike_row { y + 1 } else { y };
            self.data[self.shape.offset(sx, sy)]
        })
    }

    /// Returns a copy without `count` rows starting at `start`.
    ///
    /// `count == None` removes everything from `start` to the end. A `start` past the
    /// last row removes nothing and a `count` reaching past the end is clamped.
    pub fn remove_rows(&self, start: usize, count: Option<usize>) -> Result<Matrix<T>, MatrixError> {
        let count = clamp_removal(start, count, self.shape.rows, "rows");
        let cols = self.shape.cols;
        Matrix::from_fn(cols, self.shape.rows - count, |x, y| {
            let sy = if y >= start { y + count } else { y };
            self.data[sy * cols + x]
        })
    }

    /// Returns a copy without `count` columns starting at `start`.
    ///
    /// Same clamping rules as [`Matrix::remove_rows`].
    pub fn remove_cols(&self, start: usize, count: Option<usize>) -> Result<Matrix<T>, MatrixError> {
        let count = clamp_removal(start, count, self.shape.cols, "columns");
        let cols = self.shape.cols;
        Matrix::from_fn(cols - count, self.shape.rows, |x, y| {
            let sx = if x >= start { x + count } else { x };
            self.data[y * cols + sx]
        })
    }

    /// Transposes in place.
    ///
    /// Vectors only swap their extents; square matrices swap cells; other shapes are
    /// replaced by [`Matrix::t`].
    pub fn transpose(&mut self) -> Result<(), MatrixError> {
        if self.shape.is_vector() {
            self.shape = self.shape.transposed();
        } else if self.shape.is_square() {
            let n = self.shape.cols;
            for y in 0..n {
                for x in (y + 1)..n {
                    self.data.swap(y * n + x, x * n + y);
                }
            }
        } else {
            let t = self.t()?;
            self.data = t.data;
            self.shape = t.shape;
        }
        Ok(())
    }

    /// Returns the transposed matrix.
    pub fn t(&self) -> Result<Matrix<T>, MatrixError> {
        let mut out = Matrix::new(self.shape.rows, self.shape.cols)?;
        let (cols, rows) = self.shape.pair();
        for y in 0..rows {
            for x in 0..cols {
                out.data[x * rows + y] = self.data[y * cols + x];
            }
        }
        out.name.clone_from(&self.name);
        Ok(out)
    }

    /// Reinterprets the buffer with new extents.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::SizeMismatch`] unless `cols * rows` equals the current
    /// element count.
    pub fn reshape(&mut self, cols: usize, rows: usize) -> Result<(), MatrixError> {
        let shape = Shape::new(cols, rows);
        let numel = shape.checked_numel()?;
        if numel != self.shape.numel() {
            return Err(MatrixError::SizeMismatch {
                expected: self.shape.numel(),
                actual: numel,
            });
        }
        self.shape = shape;
        Ok(())
    }

    /// Exchanges rows `a` and `b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        let rows = self.shape.rows;
        for n in [a, b] {
            if n >= rows {
                return Err(MatrixError::index_out_of_range(n, rows, "row"));
            }
        }
        if a != b {
            let cols = self.shape.cols;
            let (lo, hi) = (a.min(b), a.max(b));
            let (head, tail) = self.data.split_at_mut(hi * cols);
            head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
        }
        Ok(())
    }

    /// Exchanges columns `a` and `b`.
    pub fn swap_cols(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        let cols = self.shape.cols;
        for n in [a, b] {
            if n >= cols {
                return Err(MatrixError::index_out_of_range(n, cols, "column"));
            }
        }
        for y in 0..self.shape.rows {
            self.data.swap(y * cols + a, y * cols + b);
        }
        Ok(())
    }

    /// Mirrors the matrix in place.
    ///
    /// `horizontal == true` mirrors about the horizontal axis (the row order is
    /// reversed); otherwise about the vertical axis (the column order is reversed).
    pub fn mirror(&mut self, horizontal: bool) {
        let (cols, rows) = self.shape.pair();
        if horizontal {
            for y in 0..rows / 2 {
                for x in 0..cols {
                    self.data.swap(y * cols + x, (rows - 1 - y) * cols + x);
                }
            }
        } else {
            self.data
                .chunks_exact_mut(cols.max(1))
                .for_each(|row| row.reverse());
        }
    }

    /// Rotates by `quarters` quarter turns clockwise; negative values turn
    /// counter-clockwise.
    pub fn rotate(&mut self, quarters: i32) -> Result<(), MatrixError> {
        let (cols, rows) = self.shape.pair();
        match quarters.rem_euclid(4) {
            0 => {}
            1 => {
                let src = std::mem::take(&mut self.data);
                self.shape = self.shape.transposed();
                self.data = (0..src.len())
                    .map(|i| {
                        let (x, y) = (i % rows, i / rows);
                        src[(rows - 1 - x) * cols + y]
                    })
                    .collect();
            }
            2 => self.data.reverse(),
            3 => {
                let src = std::mem::take(&mut self.data);
                self.shape = self.shape.transposed();
                self.data = (0..src.len())
                    .map(|i| {
                        let (x, y) = (i % rows, i / rows);
                        src[x * cols + (cols - 1 - y)]
                    })
                    .collect();
            }
            q => return Err(MatrixError::InvalidRotation(q)),
        }
        Ok(())
    }

    /// The main diagonal as a `1` x `min(rows, cols)` column vector.
    pub fn diag(&self) -> Result<Matrix<T>, MatrixError> {
        let n = self.shape.rows.min(self.shape.cols);
        Matrix::from_fn(1, n, |_, i| self.data[self.shape.offset(i, i)])
    }

    /// The *product* of the main diagonal elements.
    ///
    /// Note that this is not the linear-algebra trace (a sum); callers rely on the
    /// product, which equals the determinant of a triangular matrix. See
    /// [`Matrix::diagonal_sum`] for the conventional trace.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::EmptyMatrix`] on an empty matrix.
    pub fn trace(&self) -> Result<T, MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix("trace"));
        }
        let n = self.shape.rows.min(self.shape.cols);
        Ok((0..n).fold(T::one(), |acc, i| {
            acc.wrapping_mul_elem(self.data[self.shape.offset(i, i)])
        }))
    }

    /// The sum of the main diagonal elements (the conventional trace).
    pub fn diagonal_sum(&self) -> Result<T, MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix("diagonal_sum"));
        }
        let n = self.shape.rows.min(self.shape.cols);
        Ok((0..n).fold(T::zero(), |acc, i| {
            acc.wrapping_add_elem(self.data[self.shape.offset(i, i)])
        }))
    }

    /// A copy with every element below the main diagonal set to zero.
    pub fn upper_triangular(&self) -> Result<Matrix<T>, MatrixError> {
        Matrix::from_fn(self.shape.cols, self.shape.rows, |x, y| {
            if x >= y {
                self.data[self.shape.offset(x, y)]
            } else {
                T::zero()
            }
        })
    }
}

/// `base + step` if it lands inside `0..limit`.
fn offset_within(base: isize, step: usize, limit: usize) -> Option<usize> {
    let pos = base.checked_add(isize::try_from(step).ok()?)?;
    usize::try_from(pos).ok().filter(|&p| p < limit)
}

fn clamp_removal(start: usize, count: Option<usize>, available: usize, what: &str) -> usize {
    if start >= available {
        log::debug!("start {start} >= {available} {what}, not removing anything");
        return 0;
    }
    let left = available - start;
    match count {
        None => left,
        Some(n) if n > left => {
            log::debug!("removing {left} {what} instead of {n}");
            left
        }
        Some(n) => n,
    }
}
