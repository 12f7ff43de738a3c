use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Element, Matrix, MatrixError};

impl<T: Element> Matrix<T> {
    /// Applies `op` to every pair of corresponding elements and returns the result.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] unless both operands have the
    /// same extents.
    pub fn element_wise_op<F>(
        &self,
        other: &Matrix<T>,
        operation: &'static str,
        op: F,
    ) -> Result<Matrix<T>, MatrixError>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same_shape(other, operation)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Matrix::from_vec(self.shape.cols, self.shape.rows, data)
    }

    fn element_wise_op_inplace<F>(
        &mut self,
        other: &Matrix<T>,
        operation: &'static str,
        op: F,
    ) -> Result<(), MatrixError>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same_shape(other, operation)?;
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, &b)| *a = op(*a, b));
        Ok(())
    }

    fn check_same_shape(&self, other: &Matrix<T>, operation: &'static str) -> Result<(), MatrixError> {
        if self.shape != other.shape {
            return Err(MatrixError::dimension_mismatch(
                operation,
                self.shape.pair(),
                other.shape.pair(),
            ));
        }
        Ok(())
    }

    /// Elementwise sum of two matrices of identical extents. Integers wrap on overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use scanmat_matrix::Matrix;
    ///
    /// let a = Matrix::<i32>::from_vec(2, 1, vec![1, 2]).unwrap();
    /// let b = Matrix::<i32>::from_vec(2, 1, vec![10, 20]).unwrap();
    /// assert_eq!(a.try_add(&b).unwrap().as_slice(), &[11, 22]);
    /// assert!(a.try_add(&Matrix::<i32>::new(1, 2).unwrap()).is_err());
    /// ```
    pub fn try_add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.element_wise_op(other, "add", T::wrapping_add_elem)
    }

    /// Elementwise difference of two matrices of identical extents.
    pub fn try_sub(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.element_wise_op(other, "sub", T::wrapping_sub_elem)
    }

    /// In-place form of [`Matrix::try_add`].
    pub fn try_add_assign(&mut self, other: &Matrix<T>) -> Result<(), MatrixError> {
        self.element_wise_op_inplace(other, "add_assign", T::wrapping_add_elem)
    }

    /// In-place form of [`Matrix::try_sub`].
    pub fn try_sub_assign(&mut self, other: &Matrix<T>) -> Result<(), MatrixError> {
        self.element_wise_op_inplace(other, "sub_assign", T::wrapping_sub_elem)
    }

    /// Matrix product `self * other`, wrapping on integer overflow.
    ///
    /// The result has `other.cols()` columns and `self.rows()` rows.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] unless `self.cols() == other.rows()`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.shape.cols != other.shape.rows {
            return Err(MatrixError::dimension_mismatch(
                "matmul",
                self.shape.pair(),
                other.shape.pair(),
            ));
        }
        let (inner, rows, cols) = (self.shape.cols, self.shape.rows, other.shape.cols);
        let mut out: Matrix<T> = Matrix::new(cols, rows)?;
        for y in 0..rows {
            let lhs_row = &self.data[y * inner..(y + 1) * inner];
            let out_row = &mut out.data[y * cols..(y + 1) * cols];
            for (k, &a) in lhs_row.iter().enumerate() {
                let rhs_row = &other.data[k * cols..(k + 1) * cols];
                for (acc, &b) in out_row.iter_mut().zip(rhs_row) {
                    *acc = acc.wrapping_add_elem(a.wrapping_mul_elem(b));
                }
            }
        }
        Ok(out)
    }

    /// Replaces `self` with `self * other`.
    pub fn matmul_assign(&mut self, other: &Matrix<T>) -> Result<(), MatrixError> {
        let product = self.matmul(other)?;
        self.data = product.data;
        self.shape = product.shape;
        Ok(())
    }

    /// Adds `value` to every element in place.
    pub fn add_scalar(&mut self, value: T) {
        self.data.iter_mut().for_each(|v| *v = v.wrapping_add_elem(value));
    }

    /// Subtracts `value` from every element in place.
    pub fn sub_scalar(&mut self, value: T) {
        self.data.iter_mut().for_each(|v| *v = v.wrapping_sub_elem(value));
    }

    /// Multiplies every element by `value` in place.
    pub fn mul_scalar(&mut self, value: T) {
        self.data.iter_mut().for_each(|v| *v = v.wrapping_mul_elem(value));
    }

    /// Divides every element by `value` in place.
    ///
    /// There is no zero check: floating types produce infinities or NaN.
    ///
    /// # Panics
    ///
    /// Integer division by zero panics, as it does for the primitive types.
    pub fn div_scalar(&mut self, value: T) {
        self.data.iter_mut().for_each(|v| *v = *v / value);
    }
}

macro_rules! impl_scalar_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $inplace:ident) => {
        impl<T: Element> $assign_trait<T> for Matrix<T> {
            fn $assign_method(&mut self, rhs: T) {
                self.$inplace(rhs);
            }
        }

        impl<T: Element> $trait<T> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(mut self, rhs: T) -> Matrix<T> {
                self.$inplace(rhs);
                self
            }
        }

        impl<T: Element> $trait<T> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: T) -> Matrix<T> {
                let mut out = self.clone();
                out.$inplace(rhs);
                out
            }
        }
    };
}

impl_scalar_op!(Add, add, AddAssign, add_assign, add_scalar);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign, sub_scalar);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, mul_scalar);
impl_scalar_op!(Div, div, DivAssign, div_assign, div_scalar);

// `2.0 * m` and `2.0 + m` for the floating element types.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn add(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs + self
                }
            }

            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);

impl<T: Element + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        self.data.iter_mut().for_each(|v| *v = -*v);
        self
    }
}

impl<T: Element + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -self.clone()
    }
}
