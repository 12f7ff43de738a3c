use num_traits::NumCast;

use crate::{Element, Matrix};

/// Patterns accepted by [`Matrix::fill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPattern {
    /// All zeros.
    Zeros,
    /// Ones on the main diagonal, zeros elsewhere (also for rectangular matrices).
    Identity,
    /// `data[i] = i` in row-major order.
    UpCounter,
    /// All ones.
    Ones,
    /// The Hilbert matrix `1 / (x + y + 1)`, a classic near-singular test input.
    Hilbert,
    /// `(x * (y² + 1) - 2) / (x + 1)` in integer arithmetic, a non-singular test input.
    M1,
}

impl<T: Element> Matrix<T> {
    /// Overwrites every element according to `pattern`.
    ///
    /// Values that the element type cannot represent (a negative entry in an
    /// unsigned matrix, a counter past `u8::MAX`, ...) are written as zero.
    pub fn fill(&mut self, pattern: FillPattern) {
        let cols = self.shape.cols;
        for (i, v) in self.data.iter_mut().enumerate() {
            let (x, y) = (i % cols, i / cols);
            *v = match pattern {
                FillPattern::Zeros => T::zero(),
                FillPattern::Ones => T::one(),
                FillPattern::Identity if x == y => T::one(),
                FillPattern::Identity => T::zero(),
                FillPattern::UpCounter => cast_or_zero(i),
                FillPattern::Hilbert => cast_or_zero(1.0 / (x + y + 1) as f64),
                FillPattern::M1 => {
                    let (x, y) = (x as i64, y as i64);
                    cast_or_zero((x * (y * y + 1) - 2) / (x + 1))
                }
            };
        }
    }

    /// Builder form of [`Matrix::fill`].
    pub fn filled(mut self, pattern: FillPattern) -> Self {
        self.fill(pattern);
        self
    }
}

fn cast_or_zero<T: Element, S: num_traits::ToPrimitive>(value: S) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::zero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixError;

    #[test]
    fn test_fill_identity_rectangular() -> Result<(), MatrixError> {
        let m = Matrix::<i32>::new(3, 2)?.filled(FillPattern::Identity);
        assert_eq!(m.as_slice(), &[1, 0, 0, 0, 1, 0]);
        Ok(())
    }

    #[test]
    fn test_fill_upcounter() -> Result<(), MatrixError> {
        let m = Matrix::<u16>::new(2, 2)?.filled(FillPattern::UpCounter);
        assert_eq!(m.as_slice(), &[0, 1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_fill_hilbert() -> Result<(), MatrixError> {
        let m = Matrix::<f64>::new(3, 3)?.filled(FillPattern::Hilbert);
        assert_eq!(m.get(0, 0)?, 1.0);
        assert_eq!(m.get(1, 0)?, 0.5);
        assert_eq!(m.get(2, 2)?, 0.2);
        Ok(())
    }

    #[test]
    fn test_fill_m1() -> Result<(), MatrixError> {
        let m = Matrix::<i32>::new(3, 2)?.filled(FillPattern::M1);
        // row 0: (x - 2) / (x + 1), row 1: (2x - 2) / (x + 1)
        assert_eq!(m.as_slice(), &[-2, 0, 0, -2, 0, 0]);
        let u = Matrix::<u8>::new(1, 1)?.filled(FillPattern::M1);
        assert_eq!(u.as_slice(), &[0]);
        Ok(())
    }

    #[test]
    fn test_fill_ones_and_zeros() -> Result<(), MatrixError> {
        let mut m = Matrix::<f32>::new(2, 1)?.filled(FillPattern::Ones);
        assert_eq!(m.as_slice(), &[1.0, 1.0]);
        m.fill(FillPattern::Zeros);
        assert_eq!(m.as_slice(), &[0.0, 0.0]);
        Ok(())
    }
}
