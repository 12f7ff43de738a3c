use scanmat_matrix::Matrix;

use crate::{
    error::LinalgError,
    lu::{det, lu},
    Real,
};

/// Inverse of a square matrix via LU and substitution against the identity.
///
/// # Errors
///
/// - [`LinalgError::NotSquare`] / [`LinalgError::EmptyMatrix`] for unsuitable input.
/// - [`LinalgError::SingularMatrix`] if any pivot is exactly zero.
///
/// # Example
///
/// ```
/// use scanmat_linalg::inverse::inv;
/// use scanmat_matrix::Matrix;
///
/// let a = Matrix::<f64>::parse("1 2; 3 4").unwrap();
/// let a_inv = inv(&a).unwrap();
/// assert!((a_inv.get(0, 1).unwrap() - 1.5).abs() < 1e-12);
/// ```
pub fn inv<T: Real>(a: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    let factors = lu(a)?;
    let identity = Matrix::identity(a.cols())?;
    let mut out = factors.solve(&identity)?;
    if let Some(name) = a.name() {
        out.set_name(format!("{name}^-1"));
    }
    Ok(out)
}

/// Solves `A * X = B` for `X`.
///
/// `B` may hold several right-hand sides as columns.
pub fn solve<T: Real>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    if a.is_square() && b.rows() != a.rows() {
        return Err(LinalgError::dimension_mismatch(
            "solve",
            a.shape().pair(),
            b.shape().pair(),
        ));
    }
    lu(a)?.solve(b)
}

/// The adjugate (transposed cofactor matrix).
///
/// For an invertible `A`, `adj(A) = det(A) * inv(A)`; unlike the inverse it also
/// exists for singular matrices. The adjugate of a `1 x 1` matrix is `[1]`.
pub fn adjugate<T: Real>(a: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    if !a.is_square() {
        return Err(LinalgError::not_square(a.shape().pair()));
    }
    if a.is_empty() {
        return Err(LinalgError::EmptyMatrix("adjugate"));
    }
    let n = a.cols();
    if n == 1 {
        return Ok(Matrix::ones(1, 1)?);
    }
    let mut adj = Matrix::new(n, n)?;
    for y in 0..n {
        for x in 0..n {
            let cofactor = det(&a.minor(y, x)?)?;
            let value = if (x + y) % 2 == 0 { cofactor } else { -cofactor };
            adj.set(x, y, value)?;
        }
    }
    Ok(adj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inv_2x2() -> Result<(), LinalgError> {
        let a = Matrix::<f64>::parse("1 2; 3 4")?;
        let expected = Matrix::<f64>::parse("-2 1; 1.5 -0.5")?;
        assert_relative_eq!(inv(&a)?, expected, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_inv_times_a_is_identity() -> Result<(), LinalgError> {
        let a = Matrix::<f64>::parse("4 -2 1; 3 6 -4; 2 1 8")?.with_name("A");
        let a_inv = inv(&a)?;
        assert_eq!(a_inv.name(), Some("A^-1"));
        assert_relative_eq!(a.matmul(&a_inv)?, Matrix::<f64>::identity(3)?, epsilon = 1e-12);
        assert_relative_eq!(a_inv.matmul(&a)?, Matrix::<f64>::identity(3)?, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_inv_singular() -> Result<(), LinalgError> {
        let a = Matrix::<f64>::parse("1 2; 2 4")?;
        assert_eq!(inv(&a).err(), Some(LinalgError::SingularMatrix { pivot: 1 }));
        let z = Matrix::<f64>::new(3, 3)?;
        assert_eq!(inv(&z).err(), Some(LinalgError::SingularMatrix { pivot: 0 }));
        Ok(())
    }

    #[test]
    fn test_solve_multiple_rhs() -> Result<(), LinalgError> {
        let a = Matrix::<f64>::parse("2 0; 0 4")?;
        let b = Matrix::<f64>::parse("2 4 6; 4 8 12")?;
        let x = solve(&a, &b)?;
        assert_relative_eq!(x, Matrix::<f64>::parse("1 2 3; 1 2 3")?);
        assert!(matches!(
            solve(&a, &Matrix::<f64>::new(1, 3)?),
            Err(LinalgError::DimensionMismatch { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_adjugate() -> Result<(), LinalgError> {
        let a = Matrix::<f64>::parse("1 2; 3 4")?;
        assert_relative_eq!(adjugate(&a)?, Matrix::<f64>::parse("4 -2; -3 1")?);

        let b = Matrix::<f64>::parse("4 -2 1; 3 6 -4; 2 1 8")?;
        let scaled = inv(&b)? * det(&b)?;
        assert_relative_eq!(adjugate(&b)?, scaled, epsilon = 1e-9);

        assert_eq!(adjugate(&Matrix::<f64>::parse("5")?)?.as_slice(), &[1.0]);
        assert!(adjugate(&Matrix::<f64>::new(2, 1)?).is_err());
        Ok(())
    }
}
