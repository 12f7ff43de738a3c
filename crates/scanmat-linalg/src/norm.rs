use std::str::FromStr;

use num_traits::Float;
use scanmat_matrix::Matrix;

use crate::{error::LinalgError, Real};

/// Iteration cap of the power iteration behind [`NormKind::Two`].
pub const POWER_ITERATION_MAX_STEPS: usize = 500;

/// Relative change of the eigenvalue estimate at which the power iteration stops.
pub const POWER_ITERATION_TOLERANCE: f64 = 1e-12;

/// Matrix norms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormKind {
    /// Largest absolute row sum.
    Infinity,
    /// Largest absolute column sum.
    One,
    /// Spectral norm, the largest singular value.
    Two,
    /// Square root of the sum of squared elements.
    Frobenius,
}

impl FromStr for NormKind {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inf" | "infinity" => Ok(Self::Infinity),
            "1" | "one" => Ok(Self::One),
            "2" | "two" => Ok(Self::Two),
            "fro" | "frobenius" => Ok(Self::Frobenius),
            _ => Err(LinalgError::InvalidNorm(s.to_string())),
        }
    }
}

/// Computes the requested norm of `a`.
///
/// # Errors
///
/// Fails with [`LinalgError::EmptyMatrix`] on an empty matrix.
///
/// # Example
///
/// ```
/// use scanmat_linalg::norm::{norm, NormKind};
/// use scanmat_matrix::Matrix;
///
/// let a = Matrix::<f64>::parse("1 -2; -3 4").unwrap();
/// assert_eq!(norm(&a, NormKind::Infinity).unwrap(), 7.0);
/// assert_eq!(norm(&a, NormKind::One).unwrap(), 6.0);
/// ```
pub fn norm<T: Real>(a: &Matrix<T>, kind: NormKind) -> Result<T, LinalgError> {
    if a.is_empty() {
        return Err(LinalgError::EmptyMatrix("norm"));
    }
    match kind {
        NormKind::Infinity => max_of((0..a.rows()).map(|y| a.row_sum_abs(y))),
        NormKind::One => max_of((0..a.cols()).map(|x| a.col_sum_abs(x))),
        NormKind::Frobenius => Ok(a
            .iter()
            .fold(T::zero(), |acc, &v| acc + v * v)
            .sqrt()),
        NormKind::Two => spectral_norm(a),
    }
}

fn max_of<T: Real>(
    values: impl Iterator<Item = Result<T, scanmat_matrix::MatrixError>>,
) -> Result<T, LinalgError> {
    let mut best = T::zero();
    for v in values {
        best = Float::max(best, v?);
    }
    Ok(best)
}

// Power iteration on AᵀA. The start vector is the column of AᵀA with the largest
// norm, which is non-zero for any non-zero A.
fn spectral_norm<T: Real>(a: &Matrix<T>) -> Result<T, LinalgError> {
    let ata = a.t()?.matmul(a)?;
    let n = ata.cols();
    let tolerance = <T as num_traits::NumCast>::from(POWER_ITERATION_TOLERANCE).unwrap_or_else(T::epsilon);

    let mut start = 0;
    let mut start_norm = T::zero();
    for x in 0..n {
        let col = ata.col(x)?;
        let norm = col.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt();
        if norm > start_norm {
            start = x;
            start_norm = norm;
        }
    }
    if start_norm == T::zero() {
        return Ok(T::zero());
    }

    let mut v = ata.col(start)?;
    v.div_scalar(start_norm);
    let mut lambda = T::zero();
    for step in 0..POWER_ITERATION_MAX_STEPS {
        let mut w = ata.matmul(&v)?;
        let next = w.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt();
        if next == T::zero() {
            return Ok(T::zero());
        }
        w.div_scalar(next);
        v = w;
        let converged = (next - lambda).abs() <= tolerance * next;
        lambda = next;
        if converged {
            log::trace!("spectral norm converged after {step} steps");
            break;
        }
    }
    Ok(lambda.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_kinds() -> Result<(), LinalgError> {
        let a = Matrix::<f64>::parse("1 -2; -3 4")?;
        assert_eq!(norm(&a, NormKind::Infinity)?, 7.0);
        assert_eq!(norm(&a, NormKind::One)?, 6.0);
        assert_relative_eq!(norm(&a, NormKind::Frobenius)?, 30f64.sqrt());
        // largest singular value of [[1, -2], [-3, 4]]
        assert_relative_eq!(
            norm(&a, NormKind::Two)?,
            (15.0 + 221f64.sqrt()).sqrt(),
            epsilon = 1e-9
        );
        Ok(())
    }

    #[test]
    fn test_two_norm_of_diagonal_and_rank_one() -> Result<(), LinalgError> {
        let d = Matrix::<f64>::parse("-5 0 0; 0 3 0; 0 0 1")?;
        assert_relative_eq!(norm(&d, NormKind::Two)?, 5.0, epsilon = 1e-9);

        // ones would be a null vector of AᵀA here
        let r = Matrix::<f64>::parse("1 -1; 1 -1")?;
        assert_relative_eq!(norm(&r, NormKind::Two)?, 2.0, epsilon = 1e-9);

        assert_eq!(norm(&Matrix::<f64>::new(2, 2)?, NormKind::Two)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_norm_errors() {
        assert_eq!(
            norm(&Matrix::<f32>::empty(), NormKind::One),
            Err(LinalgError::EmptyMatrix("norm"))
        );
        assert_eq!("fro".parse::<NormKind>(), Ok(NormKind::Frobenius));
        assert_eq!(
            "max".parse::<NormKind>(),
            Err(LinalgError::InvalidNorm("max".to_string()))
        );
    }
}
