//! QR decomposition by Householder reflections.

use scanmat_matrix::Matrix;

use crate::{error::LinalgError, Real};

/// Orthogonal-triangular factors with `Q * R = A`.
#[derive(Debug, Clone)]
pub struct QrDecomposition<T: Real> {
    /// Orthogonal factor, `rows x rows`.
    pub q: Matrix<T>,
    /// Upper-triangular factor with the extents of the input.
    pub r: Matrix<T>,
}

/// Factorizes an `m x n` matrix (`m` rows) into `Q * R`.
///
/// Each column below the diagonal is annihilated with a Householder reflection;
/// the reflections are accumulated into `Q`.
///
/// # Errors
///
/// - [`LinalgError::EmptyMatrix`] for empty input.
/// - [`LinalgError::DecompositionFailed`] carrying the row of the first NaN or
///   infinite element.
///
/// # Example
///
/// ```
/// use scanmat_linalg::qr::qr;
/// use scanmat_matrix::Matrix;
///
/// let a = Matrix::<f64>::parse("3 0; 4 5").unwrap();
/// let f = qr(&a).unwrap();
/// assert!((f.r.get(0, 0).unwrap().abs() - 5.0).abs() < 1e-12);
/// assert_eq!(f.r.get(0, 1), Ok(0.0));
/// ```
pub fn qr<T: Real>(a: &Matrix<T>) -> Result<QrDecomposition<T>, LinalgError> {
    if a.is_empty() {
        return Err(LinalgError::EmptyMatrix("qr"));
    }
    if let Some(i) = a.iter().position(|v| !v.is_finite()) {
        return Err(LinalgError::DecompositionFailed {
            index: i / a.cols(),
            reason: format!("non-finite element in column {}", i % a.cols()),
        });
    }

    let (n, m) = (a.cols(), a.rows());
    let mut r = a.clone();
    r.set_name("R");
    let mut q = Matrix::<T>::identity(m)?.with_name("Q");
    let two = T::one() + T::one();
    let mut v = vec![T::zero(); m];

    for k in 0..n.min(m.saturating_sub(1)) {
        let rd = r.as_slice_mut();

        let norm = (k..m).map(|i| rd[i * n + k].powi(2)).fold(T::zero(), |a, b| a + b).sqrt();
        if norm == T::zero() {
            continue;
        }
        // reflect onto -sign(x0) * |x| e0 to avoid cancellation
        let x0 = rd[k * n + k];
        let alpha = if x0 > T::zero() { -norm } else { norm };

        for i in k..m {
            v[i] = rd[i * n + k];
        }
        v[k] = v[k] - alpha;
        let v_norm2 = (k..m).map(|i| v[i] * v[i]).fold(T::zero(), |a, b| a + b);
        if v_norm2 == T::zero() {
            continue;
        }

        // R <- H R
        for j in k..n {
            let dot = (k..m).map(|i| v[i] * rd[i * n + j]).fold(T::zero(), |a, b| a + b);
            let s = two * dot / v_norm2;
            for i in k..m {
                rd[i * n + j] = rd[i * n + j] - s * v[i];
            }
        }
        rd[k * n + k] = alpha;
        for i in (k + 1)..m {
            rd[i * n + k] = T::zero();
        }

        // Q <- Q H
        let qd = q.as_slice_mut();
        for row in 0..m {
            let dot = (k..m).map(|i| qd[row * m + i] * v[i]).fold(T::zero(), |a, b| a + b);
            let s = two * dot / v_norm2;
            for i in k..m {
                qd[row * m + i] = qd[row * m + i] - s * v[i];
            }
        }
    }

    Ok(QrDecomposition { q, r })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_upper_triangular(r: &Matrix<f64>) -> Result<(), LinalgError> {
        for y in 0..r.rows() {
            for x in 0..y.min(r.cols()) {
                assert_eq!(r.get(x, y)?, 0.0);
            }
        }
        Ok(())
    }

    #[test]
    fn test_qr_square() -> Result<(), LinalgError> {
        let a = Matrix::<f64>::parse("12 -51 4; 6 167 -68; -4 24 -41")?;
        let f = qr(&a)?;
        assert_upper_triangular(&f.r)?;
        assert_relative_eq!(f.q.matmul(&f.r)?, a, epsilon = 1e-10);
        assert_relative_eq!(f.r.get(0, 0)?.abs(), 14.0, epsilon = 1e-12);

        let qtq = f.q.t()?.matmul(&f.q)?;
        assert_relative_eq!(qtq, Matrix::<f64>::identity(3)?, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_qr_tall_and_wide() -> Result<(), LinalgError> {
        // 2 columns x 4 rows
        let tall = Matrix::<f64>::parse("1 2; 3 4; 5 6; 7 8")?;
        let f = qr(&tall)?;
        assert_eq!((f.q.cols(), f.q.rows()), (4, 4));
        assert_eq!((f.r.cols(), f.r.rows()), (2, 4));
        assert_upper_triangular(&f.r)?;
        assert_relative_eq!(f.q.matmul(&f.r)?, tall, epsilon = 1e-10);

        let wide = tall.t()?;
        let g = qr(&wide)?;
        assert_upper_triangular(&g.r)?;
        assert_relative_eq!(g.q.matmul(&g.r)?, wide, epsilon = 1e-10);
        Ok(())
    }

    #[test]
    fn test_qr_zero_column() -> Result<(), LinalgError> {
        let a = Matrix::<f64>::parse("0 1; 0 2")?;
        let f = qr(&a)?;
        assert_relative_eq!(f.q.matmul(&f.r)?, a, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_qr_rejects_non_finite() -> Result<(), LinalgError> {
        let mut a = Matrix::<f64>::identity(3)?;
        a.set(2, 1, f64::NAN)?;
        assert_eq!(
            qr(&a).err(),
            Some(LinalgError::DecompositionFailed {
                index: 1,
                reason: "non-finite element in column 2".to_string(),
            })
        );
        assert!(matches!(
            qr(&Matrix::<f64>::empty()),
            Err(LinalgError::EmptyMatrix("qr"))
        ));
        Ok(())
    }
}
