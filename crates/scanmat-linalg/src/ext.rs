use scanmat_matrix::Matrix;

use crate::{
    error::LinalgError,
    inverse, lu,
    norm::{self, NormKind},
    pinv, qr, Real,
};

/// Factorizations as methods on [`Matrix`].
///
/// Every method forwards to the free function of the same name.
///
/// # Example
///
/// ```
/// use scanmat_linalg::LinalgExt;
/// use scanmat_matrix::Matrix;
///
/// let a = Matrix::<f64>::parse("1 2; 3 4").unwrap();
/// assert!((a.det().unwrap() + 2.0).abs() < 1e-12);
/// ```
pub trait LinalgExt<T: Real> {
    /// See [`lu::lu`].
    fn lu(&self) -> Result<lu::LuDecomposition<T>, LinalgError>;
    /// See [`lu::det`].
    fn det(&self) -> Result<T, LinalgError>;
    /// See [`inverse::inv`].
    fn inv(&self) -> Result<Matrix<T>, LinalgError>;
    /// See [`inverse::solve`].
    fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>, LinalgError>;
    /// See [`inverse::adjugate`].
    fn adjugate(&self) -> Result<Matrix<T>, LinalgError>;
    /// See [`qr::qr`].
    fn qr(&self) -> Result<qr::QrDecomposition<T>, LinalgError>;
    /// See [`pinv::pinv`].
    fn pinv(&self) -> Result<Matrix<T>, LinalgError>;
    /// See [`norm::norm`].
    fn norm(&self, kind: NormKind) -> Result<T, LinalgError>;
}

impl<T: Real> LinalgExt<T> for Matrix<T> {
    fn lu(&self) -> Result<lu::LuDecomposition<T>, LinalgError> {
        lu::lu(self)
    }

    fn det(&self) -> Result<T, LinalgError> {
        lu::det(self)
    }

    fn inv(&self) -> Result<Matrix<T>, LinalgError> {
        inverse::inv(self)
    }

    fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        inverse::solve(self, b)
    }

    fn adjugate(&self) -> Result<Matrix<T>, LinalgError> {
        inverse::adjugate(self)
    }

    fn qr(&self) -> Result<qr::QrDecomposition<T>, LinalgError> {
        qr::qr(self)
    }

    fn pinv(&self) -> Result<Matrix<T>, LinalgError> {
        pinv::pinv(self)
    }

    fn norm(&self, kind: NormKind) -> Result<T, LinalgError> {
        norm::norm(self, kind)
    }
}
