use scanmat_matrix::Matrix;

use crate::{error::LinalgError, inverse::inv, Real};

/// Moore-Penrose pseudo-inverse through the normal equations, `(Aᵀ A)⁻¹ Aᵀ`.
///
/// Requires `A` to have full column rank. The normal equations square the
/// condition number, so ill-conditioned input loses precision quickly.
///
/// # Errors
///
/// - [`LinalgError::EmptyMatrix`] for empty input.
/// - [`LinalgError::SingularMatrix`] if `Aᵀ A` is singular (rank-deficient `A`).
pub fn pinv<T: Real>(a: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    if a.is_empty() {
        return Err(LinalgError::EmptyMatrix("pinv"));
    }
    let at = a.t()?;
    let normal = at.matmul(a)?;
    Ok(inv(&normal)?.matmul(&at)?)
}
