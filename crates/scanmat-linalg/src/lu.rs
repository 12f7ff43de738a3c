//! LU decomposition with partial pivoting.
//!
//! For a square `A` the factorization produces a unit lower-triangular `L`, an
//! upper-triangular `U` and a row permutation such that `P * L * U = A`.

use scanmat_matrix::{Matrix, MatrixError};

use crate::{
    error::LinalgError,
    tolerance::{default_epsilon, is_near_zero},
    Real,
};

/// Row interchanges performed while pivoting.
///
/// `pivots()[k]` is the row that was swapped into position `k` at step `k`;
/// `pivots()[k] == k` means no swap happened at that step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationRecord {
    pivots: Vec<usize>,
}

impl PermutationRecord {
    /// The record of `n` steps without any interchange.
    pub fn identity(n: usize) -> Self {
        Self {
            pivots: (0..n).collect(),
        }
    }

    /// The pivot row chosen at every step.
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Number of elimination steps.
    pub fn len(&self) -> usize {
        self.pivots.len()
    }

    /// True for a record of zero steps.
    pub fn is_empty(&self) -> bool {
        self.pivots.is_empty()
    }

    /// Number of steps that actually swapped two rows.
    pub fn swap_count(&self) -> usize {
        self.pivots
            .iter()
            .enumerate()
            .filter(|(k, &p)| *k != p)
            .count()
    }

    /// `+1` for an even number of interchanges, `-1` for an odd one.
    pub fn signum<T: Real>(&self) -> T {
        if self.swap_count() % 2 == 0 {
            T::one()
        } else {
            -T::one()
        }
    }

    /// Applies the interchanges, in order, to the rows of `m`.
    ///
    /// This maps `A` to `L * U`, and a right-hand side `B` to the permuted system.
    pub fn permute_rows<T: Real>(&self, m: &mut Matrix<T>) -> Result<(), MatrixError> {
        for (k, &p) in self.pivots.iter().enumerate() {
            if k != p {
                m.swap_rows(k, p)?;
            }
        }
        Ok(())
    }

    /// The permutation matrix `P` with `P * L * U = A`.
    pub fn to_matrix<T: Real>(&self) -> Result<Matrix<T>, MatrixError> {
        let mut p = Matrix::identity(self.pivots.len())?;
        for (k, &pivot) in self.pivots.iter().enumerate() {
            if k != pivot {
                p.swap_cols(k, pivot)?;
            }
        }
        Ok(p)
    }
}

/// The factors of a pivoted LU decomposition.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: Real> {
    /// Unit lower-triangular factor.
    pub l: Matrix<T>,
    /// Upper-triangular factor.
    pub u: Matrix<T>,
    /// Row interchanges.
    pub p: PermutationRecord,
    /// Sign of the permutation (`+1` or `-1`).
    pub signum: T,
}

impl<T: Real> LuDecomposition<T> {
    /// The permutation as a matrix.
    pub fn permutation_matrix(&self) -> Result<Matrix<T>, MatrixError> {
        self.p.to_matrix()
    }

    /// `signum * product(diag(U))`.
    pub fn determinant(&self) -> T {
        let n = self.u.cols();
        let diag = self.u.as_slice();
        (0..n).fold(self.signum, |acc, i| acc * diag[i * n + i])
    }

    /// `P * L * U`, which reproduces the factorized matrix.
    pub fn reconstruct(&self) -> Result<Matrix<T>, MatrixError> {
        self.permutation_matrix()?.matmul(&self.l)?.matmul(&self.u)
    }

    /// Solves `A * X = B` for `X` with forward and back substitution.
    ///
    /// # Errors
    ///
    /// - [`LinalgError::DimensionMismatch`] if `B` does not have `n` rows.
    /// - [`LinalgError::SingularMatrix`] if `U` has a zero on its diagonal.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        let n = self.u.cols();
        if b.rows() != n {
            return Err(LinalgError::dimension_mismatch(
                "solve",
                self.u.shape().pair(),
                b.shape().pair(),
            ));
        }
        let u = self.u.as_slice();
        let l = self.l.as_slice();
        let epsilon = default_epsilon::<T>();
        for i in 0..n {
            let pivot = u[i * n + i];
            if pivot == T::zero() {
                return Err(LinalgError::SingularMatrix { pivot: i });
            }
            if is_near_zero(pivot, epsilon) {
                log::warn!("near-zero pivot {pivot} in column {i}, solution may be inaccurate");
            }
        }

        let mut x = b.clone();
        self.p.permute_rows(&mut x)?;
        let m = x.cols();
        let data = x.as_slice_mut();

        // L * Y = P⁻¹ * B, L has a unit diagonal
        for i in 0..n {
            for k in 0..i {
                let factor = l[i * n + k];
                if factor != T::zero() {
                    for j in 0..m {
                        data[i * m + j] = data[i * m + j] - factor * data[k * m + j];
                    }
                }
            }
        }

        // U * X = Y
        for i in (0..n).rev() {
            for k in (i + 1)..n {
                let factor = u[i * n + k];
                if factor != T::zero() {
                    for j in 0..m {
                        data[i * m + j] = data[i * m + j] - factor * data[k * m + j];
                    }
                }
            }
            let pivot = u[i * n + i];
            for j in 0..m {
                data[i * m + j] = data[i * m + j] / pivot;
            }
        }
        Ok(x)
    }
}

/// Factorizes a square matrix with partial pivoting.
///
/// At every step the row with the largest magnitude in the pivot column is swapped
/// into place. A pivot that is exactly zero where it has to be divided by fails the
/// factorization; a pivot that is merely tiny is used and logged.
///
/// # Errors
///
/// - [`LinalgError::NotSquare`] for rectangular input.
/// - [`LinalgError::EmptyMatrix`] for empty input.
/// - [`LinalgError::SingularMatrix`] for an exactly zero pivot.
///
/// # Example
///
/// ```
/// use scanmat_linalg::lu::lu;
/// use scanmat_matrix::Matrix;
///
/// let a = Matrix::<f64>::parse("0 1; 2 3").unwrap();
/// let f = lu(&a).unwrap();
/// assert_eq!(f.p.pivots(), &[1, 1]);
/// assert_eq!(f.signum, -1.0);
/// assert_eq!(f.reconstruct().unwrap(), a);
/// ```
pub fn lu<T: Real>(a: &Matrix<T>) -> Result<LuDecomposition<T>, LinalgError> {
    if !a.is_square() {
        return Err(LinalgError::not_square(a.shape().pair()));
    }
    if a.is_empty() {
        return Err(LinalgError::EmptyMatrix("lu"));
    }

    let n = a.cols();
    let mut u = a.clone();
    u.set_name("U");
    let mut l = Matrix::<T>::identity(n)?.with_name("L");
    let mut p = PermutationRecord::identity(n);
    let epsilon = default_epsilon::<T>();

    for k in 0..n {
        let best = {
            let data = u.as_slice();
            (k..n).fold(k, |best, r| {
                if data[r * n + k].abs() > data[best * n + k].abs() {
                    r
                } else {
                    best
                }
            })
        };
        if best != k {
            log::trace!("lu: swapping rows {k} and {best}");
            u.swap_rows(k, best)?;
            // carry the multipliers computed so far along with their rows
            let l_data = l.as_slice_mut();
            for j in 0..k {
                l_data.swap(k * n + j, best * n + j);
            }
        }
        p.pivots[k] = best;

        if k + 1 == n {
            break;
        }

        let u_data = u.as_slice_mut();
        let pivot = u_data[k * n + k];
        if pivot == T::zero() {
            return Err(LinalgError::SingularMatrix { pivot: k });
        }
        if is_near_zero(pivot, epsilon) {
            log::warn!("lu: near-zero pivot {pivot} in column {k}");
        }

        let l_data = l.as_slice_mut();
        for r in (k + 1)..n {
            let factor = u_data[r * n + k] / pivot;
            l_data[r * n + k] = factor;
            if factor == T::zero() {
                continue;
            }
            for c in (k + 1)..n {
                u_data[r * n + c] = u_data[r * n + c] - factor * u_data[k * n + c];
            }
            u_data[r * n + k] = T::zero();
        }
    }

    let signum = p.signum();
    Ok(LuDecomposition { l, u, p, signum })
}

/// Determinant via pivoted LU.
///
/// A matrix whose elimination meets an exactly zero pivot has determinant zero.
///
/// # Errors
///
/// - [`LinalgError::NotSquare`] for rectangular input.
/// - [`LinalgError::EmptyMatrix`] for empty input.
pub fn det<T: Real>(a: &Matrix<T>) -> Result<T, LinalgError> {
    match lu(a) {
        Ok(factors) => Ok(factors.determinant()),
        Err(LinalgError::SingularMatrix { pivot }) => {
            log::debug!("det: zero pivot in column {pivot}, determinant is zero");
            Ok(T::zero())
        }
        Err(e) => Err(e),
    }
}
