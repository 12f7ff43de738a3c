#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! Factorizations and derived operations for
//! [`scanmat_matrix::Matrix`] over floating element types:
//!
//! - LU decomposition with partial pivoting, determinant, inverse, linear solve
//! - QR decomposition by Householder reflections
//! - Pseudo-inverse through the normal equations
//! - Adjugate and the infinity, one, two and Frobenius norms
//! - 4x4 homogeneous rotation, translation and scale matrices
//!
//! Each operation is a free function in its module and, through [`LinalgExt`],
//! a method on the matrix.
//!
//! # Example
//!
//! ```rust
//! use scanmat_linalg::LinalgExt;
//! use scanmat_matrix::Matrix;
//!
//! let a = Matrix::<f64>::parse("4 3; 8 2").unwrap();
//! let f = a.lu().unwrap();
//! let back = f.reconstruct().unwrap();
//! assert_eq!(back, a);
//!
//! let x = a.solve(&Matrix::parse("10; 12").unwrap()).unwrap();
//! assert!((x.get(0, 0).unwrap() - 1.0).abs() < 1e-12);
//! assert!((x.get(0, 1).unwrap() - 2.0).abs() < 1e-12);
//! ```

use num_traits::Float;
use scanmat_matrix::Element;

/// Error type for factorizations.
pub mod error;

/// Method-style access to the factorizations.
pub mod ext;

/// 4x4 homogeneous transforms.
pub mod homogeneous;

/// Inverse, linear solve and adjugate.
pub mod inverse;

/// LU decomposition and determinant.
pub mod lu;

/// Matrix norms.
pub mod norm;

/// Pseudo-inverse.
pub mod pinv;

/// QR decomposition.
pub mod qr;

/// Near-zero tests.
pub mod tolerance;

pub use crate::error::LinalgError;
pub use crate::ext::LinalgExt;
pub use crate::lu::{LuDecomposition, PermutationRecord};
pub use crate::norm::NormKind;
pub use crate::qr::QrDecomposition;
pub use crate::tolerance::{is_near_zero, DEFAULT_EPSILON};

/// Element types the factorizations accept (`f32` and `f64`).
pub trait Real: Element + Float {}

impl<T: Element + Float> Real for T {}
