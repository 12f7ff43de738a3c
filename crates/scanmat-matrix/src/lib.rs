#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `scanmat-matrix` provides [`Matrix`], a dense, row-major two-dimensional array
//! generic over one numeric [`Element`] type, together with the structural,
//! arithmetic and reduction operations a triangulation pipeline needs. The
//! factorizations live in `scanmat-linalg`.
//!
//! Coordinates are `(x, y)` = `(column, row)` throughout, and constructors take
//! `(cols, rows)`.
//!
//! # Quick Start
//!
//! ```rust
//! use scanmat_matrix::{FillPattern, Matrix};
//!
//! // 2 columns x 3 rows
//! let a = Matrix::<f64>::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//! let b = Matrix::<f64>::new(3, 2).unwrap().filled(FillPattern::Ones);
//!
//! let c = a.matmul(&b).unwrap();
//! assert_eq!((c.cols(), c.rows()), (3, 3));
//! assert_eq!(c.get(0, 2), Ok(11.0));
//!
//! let t = a.t().unwrap();
//! assert_eq!(t.to_text("; "), "1 3 5; 2 4 6");
//! ```
//!
//! Parsing a literal and borrowing a shallow copy:
//!
//! ```rust
//! use scanmat_matrix::Matrix;
//!
//! let m: Matrix<i32> = "1 2 3\n4 5 6".parse().unwrap();
//! let view = m.shallow_copy();
//! assert_eq!(view.row(1).unwrap(), &[4, 5, 6]);
//! ```
//!
//! # Clipping
//!
//! Most operations fail fast with a [`MatrixError`]. Two are permissive by
//! contract: [`Matrix::set_sub_matrix`] clips the pasted region and
//! [`Matrix::remove_rows`] / [`Matrix::remove_cols`] clamp their range.

/// Tolerance comparisons through the `approx` traits.
mod approx_eq;

/// Bincode module for binary serialization and deserialization.
#[cfg(feature = "bincode")]
pub mod bincode;

/// Numeric element types a matrix can hold.
pub mod element;

/// Error type shared by all matrix operations.
pub mod error;

/// Fill patterns for initialising matrices.
pub mod fill;

/// The owned matrix type, constructors and element access.
pub mod matrix;

/// Elementwise and matrix-matrix arithmetic.
pub mod ops;

/// Extrema and sums over the whole matrix, rows and columns.
pub mod reduce;

/// Serde module for JSON/other format serialization and deserialization.
#[cfg(feature = "serde")]
pub mod serde;

/// Element buffer allocation and shape bookkeeping.
pub mod storage;

/// Parsing and rendering of textual matrix literals.
pub mod text;

/// Sub-matrices, elimination, transposition, mirroring and rotation.
pub mod transform;

/// Non-owning views (shallow copies) of a matrix buffer.
pub mod view;

pub use crate::element::Element;
pub use crate::error::MatrixError;
pub use crate::fill::FillPattern;
pub use crate::matrix::Matrix;
pub use crate::storage::{Shape, MAX_ELEMENTS};
pub use crate::view::{MatrixView, MatrixViewMut};
