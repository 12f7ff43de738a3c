#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use scanmat_matrix as matrix;

#[doc(inline)]
pub use scanmat_linalg as linalg;
