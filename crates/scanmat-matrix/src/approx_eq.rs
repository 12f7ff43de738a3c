use approx::{AbsDiffEq, RelativeEq};

use crate::{Element, Matrix};

/// Elementwise tolerance comparison; matrices of different extents are never equal.
impl<T> AbsDiffEq for Matrix<T>
where
    T: Element + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T> RelativeEq for Matrix<T>
where
    T: Element + RelativeEq,
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}
