use num_traits::Float;

/// Absolute threshold below which a value counts as zero.
///
/// The threshold is not scaled by the magnitude of the matrix, so matrices with
/// very large or very small entries may need an explicit epsilon.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Returns true if `|value| <= epsilon`.
#[inline]
pub fn is_near_zero<T: Float>(value: T, epsilon: T) -> bool {
    value.abs() <= epsilon
}

/// [`DEFAULT_EPSILON`] in the element type.
#[inline]
pub fn default_epsilon<T: Float>() -> T {
    T::from(DEFAULT_EPSILON).unwrap_or_else(T::epsilon)
}
