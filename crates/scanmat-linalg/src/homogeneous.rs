//! 4x4 transforms for homogeneous 3D coordinates.
//!
//! All matrices act on column vectors `(x, y, z, 1)ᵀ` from the left; angles are in
//! radians and rotations are counter-clockwise about the positive axis.

use num_traits::NumCast;
use scanmat_matrix::Matrix;

use crate::{error::LinalgError, Real};

fn from_rows<T: Real>(rows: [[f64; 4]; 4]) -> Result<Matrix<T>, LinalgError> {
    Ok(Matrix::from_fn(4, 4, |x, y| {
        <T as NumCast>::from(rows[y][x]).unwrap_or_else(T::nan)
    })?)
}

/// The 4x4 identity transform.
pub fn transform_identity<T: Real>() -> Result<Matrix<T>, LinalgError> {
    Ok(Matrix::identity(4)?)
}

/// Rotation about the x axis.
pub fn rot_x<T: Real>(angle: f64) -> Result<Matrix<T>, LinalgError> {
    let (s, c) = angle.sin_cos();
    from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the y axis.
pub fn rot_y<T: Real>(angle: f64) -> Result<Matrix<T>, LinalgError> {
    let (s, c) = angle.sin_cos();
    from_rows([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the z axis.
pub fn rot_z<T: Real>(angle: f64) -> Result<Matrix<T>, LinalgError> {
    let (s, c) = angle.sin_cos();
    from_rows([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Combined rotation `rot_z(roll) * rot_y(pitch) * rot_x(yaw)`.
///
/// `yaw` turns about x, `pitch` about y and `roll` about z; the x rotation is
/// applied first.
pub fn rotation<T: Real>(yaw: f64, pitch: f64, roll: f64) -> Result<Matrix<T>, LinalgError> {
    let (sx, cx) = yaw.sin_cos();
    let (sy, cy) = pitch.sin_cos();
    let (sz, cz) = roll.sin_cos();
    from_rows([
        [cy * cz, -cx * sz + sx * sy * cz, sx * sz + cx * sy * cz, 0.0],
        [cy * sz, cx * cz + sx * sy * sz, -sx * cz + cx * sy * sz, 0.0],
        [-sy, sx * cy, cx * cy, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Translation by `(x, y, z)`.
pub fn translation<T: Real>(x: f64, y: f64, z: f64) -> Result<Matrix<T>, LinalgError> {
    from_rows([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Axis-aligned scaling.
pub fn scale<T: Real>(sx: f64, sy: f64, sz: f64) -> Result<Matrix<T>, LinalgError> {
    from_rows([
        [sx, 0.0, 0.0, 0.0],
        [0.0, sy, 0.0, 0.0],
        [0.0, 0.0, sz, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::lu::det;
    use approx::assert_relative_eq;

    fn point(x: f64, y: f64, z: f64) -> Result<Matrix<f64>, LinalgError> {
        Ok(Matrix::from_vec(1, 4, vec![x, y, z, 1.0])?)
    }

    #[test]
    fn test_quarter_turns() -> Result<(), LinalgError> {
        let p = point(1.0, 0.0, 0.0)?;
        assert_relative_eq!(rot_z::<f64>(FRAC_PI_2)?.matmul(&p)?, point(0.0, 1.0, 0.0)?, epsilon = 1e-12);

        let q = point(0.0, 0.0, 1.0)?;
        assert_relative_eq!(rot_y::<f64>(FRAC_PI_2)?.matmul(&q)?, point(1.0, 0.0, 0.0)?, epsilon = 1e-12);

        let r = point(0.0, 1.0, 0.0)?;
        assert_relative_eq!(rot_x::<f64>(FRAC_PI_2)?.matmul(&r)?, point(0.0, 0.0, 1.0)?, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_rotation_composes_axes() -> Result<(), LinalgError> {
        let (yaw, pitch, roll) = (0.3, -1.1, 2.4);
        let composed = rot_z::<f64>(roll)?
            .matmul(&rot_y(pitch)?)?
            .matmul(&rot_x(yaw)?)?;
        let r = rotation::<f64>(yaw, pitch, roll)?;
        assert_relative_eq!(r, composed, epsilon = 1e-12);
        assert_relative_eq!(det(&r)?, 1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_translation_and_scale() -> Result<(), LinalgError> {
        let t = translation::<f64>(1.0, -2.0, 3.0)?;
        assert_eq!(t.matmul(&point(1.0, 1.0, 1.0)?)?, point(2.0, -1.0, 4.0)?);

        let s = scale::<f32>(2.0, 3.0, 4.0)?;
        assert_eq!(s.diag()?.as_slice(), &[2.0, 3.0, 4.0, 1.0]);
        assert_eq!(transform_identity::<f32>()?, Matrix::<f32>::identity(4)?);
        Ok(())
    }
}
