//! Math utilities and types
//!
//! Homogeneous 4x4 transforms for the visualizer. Matrices follow the
//! column-vector convention of `nalgebra`: `a * b` applies `b` first.

pub use nalgebra::{Matrix4, Vector4};

/// 4D (homogeneous) vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Number of components in a homogeneous vector
pub const HOMOGENEOUS_COMPONENTS: usize = 4;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Wrap an angle into `[0, TAU)`
    pub fn wrap_angle(radians: f32) -> f32 {
        radians.rem_euclid(constants::TAU)
    }
}

/// Extension trait for Mat4 with the transforms the scene needs
pub trait Mat4Ext {
    /// Create a translation matrix from the xyz part of a homogeneous vector
    fn translation(v: &Vec4) -> Mat4;

    /// Create a rotation in the plane spanned by axes `a` and `b`
    ///
    /// Rotating in the `a`-`b` plane turns axis `a` towards axis `b`.
    /// Axes index the homogeneous components (0 = x, 1 = y, 2 = z).
    fn plane_rotation(a: usize, b: usize, radians: f32) -> Mat4;

    /// Extract the translation column as a homogeneous vector
    fn translation_part(&self) -> Vec4;
}

impl Mat4Ext for Mat4 {
    fn translation(v: &Vec4) -> Mat4 {
        Mat4::new_translation(&v.xyz())
    }

    fn plane_rotation(a: usize, b: usize, radians: f32) -> Mat4 {
        debug_assert!(a < 3 && b < 3 && a != b, "rotation plane must span two distinct spatial axes");
        let (sin, cos) = radians.sin_cos();
        let mut m = Mat4::identity();
        m[(a, a)] = cos;
        m[(b, a)] = sin;
        m[(a, b)] = -sin;
        m[(b, b)] = cos;
        m
    }

    fn translation_part(&self) -> Vec4 {
        self.column(3).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_translation_ignores_w() {
        let m = Mat4::translation(&Vec4::new(1.0, 2.0, 3.0, 1.0));
        let p = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(p, Vec4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn test_plane_rotation_turns_a_towards_b() {
        let m = Mat4::plane_rotation(2, 0, constants::PI / 2.0);
        let rotated = m * Vec4::new(0.0, 0.0, 1.0, 0.0);
        assert_relative_eq!(rotated, Vec4::new(1.0, 0.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_wrap_angle() {
        assert_relative_eq!(utils::wrap_angle(constants::TAU + 1.0), 1.0, epsilon = 1e-5);
        assert_relative_eq!(utils::wrap_angle(-1.0), constants::TAU - 1.0, epsilon = 1e-5);
    }
}
