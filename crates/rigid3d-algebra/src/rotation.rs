//! Rotation builders.
//!
//! Angles are in radians and rotations are right-handed. Euler angles follow
//! the z-y'-x'' (yaw, pitch, roll) convention: `R = Rz(psi) * Ry(theta) * Rx(phi)`.

use crate::{Mat3, MathBackend, Quat, Vec3};

impl Mat3 {
    /// Rotation of `angle` around the x axis.
    ///
    /// ```text
    /// | 1  0    0   |
    /// | 0  cos -sin |
    /// | 0  sin  cos |
    /// ```
    pub fn from_rotation_x<M: MathBackend>(angle: f32, math: &M) -> Self {
        let (sin, cos) = (math.sin(angle), math.cos(angle));
        Self::from_cols(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, cos, sin),
            Vec3::new(0.0, -sin, cos),
        )
    }

    /// Rotation of `angle` around the y axis.
    ///
    /// ```text
    /// |  cos  0  sin |
    /// |  0    1  0   |
    /// | -sin  0  cos |
    /// ```
    pub fn from_rotation_y<M: MathBackend>(angle: f32, math: &M) -> Self {
        let (sin, cos) = (math.sin(angle), math.cos(angle));
        Self::from_cols(
            Vec3::new(cos, 0.0, -sin),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(sin, 0.0, cos),
        )
    }

    /// Rotation of `angle` around the z axis.
    ///
    /// ```text
    /// | cos -sin  0 |
    /// | sin  cos  0 |
    /// | 0    0    1 |
    /// ```
    pub fn from_rotation_z<M: MathBackend>(angle: f32, math: &M) -> Self {
        let (sin, cos) = (math.sin(angle), math.cos(angle));
        Self::from_cols(
            Vec3::new(cos, sin, 0.0),
            Vec3::new(-sin, cos, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    /// Rotation from Euler angles, `Rz(psi) * Ry(theta) * Rx(phi)`.
    pub fn from_euler<M: MathBackend>(phi: f32, theta: f32, psi: f32, math: &M) -> Self {
        Self::from_rotation_z(psi, math)
            .mul_mat3(&Self::from_rotation_y(theta, math))
            .mul_mat3(&Self::from_rotation_x(phi, math))
    }

    /// Rotation of `angle` around `axis` (Rodrigues' formula).
    ///
    /// PRECONDITION: `axis` is a unit vector.
    pub fn from_axis_angle<M: MathBackend>(axis: Vec3, angle: f32, math: &M) -> Self {
        let Vec3 { x, y, z } = axis;
        let c = math.cos(angle);
        let s = math.sin(angle);
        let t = 1.0 - c;

        let xy = x * y * t;
        let xz = x * z * t;
        let yz = y * z * t;

        Self::from_cols(
            Vec3::new(c + x * x * t, xy + z * s, xz - y * s),
            Vec3::new(xy - z * s, c + y * y * t, yz + x * s),
            Vec3::new(xz + y * s, yz - x * s, c + z * z * t),
        )
    }
}

impl Quat {
    /// Unit quaternion of the same rotation as [`Mat3::from_euler`].
    pub fn from_euler<M: MathBackend>(phi: f32, theta: f32, psi: f32, math: &M) -> Self {
        let (a, b, c) = (phi / 2.0, theta / 2.0, psi / 2.0);
        let (sin_a, cos_a) = (math.sin(a), math.cos(a));
        let (sin_b, cos_b) = (math.sin(b), math.cos(b));
        let (sin_c, cos_c) = (math.sin(c), math.cos(c));

        Self::from_wxyz(
            (cos_a * cos_b * cos_c) + (sin_a * sin_b * sin_c),
            (sin_a * cos_b * cos_c) - (cos_a * sin_b * sin_c),
            (cos_a * sin_b * cos_c) + (sin_a * cos_b * sin_c),
            (cos_a * cos_b * sin_c) - (sin_a * sin_b * cos_c),
        )
    }

    /// Unit quaternion of a rotation of `angle` around `axis`.
    ///
    /// PRECONDITION: `axis` is a unit vector.
    pub fn from_axis_angle<M: MathBackend>(axis: Vec3, angle: f32, math: &M) -> Self {
        let half = angle / 2.0;
        let s = math.sin(half);
        Self::from_wxyz(math.cos(half), axis.x * s, axis.y * s, axis.z * s)
    }
}
