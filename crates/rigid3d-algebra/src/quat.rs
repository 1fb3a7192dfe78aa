//! Quaternion (single precision).

use crate::{Mat3, MathBackend, Vec3};

/// Quaternion `w + xi + yj + zk` (single precision).
///
/// Only unit quaternions represent rotations. `q` and `-q` describe the same
/// rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    /// Scalar part.
    pub w: f32,
    /// First imaginary component.
    pub x: f32,
    /// Second imaginary component.
    pub y: f32,
    /// Third imaginary component.
    pub z: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// Identity rotation.
    pub const IDENTITY: Self = Self::from_wxyz(1.0, 0.0, 0.0, 0.0);

    /// Create a quaternion from w, x, y, z components.
    #[inline]
    pub const fn from_wxyz(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Components as `[w, x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// The imaginary part.
    #[inline]
    pub fn vector(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Dot product of the four components.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        (self.w * rhs.w) + (self.x * rhs.x) + (self.y * rhs.y) + (self.z * rhs.z)
    }

    /// Norm of the quaternion.
    #[inline]
    pub fn length_with<M: MathBackend>(self, math: &M) -> f32 {
        math.sqrt(self.dot(self))
    }

    /// Scale to unit length.
    ///
    /// PRECONDITION: the quaternion is not zero.
    pub fn normalize_with<M: MathBackend>(self, math: &M) -> Self {
        let n = self.length_with(math);
        Self::from_wxyz(self.w / n, self.x / n, self.y / n, self.z / n)
    }

    /// Conjugate, the inverse rotation for a unit quaternion.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::from_wxyz(self.w, -self.x, -self.y, -self.z)
    }

    /// Rotation matrix of a unit quaternion.
    ///
    /// ```text
    ///     | ww + xx - yy - zz   2(xy - wz)          2(wy + xz)        |
    /// R = | 2(xy + wz)          ww - xx + yy - zz   2(yz - wx)        |
    ///     | 2(xz - wy)          2(wx + yz)          ww - xx - yy + zz |
    /// ```
    pub fn to_mat3(self) -> Mat3 {
        let Self { w, x, y, z } = self;
        let ww = w * w;
        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let wz = w * z;
        let wy = w * y;
        let xz = x * z;
        let wx = w * x;
        let yz = y * z;

        Mat3::from_cols(
            Vec3::new(ww + xx - yy - zz, 2.0 * (xy + wz), 2.0 * (xz - wy)),
            Vec3::new(2.0 * (xy - wz), ww - xx + yy - zz, 2.0 * (wx + yz)),
            Vec3::new(2.0 * (wy + xz), 2.0 * (yz - wx), ww - xx - yy + zz),
        )
    }
}

impl From<Quat> for Mat3 {
    #[inline]
    fn from(q: Quat) -> Self {
        q.to_mat3()
    }
}

impl From<glam::Quat> for Quat {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_wxyz(q.w, q.x, q.y, q.z)
    }
}

impl From<Quat> for glam::Quat {
    #[inline]
    fn from(q: Quat) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}
