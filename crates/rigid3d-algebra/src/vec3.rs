//! 3D vector (single precision).

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::{AlgebraError, MathBackend, StdMath};

/// 3D vector (single precision).
///
/// A plain value: every operation returns a new vector. Arithmetic is written
/// out component by component so results do not depend on the target's SIMD
/// support.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    /// x component
    pub x: f32,
    /// y component
    pub y: f32,
    /// z component
    pub z: f32,
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector along the x axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector along the y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector along the z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a vector from an array.
    #[inline]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert the vector to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise sum.
    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }

    /// Component-wise difference.
    #[inline]
    pub fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }

    /// The vector pointing the other way.
    #[inline]
    pub fn opposite(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Multiply every component by `m`.
    #[inline]
    pub fn scale(self, m: f32) -> Self {
        Self::new(m * self.x, m * self.y, m * self.z)
    }

    /// Divide every component by `m`.
    #[inline]
    pub fn divide(self, m: f32) -> Self {
        Self::new(self.x / m, self.y / m, self.z / m)
    }

    /// Dot product, accumulated in x, y, z order.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        (self.x * rhs.x) + (self.y * rhs.y) + (self.z * rhs.z)
    }

    /// Cross product `self × rhs`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            (self.y * rhs.z) - (self.z * rhs.y),
            (self.z * rhs.x) - (self.x * rhs.z),
            (self.x * rhs.y) - (self.y * rhs.x),
        )
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn square_length(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length using [`StdMath`].
    #[inline]
    pub fn length(self) -> f32 {
        self.length_with(&StdMath)
    }

    /// Euclidean length using the given backend.
    #[inline]
    pub fn length_with<M: MathBackend>(self, math: &M) -> f32 {
        math.sqrt(self.square_length())
    }

    /// Unit vector with the same direction, using [`StdMath`].
    ///
    /// PRECONDITION: the vector is not zero. A zero vector yields NaN
    /// components; use [`Vec3::try_normalize`] to get an error instead.
    #[inline]
    pub fn normalize(self) -> Self {
        self.normalize_with(&StdMath)
    }

    /// Unit vector with the same direction, using the given backend.
    ///
    /// PRECONDITION: the vector is not zero.
    #[inline]
    pub fn normalize_with<M: MathBackend>(self, math: &M) -> Self {
        self.divide(self.length_with(math))
    }

    /// Unit vector with the same direction.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ZeroLength`] for the zero vector and
    /// [`AlgebraError::NonFinite`] if the length is NaN or infinite.
    pub fn try_normalize<M: MathBackend>(self, math: &M) -> Result<Self, AlgebraError> {
        let length = self.length_with(math);
        if !length.is_finite() {
            return Err(AlgebraError::NonFinite);
        }
        if length == 0.0 {
            return Err(AlgebraError::ZeroLength);
        }
        Ok(self.divide(length))
    }

    /// Linear interpolation `self * (1 - t) + rhs * t`.
    ///
    /// Returns `self` exactly at `t = 0` and `rhs` exactly at `t = 1`.
    #[inline]
    pub fn lerp(self, rhs: Self, t: f32) -> Self {
        let u = 1.0 - t;
        self.scale(u) + rhs.scale(t)
    }

    /// Negate the x component.
    #[inline]
    pub fn inverse_x(self) -> Self {
        Self::new(-self.x, self.y, self.z)
    }

    /// Negate the y component.
    #[inline]
    pub fn inverse_y(self) -> Self {
        Self::new(self.x, -self.y, self.z)
    }

    /// Negate the z component.
    #[inline]
    pub fn inverse_z(self) -> Self {
        Self::new(self.x, self.y, -self.z)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    #[inline]
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for (f32, f32, f32) {
    #[inline]
    fn from(v: Vec3) -> Self {
        (v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(self, rhs)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(self, rhs)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs.scale(self)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self.divide(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WideMath;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec3_basic() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(Vec3::from_array([1.0, 2.0, 3.0]), v);
        assert_eq!(Vec3::from((1.0, 2.0, 3.0)), v);
        assert_eq!(<[f32; 3]>::from(v), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_vec3_constants() {
        assert_eq!(Vec3::ZERO.to_array(), [0.0, 0.0, 0.0]);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn test_vec3_arithmetic() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let q = Vec3::new(4.0, -5.0, 6.0);
        assert_eq!(p + q, Vec3::new(5.0, -3.0, 9.0));
        assert_eq!(p - q, Vec3::new(-3.0, 7.0, -3.0));
        assert_eq!(p * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * p, p.scale(2.0));
        assert_eq!(q / 2.0, Vec3::new(2.0, -2.5, 3.0));
        assert_eq!(-p, p.opposite());
        assert_eq!(p.opposite(), Vec3::new(-1.0, -2.0, -3.0));

        let mut r = p;
        r += q;
        r -= q;
        assert_eq!(r, p);
    }

    #[test]
    fn test_vec3_add_sub_roundtrip() {
        let p = Vec3::new(0.1, -7.25, 1e3);
        let q = Vec3::new(3.3, 0.002, -42.0);
        let r = p.add(q).sub(q);
        assert_eq!(r, (p + q) - q);
        assert_relative_eq!(r.x, p.x, epsilon = 1e-6);
        assert_relative_eq!(r.y, p.y, epsilon = 1e-5);
        assert_relative_eq!(r.z, p.z, epsilon = 1e-4);
    }

    #[test]
    fn test_vec3_products() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let q = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(p.dot(q), 32.0);
        assert_eq!(p.square_length(), 14.0);
        assert_eq!(p.cross(q), Vec3::new(-3.0, 6.0, -3.0));
        assert_eq!(p.cross(q).dot(p), 0.0);
        assert_eq!(p.cross(q).dot(q), 0.0);
    }

    #[test]
    fn test_vec3_length_and_normalize() {
        let v = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(v.length(), 7.0);
        assert_eq!(v.length_with(&WideMath), 7.0);

        let n = v.normalize();
        assert_relative_eq!(n.x, 2.0 / 7.0);
        assert_relative_eq!(n.y, 3.0 / 7.0);
        assert_relative_eq!(n.z, 6.0 / 7.0);
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_vec3_normalize_zero() {
        let n = Vec3::ZERO.normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
        assert!(!n.is_finite());
        assert_eq!(
            Vec3::ZERO.try_normalize(&StdMath),
            Err(AlgebraError::ZeroLength)
        );
        assert_eq!(Vec3::Z.scale(4.0).try_normalize(&StdMath), Ok(Vec3::Z));
        assert_eq!(
            Vec3::new(f32::INFINITY, 0.0, 0.0).try_normalize(&StdMath),
            Err(AlgebraError::NonFinite)
        );
    }

    #[test]
    fn test_vec3_lerp() {
        let p = Vec3::new(0.1, 0.7, -3.3);
        let q = Vec3::new(9.0, -2.2, 0.3);
        assert_eq!(p.lerp(q, 0.0), p);
        assert_eq!(p.lerp(q, 1.0), q);

        let mid = Vec3::new(0.0, 0.0, 0.0).lerp(Vec3::new(2.0, 4.0, -6.0), 0.5);
        assert_eq!(mid, Vec3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn test_vec3_inverse_axis() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.inverse_x(), Vec3::new(-1.0, 2.0, 3.0));
        assert_eq!(v.inverse_y(), Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(v.inverse_z(), Vec3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn test_vec3_glam_conversion() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let glam_v: glam::Vec3 = v.into();
        assert_eq!(glam_v, glam::Vec3::new(1.0, 2.0, 3.0));
        let back: Vec3 = glam_v.into();
        assert_eq!(v, back);
    }
}
