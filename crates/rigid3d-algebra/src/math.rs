//! Scalar functions consumed by the algebra kernel.
//!
//! Every operation that needs a square root or a trigonometric function takes
//! a [`MathBackend`] explicitly, so results only depend on the arguments and
//! the backend that was handed in. Operations without a `_with` suffix use
//! [`StdMath`].
//!
//! ```
//! use rigid3d_algebra::{MathBackend, StdMath, Vec3, WideMath};
//!
//! let v = Vec3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.length_with(&StdMath), 5.0);
//! assert_eq!(v.length_with(&WideMath), 5.0);
//! assert_eq!(StdMath.sqrt(16.0), 4.0);
//! ```

/// Single precision scalar functions used by the kernel.
///
/// Implementations must follow IEEE-754 single precision semantics:
///
/// * `sqrt` of a negative number is NaN,
/// * `sin` and `cos` take radians,
/// * `atan2(y, x)` returns radians in `(-π, π]`.
pub trait MathBackend {
    /// Square root.
    fn sqrt(&self, x: f32) -> f32;

    /// Sine of an angle in radians.
    fn sin(&self, x: f32) -> f32;

    /// Cosine of an angle in radians.
    fn cos(&self, x: f32) -> f32;

    /// Four quadrant arctangent of `y / x`.
    fn atan2(&self, y: f32, x: f32) -> f32;
}

impl<M: MathBackend + ?Sized> MathBackend for &M {
    #[inline]
    fn sqrt(&self, x: f32) -> f32 {
        (**self).sqrt(x)
    }

    #[inline]
    fn sin(&self, x: f32) -> f32 {
        (**self).sin(x)
    }

    #[inline]
    fn cos(&self, x: f32) -> f32 {
        (**self).cos(x)
    }

    #[inline]
    fn atan2(&self, y: f32, x: f32) -> f32 {
        (**self).atan2(y, x)
    }
}

/// The `f32` functions of the standard library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdMath;

impl MathBackend for StdMath {
    #[inline]
    fn sqrt(&self, x: f32) -> f32 {
        x.sqrt()
    }

    #[inline]
    fn sin(&self, x: f32) -> f32 {
        x.sin()
    }

    #[inline]
    fn cos(&self, x: f32) -> f32 {
        x.cos()
    }

    #[inline]
    fn atan2(&self, y: f32, x: f32) -> f32 {
        y.atan2(x)
    }
}

/// Evaluates in double precision and rounds the result to `f32`.
///
/// The result is the correctly rounded value whenever the `f64` function is
/// accurate to within half an `f32` ulp, which makes this backend useful as a
/// reference when checking [`StdMath`] results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WideMath;

impl MathBackend for WideMath {
    #[inline]
    fn sqrt(&self, x: f32) -> f32 {
        (x as f64).sqrt() as f32
    }

    #[inline]
    fn sin(&self, x: f32) -> f32 {
        (x as f64).sin() as f32
    }

    #[inline]
    fn cos(&self, x: f32) -> f32 {
        (x as f64).cos() as f32
    }

    #[inline]
    fn atan2(&self, y: f32, x: f32) -> f32 {
        (y as f64).atan2(x as f64) as f32
    }
}
