use rigid3d_algebra::{Mat3, Vec3};

use crate::FrameError;

/// Tolerance of the orthonormality check in debug builds.
const DEBUG_ROTATION_TOLERANCE: f32 = 1e-3;

/// Rigid placement of a local frame inside its parent frame.
///
/// A posture is the origin of the local frame expressed in the parent frame
/// (`position`) and the orientation of the local axes (`rotation`, whose
/// columns are the local x, y and z axes in parent coordinates).
///
/// # Example
///
/// ```
/// use rigid3d_algebra::{Mat3, Vec3};
/// use rigid3d_frames::Posture;
///
/// // quarter turn around z, moved to (1, 0, 0)
/// let rotation = Mat3::from_cols(Vec3::Y, -Vec3::X, Vec3::Z);
/// let posture = Posture::new(Vec3::new(1.0, 0.0, 0.0), rotation);
///
/// let p = posture.from_local_to_parent(Vec3::new(1.0, 0.0, 0.0));
/// assert_eq!(p, Vec3::new(1.0, 1.0, 0.0));
/// assert_eq!(posture.from_parent_to_local(p), Vec3::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Posture {
    position: Vec3,
    rotation: Mat3,
}

impl Default for Posture {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Posture {
    /// The posture of a frame that coincides with its parent.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Mat3::IDENTITY,
    };

    /// Create a posture from the local origin and orientation.
    ///
    /// PRECONDITION: `rotation` is a proper rotation. This is checked only in
    /// debug builds; use [`Posture::try_new`] to validate at runtime.
    pub fn new(position: Vec3, rotation: Mat3) -> Self {
        debug_assert!(
            rotation.check_rotation(DEBUG_ROTATION_TOLERANCE).is_ok(),
            "posture rotation is not a proper rotation: {rotation:?}"
        );
        Self { position, rotation }
    }

    /// Create a posture, checking that `rotation` is orthonormal with
    /// determinant +1 within `tolerance`.
    ///
    /// # Errors
    ///
    /// [`FrameError::InvalidRotation`] if the check fails.
    pub fn try_new(position: Vec3, rotation: Mat3, tolerance: f32) -> Result<Self, FrameError> {
        rotation.check_rotation(tolerance)?;
        Ok(Self { position, rotation })
    }

    /// Origin of the local frame in parent coordinates.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Orientation of the local frame.
    #[inline]
    pub fn rotation(&self) -> &Mat3 {
        &self.rotation
    }

    /// Express a local position in parent coordinates: `R * p + t`.
    #[inline]
    pub fn from_local_to_parent(&self, local: Vec3) -> Vec3 {
        self.rotation.map(local) + self.position
    }

    /// Express a parent position in local coordinates: `Rᵀ * (p - t)`.
    #[inline]
    pub fn from_parent_to_local(&self, parent: Vec3) -> Vec3 {
        self.rotation.transpose().map(parent - self.position)
    }
}
