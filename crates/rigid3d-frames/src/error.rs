use rigid3d_algebra::AlgebraError;
use thiserror::Error;

/// Errors reported when building postures and coordinate systems.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    /// The rotation part of a posture is not a proper rotation.
    #[error("invalid posture rotation: {0}")]
    InvalidRotation(#[from] AlgebraError),
}
