use thiserror::Error;

/// Errors reported by the checked operations of this crate.
///
/// The unchecked operations never fail; they propagate NaN or infinity
/// instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgebraError {
    /// The vector has no direction.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// An input entry is NaN or infinite.
    #[error("input contains a non-finite value")]
    NonFinite,

    /// The Jacobi iteration stopped before the off-diagonal entries fell below the threshold.
    #[error("jacobi iteration did not converge after {iterations} rotations (largest off-diagonal entry {residual})")]
    NotConverged {
        /// Number of plane rotations applied before giving up.
        iterations: usize,
        /// Magnitude of the largest remaining off-diagonal entry.
        residual: f32,
    },

    /// The matrix is not a proper rotation.
    #[error("matrix is not a proper rotation (determinant {determinant}, max deviation from orthonormal {deviation})")]
    NotOrthonormal {
        /// Determinant of the matrix.
        determinant: f32,
        /// Largest absolute entry of `M * Mᵀ - I`.
        deviation: f32,
    },
}
