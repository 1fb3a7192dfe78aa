#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! This crate provides the algebraic building blocks of rigid3d:
//! - Single precision vector, matrix and quaternion types ([`Vec3`], [`Mat3`], [`Quat`])
//! - Conversion between rotation matrices and unit quaternions
//! - Rotation builders (principal axes, Euler angles, axis-angle)
//! - A Jacobi eigensolver for symmetric 3x3 matrices ([`JacobiSolver`])
//! - A pluggable scalar backend for the transcendental functions ([`MathBackend`])

mod error;
mod mat3;
mod math;
mod quat;
mod rotation;
mod vec3;

/// Linear algebra algorithms.
pub mod linalg;

pub use error::AlgebraError;
pub use linalg::{eigenvalues_and_vectors, JacobiConfig, JacobiSolver, SymmetricEigen, SymmetricMat3};
pub use mat3::Mat3;
pub use math::{MathBackend, StdMath, WideMath};
pub use quat::Quat;
pub use vec3::Vec3;
