//! Linear algebra operations for rigid3d-algebra
//!
//! This module provides higher-level linear algebra algorithms that operate on
//! the algebraic types of the crate.

/// Jacobi eigen-decomposition of symmetric 3x3 matrices
pub mod jacobi;

pub use jacobi::{eigenvalues_and_vectors, JacobiConfig, JacobiSolver, SymmetricEigen, SymmetricMat3};
