//! Jacobi eigenvalue algorithm for symmetric 3x3 matrices.
//!
//! Each step picks the off-diagonal entry with the largest magnitude and
//! zeroes it with a plane rotation. Every step strictly decreases the sum of
//! the squared off-diagonal entries, so the iteration converges for any
//! finite symmetric input.
//!
//! # Example
//!
//! ```
//! use rigid3d_algebra::{JacobiConfig, JacobiSolver, SymmetricMat3};
//!
//! // |  5  1 -2 |
//! // |  1  6 -1 |
//! // | -2 -1  5 |
//! let m = SymmetricMat3::new(5.0, 1.0, -2.0, 6.0, -1.0, 5.0);
//! let solver = JacobiSolver::new(JacobiConfig {
//!     threshold: 1e-3,
//!     ..Default::default()
//! });
//! let eigen = solver.solve(&m).unwrap();
//! let lambda = eigen.eigenvalues();
//! assert!((lambda.x - 3.0).abs() < 1e-5);
//! assert!((lambda.y - 5.0).abs() < 1e-5);
//! assert!((lambda.z - 8.0).abs() < 1e-5);
//! ```
//!
//! # References
//!
//! * <https://en.wikipedia.org/wiki/Jacobi_eigenvalue_algorithm>

use crate::{AlgebraError, Mat3, MathBackend, StdMath, Vec3};

/// A symmetric 3x3 matrix, stored as its upper triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetricMat3 {
    /// Row 1, column 1.
    pub a11: f32,
    /// Rows/columns 1 and 2.
    pub a12: f32,
    /// Rows/columns 1 and 3.
    pub a13: f32,
    /// Row 2, column 2.
    pub a22: f32,
    /// Rows/columns 2 and 3.
    pub a23: f32,
    /// Row 3, column 3.
    pub a33: f32,
}

/// The three coordinate planes a Jacobi rotation can act in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plane {
    P12,
    P13,
    P23,
}

impl Plane {
    /// Zero-based `(i, j)` indices of the plane.
    fn indices(self) -> (usize, usize) {
        match self {
            Plane::P12 => (0, 1),
            Plane::P13 => (0, 2),
            Plane::P23 => (1, 2),
        }
    }

    /// The transpose of the plane rotation `G`: identity except for
    /// `(i, i) = cos`, `(j, i) = -sin`, `(i, j) = sin`, `(j, j) = cos`.
    fn rotation_transpose(self, cos: f32, sin: f32) -> Mat3 {
        let (i, j) = self.indices();
        let mut cols = Mat3::IDENTITY.to_cols_array();
        cols[3 * i + i] = cos;
        cols[3 * i + j] = -sin;
        cols[3 * j + i] = sin;
        cols[3 * j + j] = cos;
        Mat3::from_cols_array(&cols)
    }
}

impl SymmetricMat3 {
    /// Create a symmetric matrix from its upper triangle.
    #[inline]
    pub const fn new(a11: f32, a12: f32, a13: f32, a22: f32, a23: f32, a33: f32) -> Self {
        Self {
            a11,
            a12,
            a13,
            a22,
            a23,
            a33,
        }
    }

    /// Take the upper triangle of `m`. The lower triangle is ignored.
    #[inline]
    pub fn from_upper(m: &Mat3) -> Self {
        Self::new(
            m.x_axis.x, m.y_axis.x, m.z_axis.x, m.y_axis.y, m.z_axis.y, m.z_axis.z,
        )
    }

    /// The full matrix.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_cols(
            Vec3::new(self.a11, self.a12, self.a13),
            Vec3::new(self.a12, self.a22, self.a23),
            Vec3::new(self.a13, self.a23, self.a33),
        )
    }

    /// Returns true if all entries are finite.
    pub fn is_finite(&self) -> bool {
        [self.a11, self.a12, self.a13, self.a22, self.a23, self.a33]
            .iter()
            .all(|a| a.is_finite())
    }

    /// The off-diagonal entry with the largest magnitude. On a tie the
    /// earlier plane in the order 12, 13, 23 wins.
    fn largest_off_diagonal(&self) -> (Plane, f32) {
        let candidates = [
            (Plane::P13, self.a13.abs()),
            (Plane::P23, self.a23.abs()),
        ];
        let mut max = (Plane::P12, self.a12.abs());
        for candidate in candidates {
            if max.1 < candidate.1 {
                max = candidate;
            }
        }
        max
    }

    /// Apply the plane rotation that zeroes the `(i, j)` entry.
    ///
    /// Returns the transpose of the rotation, which the caller accumulates
    /// into the eigenvector matrix.
    fn rotate<M: MathBackend>(&mut self, plane: Plane, math: &M) -> Mat3 {
        // (ii, jj, ij, ik, jk) where k is the remaining index
        let (ii, jj, ij, ik, jk) = match plane {
            Plane::P12 => (self.a11, self.a22, self.a12, self.a13, self.a23),
            Plane::P13 => (self.a11, self.a33, self.a13, self.a12, self.a23),
            Plane::P23 => (self.a22, self.a33, self.a23, self.a12, self.a13),
        };

        let theta = math.atan2(2.0 * ij, jj - ii) / 2.0;
        let cos = math.cos(theta);
        let sin = math.sin(theta);

        let cos_cos = cos * cos;
        let sin_sin = sin * sin;
        let double_sin_cos = 2.0 * (sin * cos);

        let new_ii = (cos_cos * ii) - (double_sin_cos * ij) + (sin_sin * jj);
        let new_jj = (sin_sin * ii) + (double_sin_cos * ij) + (cos_cos * jj);
        let new_ik = (cos * ik) - (sin * jk);
        let new_jk = (sin * ik) + (cos * jk);

        match plane {
            Plane::P12 => {
                (self.a11, self.a22, self.a12, self.a13, self.a23) =
                    (new_ii, new_jj, 0.0, new_ik, new_jk);
            }
            Plane::P13 => {
                (self.a11, self.a33, self.a13, self.a12, self.a23) =
                    (new_ii, new_jj, 0.0, new_ik, new_jk);
            }
            Plane::P23 => {
                (self.a22, self.a33, self.a23, self.a12, self.a13) =
                    (new_ii, new_jj, 0.0, new_ik, new_jk);
            }
        }

        plane.rotation_transpose(cos, sin)
    }
}

impl From<&Mat3> for SymmetricMat3 {
    fn from(m: &Mat3) -> Self {
        Self::from_upper(m)
    }
}

impl From<SymmetricMat3> for Mat3 {
    fn from(m: SymmetricMat3) -> Self {
        m.to_mat3()
    }
}

/// Parameters of the Jacobi iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct JacobiConfig {
    /// Stop once every off-diagonal entry is below this magnitude.
    pub threshold: f32,
    /// Maximum number of plane rotations before giving up.
    pub max_iterations: usize,
}

impl Default for JacobiConfig {
    fn default() -> Self {
        Self {
            threshold: 1e-6,
            max_iterations: 64,
        }
    }
}

/// Result of the eigen-decomposition of a symmetric matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricEigen {
    /// Diagonal matrix of eigenvalues.
    pub d: Mat3,
    /// Orthonormal matrix whose columns are the eigenvectors, in the order
    /// of the diagonal of `d`.
    pub v: Mat3,
    /// Number of plane rotations applied.
    pub iterations: usize,
}

impl SymmetricEigen {
    /// The eigenvalues, in the order of the columns of `v`.
    #[inline]
    pub fn eigenvalues(&self) -> Vec3 {
        self.d.diagonal()
    }

    /// The unit eigenvector of the `index`-th eigenvalue (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 2.
    #[inline]
    pub fn eigenvector(&self, index: usize) -> Vec3 {
        self.v.col(index)
    }
}

/// Jacobi eigensolver for symmetric 3x3 matrices.
#[derive(Debug, Clone, Default)]
pub struct JacobiSolver {
    config: JacobiConfig,
}

impl JacobiSolver {
    /// Create a solver with the given parameters.
    pub fn new(config: JacobiConfig) -> Self {
        Self { config }
    }

    /// Create a solver with the given threshold and the default iteration cap.
    pub fn with_threshold(threshold: f32) -> Self {
        Self::new(JacobiConfig {
            threshold,
            ..Default::default()
        })
    }

    /// The solver parameters.
    pub fn config(&self) -> &JacobiConfig {
        &self.config
    }

    /// Decompose `m` using [`StdMath`].
    pub fn solve(&self, m: &SymmetricMat3) -> Result<SymmetricEigen, AlgebraError> {
        self.solve_with(m, &StdMath)
    }

    /// Decompose `m` with the given scalar backend.
    ///
    /// # Errors
    ///
    /// * [`AlgebraError::NonFinite`] if `m` has a NaN or infinite entry.
    /// * [`AlgebraError::NotConverged`] if the off-diagonal entries are still
    ///   above the threshold after `max_iterations` rotations. A threshold of
    ///   zero or below always ends here.
    pub fn solve_with<M: MathBackend>(
        &self,
        m: &SymmetricMat3,
        math: &M,
    ) -> Result<SymmetricEigen, AlgebraError> {
        if !m.is_finite() {
            return Err(AlgebraError::NonFinite);
        }

        let mut a = *m;
        let mut v = Mat3::IDENTITY;
        let mut iterations = 0;

        loop {
            let (plane, residual) = a.largest_off_diagonal();
            if residual < self.config.threshold {
                log::debug!("jacobi converged after {iterations} rotations");
                return Ok(SymmetricEigen {
                    d: Mat3::from_diagonal(Vec3::new(a.a11, a.a22, a.a33)),
                    v,
                    iterations,
                });
            }
            if iterations >= self.config.max_iterations {
                return Err(AlgebraError::NotConverged {
                    iterations,
                    residual,
                });
            }

            log::trace!("jacobi rotation {iterations}: {plane:?}, |a_ij| = {residual}");
            let g_t = a.rotate(plane, math);
            v = v.mul_mat3(&g_t);
            iterations += 1;
        }
    }
}

/// Eigenvalues and eigenvectors of the symmetric matrix with upper triangle
/// `(a11, a12, a13, a22, a23, a33)`.
///
/// Returns `(d, v)`: `d` is diagonal with the eigenvalues and the columns of
/// `v` are the matching unit eigenvectors. Uses [`StdMath`] and the default
/// iteration cap of [`JacobiConfig`].
pub fn eigenvalues_and_vectors(
    threshold: f32,
    a11: f32,
    a12: f32,
    a13: f32,
    a22: f32,
    a23: f32,
    a33: f32,
) -> Result<(Mat3, Mat3), AlgebraError> {
    let m = SymmetricMat3::new(a11, a12, a13, a22, a23, a33);
    let eigen = JacobiSolver::with_threshold(threshold).solve(&m)?;
    Ok((eigen.d, eigen.v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WideMath;
    use approx::assert_relative_eq;

    fn assert_vec3_eq(a: Vec3, b: Vec3, epsilon: f32) {
        assert_relative_eq!(a.x, b.x, epsilon = epsilon);
        assert_relative_eq!(a.y, b.y, epsilon = epsilon);
        assert_relative_eq!(a.z, b.z, epsilon = epsilon);
    }

    fn assert_orthonormal(v: &Mat3) {
        assert!(v.check_rotation(1e-5).is_ok(), "not a rotation: {v:?}");
    }

    #[test]
    fn test_largest_off_diagonal_tie_break() {
        let m = SymmetricMat3::new(0.0, 1.0, -1.0, 0.0, 1.0, 0.0);
        assert_eq!(m.largest_off_diagonal(), (Plane::P12, 1.0));

        let m = SymmetricMat3::new(0.0, 0.5, -1.0, 0.0, 1.0, 0.0);
        assert_eq!(m.largest_off_diagonal(), (Plane::P13, 1.0));

        let m = SymmetricMat3::new(0.0, 0.5, -1.0, 0.0, -2.0, 0.0);
        assert_eq!(m.largest_off_diagonal(), (Plane::P23, 2.0));
    }

    #[test]
    fn test_rotation_transpose_layout() {
        let g = Plane::P13.rotation_transpose(0.6, 0.8);
        assert_eq!(g.x_axis, Vec3::new(0.6, 0.0, -0.8));
        assert_eq!(g.y_axis, Vec3::Y);
        assert_eq!(g.z_axis, Vec3::new(0.8, 0.0, 0.6));

        let g = Plane::P23.rotation_transpose(0.6, 0.8);
        assert_eq!(g.x_axis, Vec3::X);
        assert_eq!(g.y_axis, Vec3::new(0.0, 0.6, -0.8));
        assert_eq!(g.z_axis, Vec3::new(0.0, 0.8, 0.6));
    }

    #[test]
    fn test_eigen_distinct() {
        let delta = 1e-6;
        // |  5  1 -2 |
        // |  1  6 -1 |
        // | -2 -1  5 |
        let m = SymmetricMat3::new(5.0, 1.0, -2.0, 6.0, -1.0, 5.0);
        let full = m.to_mat3();
        let lambda = [3.0, 5.0, 8.0];
        let u = [
            Vec3::new(1.0, 0.0, 1.0).normalize(),
            Vec3::new(-1.0, 2.0, 1.0).normalize(),
            Vec3::new(-1.0, -1.0, 1.0).normalize(),
        ];
        for k in 0..3 {
            assert_vec3_eq(full.map(u[k]), u[k] * lambda[k], delta * 10.0);
        }

        let (d, v) = eigenvalues_and_vectors(0.001, 5.0, 1.0, -2.0, 6.0, -1.0, 5.0).unwrap();
        for k in 0..3 {
            let value = d.col(k);
            let mut expected = [0.0; 3];
            expected[k] = lambda[k];
            assert_relative_eq!(value.x, expected[0], epsilon = delta, max_relative = delta);
            assert_relative_eq!(value.y, expected[1], epsilon = delta, max_relative = delta);
            assert_relative_eq!(value.z, expected[2], epsilon = delta, max_relative = delta);
            assert_vec3_eq(v.col(k), u[k], delta);
        }
        assert_orthonormal(&v);
    }

    #[test]
    fn test_eigen_degenerate() {
        let delta = 1e-6;
        // |  0  1  1 |
        // |  1  0 -1 |
        // |  1 -1  0 |
        let m = Mat3::from_cols(
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(1.0, -1.0, 0.0),
        );
        let eigen = m.eigen_symmetric(&JacobiSolver::with_threshold(0.001)).unwrap();
        let lambda = eigen.eigenvalues();
        assert_relative_eq!(lambda.x, -2.0, epsilon = delta);
        assert_relative_eq!(lambda.y, 1.0, epsilon = delta);
        assert_relative_eq!(lambda.z, 1.0, epsilon = delta);

        assert_vec3_eq(
            eigen.eigenvector(0),
            Vec3::new(1.0, -1.0, -1.0).normalize(),
            delta,
        );
        // the order inside the double root is unspecified
        let mut pair = [eigen.eigenvector(1), eigen.eigenvector(2)];
        pair.sort_by(|p, q| p.z.total_cmp(&q.z));
        assert_vec3_eq(pair[0], Vec3::new(1.0, 1.0, 0.0).normalize(), delta);
        assert_vec3_eq(pair[1], Vec3::new(1.0, -1.0, 2.0).normalize(), delta);
        assert_orthonormal(&eigen.v);
    }

    #[test]
    fn test_eigen_reconstruction() {
        let _ = env_logger::builder().is_test(true).try_init();
        let m = SymmetricMat3::new(4.0, -2.0, 0.5, 3.0, 1.5, -1.0);
        for eigen in [
            JacobiSolver::default().solve(&m).unwrap(),
            JacobiSolver::default().solve_with(&m, &WideMath).unwrap(),
        ] {
            assert_orthonormal(&eigen.v);
            // A V = V D
            let av = m.to_mat3().mul_mat3(&eigen.v);
            let vd = eigen.v.mul_mat3(&eigen.d);
            for (x, y) in av.to_cols_array().iter().zip(vd.to_cols_array().iter()) {
                assert_relative_eq!(x, y, epsilon = 1e-5);
            }
            assert!(eigen.iterations > 0);
        }
    }

    #[test]
    fn test_eigen_already_diagonal() {
        let m = SymmetricMat3::new(2.0, 0.0, 0.0, -1.0, 0.0, 7.0);
        let eigen = JacobiSolver::default().solve(&m).unwrap();
        assert_eq!(eigen.iterations, 0);
        assert_eq!(eigen.v, Mat3::IDENTITY);
        assert_eq!(eigen.eigenvalues(), Vec3::new(2.0, -1.0, 7.0));
    }

    #[test]
    fn test_eigen_errors() {
        let nan = SymmetricMat3::new(1.0, f32::NAN, 0.0, 1.0, 0.0, 1.0);
        assert_eq!(
            JacobiSolver::default().solve(&nan),
            Err(AlgebraError::NonFinite)
        );

        let m = SymmetricMat3::new(5.0, 1.0, -2.0, 6.0, -1.0, 5.0);
        let solver = JacobiSolver::new(JacobiConfig {
            threshold: 0.0,
            max_iterations: 10,
        });
        match solver.solve(&m) {
            Err(AlgebraError::NotConverged { iterations, .. }) => assert_eq!(iterations, 10),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_symmetric_from_upper() {
        let m = Mat3::from_cols(
            Vec3::new(1.0, 99.0, 99.0),
            Vec3::new(2.0, 4.0, 99.0),
            Vec3::new(3.0, 5.0, 6.0),
        );
        let s = SymmetricMat3::from(&m);
        assert_eq!(s, SymmetricMat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
        assert_eq!(Mat3::from(s), s.to_mat3());
        assert_eq!(s.to_mat3().transpose(), s.to_mat3());
    }
}
