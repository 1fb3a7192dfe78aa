//! 3x3 matrix (single precision).

use std::ops::Mul;

use crate::{
    AlgebraError, JacobiSolver, MathBackend, Quat, StdMath, SymmetricEigen, SymmetricMat3, Vec3,
};

/// 3x3 matrix stored as three column vectors.
///
/// The matrix is a linear map: `m.map(v) == x_axis * v.x + y_axis * v.y + z_axis * v.z`.
/// Indices in the documentation are 1-based and row-major, so `m12` is the
/// entry in the first row of the second column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// First column.
    pub x_axis: Vec3,
    /// Second column.
    pub y_axis: Vec3,
    /// Third column.
    pub z_axis: Vec3,
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    /// All zeros.
    pub const ZERO: Self = Self::from_cols(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_cols(Vec3::X, Vec3::Y, Vec3::Z);

    /// Create a new matrix from column vectors.
    #[inline]
    pub const fn from_cols(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        Self {
            x_axis,
            y_axis,
            z_axis,
        }
    }

    /// Create a new matrix from a column-major array.
    #[inline]
    pub const fn from_cols_array(m: &[f32; 9]) -> Self {
        Self::from_cols(
            Vec3::new(m[0], m[1], m[2]),
            Vec3::new(m[3], m[4], m[5]),
            Vec3::new(m[6], m[7], m[8]),
        )
    }

    /// Convert to a column-major array.
    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 9] {
        [
            self.x_axis.x,
            self.x_axis.y,
            self.x_axis.z,
            self.y_axis.x,
            self.y_axis.y,
            self.y_axis.z,
            self.z_axis.x,
            self.z_axis.y,
            self.z_axis.z,
        ]
    }

    /// Create a diagonal matrix.
    #[inline]
    pub const fn from_diagonal(diagonal: Vec3) -> Self {
        Self::from_cols(
            Vec3::new(diagonal.x, 0.0, 0.0),
            Vec3::new(0.0, diagonal.y, 0.0),
            Vec3::new(0.0, 0.0, diagonal.z),
        )
    }

    /// The diagonal entries `(m11, m22, m33)`.
    #[inline]
    pub fn diagonal(&self) -> Vec3 {
        Vec3::new(self.x_axis.x, self.y_axis.y, self.z_axis.z)
    }

    /// Column `index` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 2.
    #[inline]
    pub fn col(&self, index: usize) -> Vec3 {
        match index {
            0 => self.x_axis,
            1 => self.y_axis,
            2 => self.z_axis,
            _ => panic!("column index out of bounds: {index}"),
        }
    }

    /// Row `index` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 2.
    #[inline]
    pub fn row(&self, index: usize) -> Vec3 {
        match index {
            0 => Vec3::new(self.x_axis.x, self.y_axis.x, self.z_axis.x),
            1 => Vec3::new(self.x_axis.y, self.y_axis.y, self.z_axis.y),
            2 => Vec3::new(self.x_axis.z, self.y_axis.z, self.z_axis.z),
            _ => panic!("row index out of bounds: {index}"),
        }
    }

    /// First column, equal to `self.map(Vec3::X)`.
    #[inline]
    pub fn column1(&self) -> Vec3 {
        self.x_axis
    }

    /// Second column, equal to `self.map(Vec3::Y)`.
    #[inline]
    pub fn column2(&self) -> Vec3 {
        self.y_axis
    }

    /// Third column, equal to `self.map(Vec3::Z)`.
    #[inline]
    pub fn column3(&self) -> Vec3 {
        self.z_axis
    }

    /// Apply the matrix to a vector. Each output component is the dot
    /// product of `v` with the corresponding row.
    #[inline]
    pub fn map(&self, v: Vec3) -> Vec3 {
        Vec3::new(v.dot(self.row(0)), v.dot(self.row(1)), v.dot(self.row(2)))
    }

    /// Matrix product `self * rhs`, so that
    /// `(a.mul_mat3(&b)).map(v) == a.map(b.map(v))`.
    #[inline]
    pub fn mul_mat3(&self, rhs: &Self) -> Self {
        Self::from_cols(
            self.map(rhs.x_axis),
            self.map(rhs.y_axis),
            self.map(rhs.z_axis),
        )
    }

    /// Transposed matrix. For a rotation this is the inverse.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    /// Determinant by cofactor expansion.
    pub fn determinant(&self) -> f32 {
        let [m1, m4, m7, m2, m5, m8, m3, m6, m9] = self.to_cols_array();
        (m1 * m5 * m9) + (m2 * m6 * m7) + (m3 * m4 * m8)
            - (m3 * m5 * m7)
            - (m2 * m4 * m9)
            - (m1 * m6 * m8)
    }

    /// Returns true if all entries are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x_axis.is_finite() && self.y_axis.is_finite() && self.z_axis.is_finite()
    }

    /// Largest absolute entry of `self * selfᵀ - I`.
    pub fn orthonormal_deviation(&self) -> f32 {
        let residual = self.mul_mat3(&self.transpose()).to_cols_array();
        let identity = Self::IDENTITY.to_cols_array();
        residual
            .iter()
            .zip(identity.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max)
    }

    /// Check that the matrix is a proper rotation: orthonormal with
    /// determinant +1, both within `tolerance`.
    pub fn check_rotation(&self, tolerance: f32) -> Result<(), AlgebraError> {
        let determinant = self.determinant();
        let deviation = self.orthonormal_deviation();
        // written so that NaN entries fail the check
        if !((determinant - 1.0).abs() <= tolerance && deviation <= tolerance) {
            return Err(AlgebraError::NotOrthonormal {
                determinant,
                deviation,
            });
        }
        Ok(())
    }

    /// Convert a rotation matrix to a unit quaternion using [`StdMath`].
    ///
    /// PRECONDITION: the matrix is a proper rotation.
    #[inline]
    pub fn to_quat(&self) -> Quat {
        self.to_quat_with(&StdMath)
    }

    /// Convert a rotation matrix to a unit quaternion.
    ///
    /// The branch is chosen by the largest of the four trace candidates
    ///
    /// ```text
    /// a =  m11 + m22 + m33
    /// b =  m11 - m22 - m33
    /// c = -m11 + m22 - m33
    /// d = -m11 - m22 + m33
    /// ```
    ///
    /// so the divisor `s = 2 * sqrt(candidate + 1)` stays away from zero.
    /// The candidates are checked in the order a, b, c, d with strict
    /// comparisons, so a tie between two leading candidates resolves to the
    /// later one (all four equal selects d).
    ///
    /// PRECONDITION: the matrix is a proper rotation. Other inputs give
    /// meaningless (possibly NaN) output.
    pub fn to_quat_with<M: MathBackend>(&self, math: &M) -> Quat {
        let [m11, m21, m31, m12, m22, m32, m13, m23, m33] = self.to_cols_array();

        let a_trace = m11 + m22 + m33;
        let b_trace = m11 - m22 - m33;
        let c_trace = -m11 + m22 - m33;
        let d_trace = -m11 - m22 + m33;

        if a_trace > b_trace && a_trace > c_trace && a_trace > d_trace {
            let s = math.sqrt(a_trace + 1.0) * 2.0;
            Quat::from_wxyz(
                0.25 * s,
                (m32 - m23) / s,
                (m13 - m31) / s,
                (m21 - m12) / s,
            )
        } else if b_trace > c_trace && b_trace > d_trace {
            let s = math.sqrt(b_trace + 1.0) * 2.0;
            Quat::from_wxyz(
                (m32 - m23) / s,
                0.25 * s,
                (m21 + m12) / s,
                (m13 + m31) / s,
            )
        } else if c_trace > d_trace {
            let s = math.sqrt(c_trace + 1.0) * 2.0;
            Quat::from_wxyz(
                (m13 - m31) / s,
                (m21 + m12) / s,
                0.25 * s,
                (m32 + m23) / s,
            )
        } else {
            let s = math.sqrt(d_trace + 1.0) * 2.0;
            Quat::from_wxyz(
                (m21 - m12) / s,
                (m13 + m31) / s,
                (m32 + m23) / s,
                0.25 * s,
            )
        }
    }

    /// Rotation matrix of a unit quaternion. See [`Quat::to_mat3`].
    #[inline]
    pub fn from_quat(q: Quat) -> Self {
        q.to_mat3()
    }

    /// Eigen-decomposition of the symmetric matrix given by the upper
    /// triangle of `self`. The lower triangle is ignored.
    pub fn eigen_symmetric(&self, solver: &JacobiSolver) -> Result<SymmetricEigen, AlgebraError> {
        solver.solve(&SymmetricMat3::from_upper(self))
    }
}

impl From<[f32; 9]> for Mat3 {
    #[inline]
    fn from(m: [f32; 9]) -> Self {
        Self::from_cols_array(&m)
    }
}

impl From<Mat3> for [f32; 9] {
    #[inline]
    fn from(m: Mat3) -> Self {
        m.to_cols_array()
    }
}

impl From<glam::Mat3> for Mat3 {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_cols(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }
}

impl From<Mat3> for glam::Mat3 {
    #[inline]
    fn from(m: Mat3) -> Self {
        glam::Mat3::from_cols(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        self.mul_mat3(&rhs)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.map(rhs)
    }
}
