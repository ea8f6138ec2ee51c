//! 3x3 matrix type for RGB/XYZ transforms.
//!
//! [`Mat3`] keeps its elements row-major so constants can be copied straight
//! from published tables. Products, determinants and inverses are delegated
//! to [`glam::DMat3`], which is column-major; the conversion happens in
//! [`Mat3::to_glam`] / [`Mat3::from_glam`].

use crate::Vec3;
use rgbspace_core::{Error, Result};
use std::ops::{Index, Mul};

/// Determinants smaller than this are treated as singular.
const SINGULAR_EPS: f64 = 1e-12;

/// A 3x3 double precision matrix.
///
/// # Example
///
/// ```rust
/// use rgbspace_math::{Mat3, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Elements in row-major order: `[row0, row1, row2]`
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix whose columns are the given vectors.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_glam(glam::DMat3::from_cols(c0, c1, c2))
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d: [f64; 3]) -> Self {
        Self::from_rows([[d[0], 0.0, 0.0], [0.0, d[1], 0.0], [0.0, 0.0, d[2]]])
    }

    /// Returns row `i` as a vector.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Returns column `i` as a vector.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Returns the rows as plain arrays.
    #[inline]
    pub const fn to_rows(&self) -> [[f64; 3]; 3] {
        self.m
    }

    /// Returns the transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_glam(self.to_glam().transpose())
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.to_glam().determinant()
    }

    /// Computes the inverse, or `None` if the matrix is singular.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rgbspace_math::Mat3;
    ///
    /// let m = Mat3::diagonal([2.0, 4.0, 8.0]);
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv, Mat3::diagonal([0.5, 0.25, 0.125]));
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let g = self.to_glam();
        if !g.is_finite() || g.determinant().abs() < SINGULAR_EPS {
            return None;
        }
        Some(Self::from_glam(g.inverse()))
    }

    /// Like [`Mat3::inverse`] but reports a singular matrix as an error.
    ///
    /// `context` names the matrix in the error message.
    pub fn try_inverse(&self, context: &str) -> Result<Self> {
        self.inverse()
            .ok_or_else(|| Error::singular_matrix(format!("{context} is not invertible")))
    }

    /// Transforms a vector: `self * v`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        self.to_glam() * v
    }

    /// Applies the matrix to a plain `[f64; 3]`.
    #[inline]
    pub fn transform_array(&self, v: [f64; 3]) -> [f64; 3] {
        self.transform(Vec3::from_array(v)).to_array()
    }

    /// Largest absolute element-wise difference to `other`.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Returns true if all elements are within `eps` of `other`.
    #[inline]
    pub fn abs_diff_eq(&self, other: &Self, eps: f64) -> bool {
        self.max_abs_diff(other) <= eps
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to a column-major [`glam::DMat3`].
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols_array_2d(&self.m).transpose()
    }

    /// Creates from a column-major [`glam::DMat3`].
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        Self::from_rows(m.transpose().to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() * rhs.to_glam())
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 3] {
        &self.m[i]
    }
}

impl From<[[f64; 3]; 3]> for Mat3 {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}
