// Copyright 2026 the Straightedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2×2 matrices.

use core::ops::{Mul, MulAssign};

use crate::Vec2;

/// A 2×2 matrix, stored row-major as `[a, b, c, d]`:
///
/// ```text
/// | a b |
/// | c d |
/// ```
///
/// Used to solve the 2×2 linear systems that come up in intersection
/// computations.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix2([f64; 4]);

impl Matrix2 {
    /// The identity matrix.
    pub const IDENTITY: Matrix2 = Matrix2::new([1.0, 0.0, 0.0, 1.0]);

    /// Construct a matrix from row-major coefficients.
    #[inline]
    pub const fn new(c: [f64; 4]) -> Matrix2 {
        Matrix2(c)
    }

    /// Construct a matrix whose columns are the given vectors.
    #[inline]
    pub const fn from_columns(c0: Vec2, c1: Vec2) -> Matrix2 {
        Matrix2([c0.x, c1.x, c0.y, c1.y])
    }

    /// Get the coefficients of the matrix, row-major.
    #[inline]
    pub const fn as_coeffs(self) -> [f64; 4] {
        self.0
    }

    /// Compute the determinant of this matrix.
    #[inline]
    pub fn determinant(self) -> f64 {
        self.0[0] * self.0[3] - self.0[1] * self.0[2]
    }

    /// Compute the inverse matrix.
    ///
    /// Returns `None` when the determinant is exactly zero. Nearly singular
    /// matrices are inverted anyway, with correspondingly large entries.
    pub fn inverse(self) -> Option<Matrix2> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        let [a, b, c, d] = self.0;
        Some(det.recip() * Matrix2([d, -b, -c, a]))
    }
}

impl Default for Matrix2 {
    #[inline]
    fn default() -> Matrix2 {
        Matrix2::IDENTITY
    }
}

impl Mul<Vec2> for Matrix2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, other: Vec2) -> Vec2 {
        Vec2::new(
            self.0[0] * other.x + self.0[1] * other.y,
            self.0[2] * other.x + self.0[3] * other.y,
        )
    }
}

impl Mul for Matrix2 {
    type Output = Matrix2;

    #[inline]
    fn mul(self, other: Matrix2) -> Matrix2 {
        Matrix2([
            self.0[0] * other.0[0] + self.0[1] * other.0[2],
            self.0[0] * other.0[1] + self.0[1] * other.0[3],
            self.0[2] * other.0[0] + self.0[3] * other.0[2],
            self.0[2] * other.0[1] + self.0[3] * other.0[3],
        ])
    }
}

impl MulAssign for Matrix2 {
    #[inline]
    fn mul_assign(&mut self, other: Matrix2) {
        *self = self.mul(other);
    }
}

impl Mul<Matrix2> for f64 {
    type Output = Matrix2;

    #[inline]
    fn mul(self, other: Matrix2) -> Matrix2 {
        Matrix2(other.0.map(|c| self * c))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix2, Vec2};

    fn assert_near(m0: Matrix2, m1: Matrix2) {
        for (a, b) in m0.as_coeffs().iter().zip(m1.as_coeffs()) {
            assert!((a - b).abs() < 1e-12, "{m0:?} != {m1:?}");
        }
    }

    #[test]
    fn identity_inverse() {
        assert_eq!(Matrix2::IDENTITY.inverse(), Some(Matrix2::IDENTITY));
    }

    #[test]
    fn singular_has_no_inverse() {
        let m = Matrix2::new([1.0, 2.0, 2.0, 4.0]);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), None);
    }

    #[test]
    fn inverse_roundtrip() {
        let m = Matrix2::new([2.0, 1.0, -3.0, 0.5]);
        let inv = m.inverse().unwrap();
        assert_near(m * inv, Matrix2::IDENTITY);
        assert_near(inv * m, Matrix2::IDENTITY);
    }

    #[test]
    fn columns_and_scale() {
        let m = Matrix2::from_columns(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(m.as_coeffs(), [1.0, 3.0, 2.0, 4.0]);
        assert_eq!(m * Vec2::new(1.0, 0.0), Vec2::new(1.0, 2.0));
        assert_eq!(2.0 * m, Matrix2::new([2.0, 6.0, 4.0, 8.0]));
        assert_eq!(m.determinant(), -2.0);
    }
}
