// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::numeric::{is_approx_equals_with, is_approx_zero};
use crate::{Quat, Vec3};

/// Column‑major 4×4 matrix.
///
/// - Stored in column‑major order to align with GPU uploads.
/// - Column-vector convention: `M * p` transforms `p`, so `T * R * S` applies
///   scale first, then rotation, then translation. Under the row-vector
///   convention the same matrix reads `S · R · T`.
/// - Represents affine transforms; helper methods treat points with `w = 1`.
///
/// # Examples
/// ```
/// use srt_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                tx, ty, tz, 1.0, // col 3 (translation)
            ],
        }
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // col 0
                0.0, sy, 0.0, 0.0, // col 1
                0.0, 0.0, sz, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Element at `row`, `col` (both `0..4`).
    ///
    /// # Panics
    /// Panics if either index is ≥ 4.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    fn column3(&self, col: usize) -> Vec3 {
        Vec3::new(self.at(0, col), self.at(1, col), self.at(2, col))
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// # Examples
    /// ```
    /// use srt_math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let x = point.component(0);
        let y = point.component(1);
        let z = point.component(2);
        let w = 1.0;

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z + self.at(0, 3) * w;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z + self.at(1, 3) * w;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z + self.at(2, 3) * w;

        Vec3::new(nx, ny, nz)
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let x = direction.component(0);
        let y = direction.component(1);
        let z = direction.component(2);

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z;

        Vec3::new(nx, ny, nz)
    }

    /// Transforms a surface normal by the inverse-transpose of the upper 3×3.
    ///
    /// Translation is ignored. Non-uniform scale bends normals so they stay
    /// perpendicular to transformed tangents; the result is not renormalised.
    /// A singular 3×3 divides by zero and yields non-finite components.
    ///
    /// # Examples
    /// ```
    /// use srt_math::{Mat4, Vec3};
    /// let m = Mat4::scale(2.0, 1.0, 1.0);
    /// let n = m.transform_normal(&Vec3::UNIT_X);
    /// assert_eq!(n.to_array(), [0.5, 0.0, 0.0]);
    /// ```
    pub fn transform_normal(&self, normal: &Vec3) -> Vec3 {
        let a = self.column3(0);
        let b = self.column3(1);
        let c = self.column3(2);
        // (M⁻¹)ᵀ has columns (b×c, c×a, a×b) / det.
        let bc = b.cross(&c);
        let ca = c.cross(&a);
        let ab = a.cross(&b);
        let det = a.dot(&bc);
        bc.scale(normal.component(0))
            .add(&ca.scale(normal.component(1)))
            .add(&ab.scale(normal.component(2)))
            .scale(1.0 / det)
    }

    /// Determinant of the upper 3×3 block.
    pub fn determinant3(&self) -> f32 {
        let a = self.column3(0);
        let b = self.column3(1);
        let c = self.column3(2);
        a.dot(&b.cross(&c))
    }

    /// Splits an affine matrix into `(scale, rotation, translation)`.
    ///
    /// Scale is the length of each basis column; a negative determinant is
    /// folded into the X scale. When any scale component is approximately
    /// zero the rotation cannot be recovered and identity is returned in its
    /// place.
    pub fn decompose(&self) -> (Vec3, Quat, Vec3) {
        let translation = Vec3::new(self.at(0, 3), self.at(1, 3), self.at(2, 3));

        let a = self.column3(0);
        let b = self.column3(1);
        let c = self.column3(2);
        let mut sx = a.length();
        let sy = b.length();
        let sz = c.length();
        if self.determinant3() < 0.0 {
            sx = -sx;
        }
        let scale = Vec3::new(sx, sy, sz);

        if is_approx_zero(sx) || is_approx_zero(sy) || is_approx_zero(sz) {
            return (scale, Quat::identity(), translation);
        }

        let ra = a.scale(1.0 / sx);
        let rb = b.scale(1.0 / sy);
        let rc = c.scale(1.0 / sz);
        let [ax, ay, az] = ra.to_array();
        let [bx, by, bz] = rb.to_array();
        let [cx, cy, cz] = rc.to_array();
        let rotation_only = Self::new([
            ax, ay, az, 0.0, bx, by, bz, 0.0, cx, cy, cz, 0.0, 0.0, 0.0, 0.0, 1.0,
        ]);
        (scale, Quat::from_rotation_matrix(&rotation_only), translation)
    }

    /// Element-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| is_approx_equals_with(*a, *b, tolerance))
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
