// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::numeric::{is_approx_equals_with, ZERO_TOLERANCE};
use crate::{Mat4, Vec3};

/// Quaternion stored as `(x, y, z, w)`.
///
/// * All angles are expressed in radians.
/// * Rotation helpers ([`Quat::rotate`], [`Quat::to_mat4`]) normalise
///   internally, so slightly drifted quaternions still rotate rigidly.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 4]", into = "[f32; 4]")
)]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    fn vector_part(&self) -> Vec3 {
        Vec3::new(self.component(0), self.component(1), self.component(2))
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `ZERO_TOLERANCE`.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= ZERO_TOLERANCE * ZERO_TOLERANCE {
            return Self::identity();
        }
        let len = len_sq.sqrt();
        let norm_axis = axis.scale(1.0 / len);
        let half = angle * 0.5;
        let (sin_half, cos_half) = half.sin_cos();
        let scaled = norm_axis.scale(sin_half);
        Self::new(
            scaled.component(0),
            scaled.component(1),
            scaled.component(2),
            cos_half,
        )
    }

    /// Extracts the rotation held in the upper 3×3 of `m`.
    ///
    /// The 3×3 block must be orthonormal (scale already divided out);
    /// [`Mat4::decompose`] takes care of that.
    pub fn from_rotation_matrix(m: &Mat4) -> Self {
        let m00 = m.at(0, 0);
        let m01 = m.at(0, 1);
        let m02 = m.at(0, 2);
        let m10 = m.at(1, 0);
        let m11 = m.at(1, 1);
        let m12 = m.at(1, 2);
        let m20 = m.at(2, 0);
        let m21 = m.at(2, 1);
        let m22 = m.at(2, 2);

        let trace = m00 + m11 + m22;
        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        };
        q.normalize()
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Rotating a vector by the product applies `other` first and `self`
    /// second, matching column-vector matrix composition. Quaternion
    /// multiplication is non‑commutative.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use srt_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    /// let composed = yaw.multiply(&pitch); // pitch, then yaw
    /// assert_ne!(composed.to_array(), pitch.multiply(&yaw).to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let aw = self.component(3);

        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        let bw = other.component(3);

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Normalises the quaternion; returns identity when norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = self.dot(self).sqrt();
        if len <= ZERO_TOLERANCE {
            return Self::identity();
        }
        let inv = 1.0 / len;
        Self::new(
            self.component(0) * inv,
            self.component(1) * inv,
            self.component(2) * inv,
            self.component(3) * inv,
        )
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Rotates `v` by this quaternion (`q · v · q*`).
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        let q = self.normalize();
        let u = q.vector_part();
        let w = q.component(3);
        // v' = v + w·t + u × t, with t = 2·(u × v)
        let t = u.cross(v).scale(2.0);
        v.add(&t.scale(w)).add(&u.cross(&t))
    }

    /// Spherical linear interpolation along the shortest arc.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate along the same
    /// great circle. The result is unit length. Nearly parallel inputs fall
    /// back to a normalised linear blend to avoid dividing by `sin θ ≈ 0`.
    pub fn slerp(&self, end: &Self, t: f32) -> Self {
        let mut cos_theta = self.dot(end);
        let mut target = *end;
        if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            target = target.scaled(-1.0);
        }

        let (w0, w1) = if cos_theta > 1.0 - ZERO_TOLERANCE {
            (1.0 - t, t)
        } else {
            let theta = cos_theta.acos();
            let inv_sin = 1.0 / theta.sin();
            (((1.0 - t) * theta).sin() * inv_sin, (t * theta).sin() * inv_sin)
        };

        let blended = Self::new(
            self.component(0) * w0 + target.component(0) * w1,
            self.component(1) * w0 + target.component(1) * w1,
            self.component(2) * w0 + target.component(2) * w1,
            self.component(3) * w0 + target.component(3) * w1,
        );
        blended.normalize()
    }

    fn scaled(&self, s: f32) -> Self {
        Self::new(
            self.component(0) * s,
            self.component(1) * s,
            self.component(2) * s,
            self.component(3) * s,
        )
    }

    /// Component-wise comparison within `tolerance`.
    ///
    /// `q` and `-q` encode the same rotation but compare unequal here; the
    /// comparison is on stored components. See [`Quat::approx_eq_rotation`].
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (0..4).all(|i| is_approx_equals_with(self.component(i), other.component(i), tolerance))
    }

    /// Rotation comparison within `tolerance`: `q` and `-q` are equal.
    ///
    /// Matches component-wise against `other` or its negation, so a slerp
    /// that flipped `end` into the near hemisphere still compares equal to
    /// `end`.
    ///
    /// # Examples
    /// ```
    /// use srt_math::Quat;
    /// let q = Quat::new(0.0, 0.0, 0.6, 0.8);
    /// let flipped = Quat::new(0.0, 0.0, -0.6, -0.8);
    /// assert!(!q.approx_eq(&flipped, 1e-6));
    /// assert!(q.approx_eq_rotation(&flipped, 1e-6));
    /// ```
    pub fn approx_eq_rotation(&self, other: &Self, tolerance: f32) -> bool {
        self.approx_eq(other, tolerance) || self.approx_eq(&other.scaled(-1.0), tolerance)
    }

    /// Returns `true` when any component is NaN.
    pub fn is_nan(&self) -> bool {
        self.data.iter().any(|c| c.is_nan())
    }

    /// Converts the quaternion to a rotation matrix (column-major 4×4).
    pub fn to_mat4(&self) -> Mat4 {
        let q = self.normalize();
        let x = q.component(0);
        let y = q.component(1);
        let z = q.component(2);
        let w = q.component(3);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Quat> for [f32; 4] {
    fn from(value: Quat) -> Self {
        value.data
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
