// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::numeric::{is_approx_equals_with, ZERO_TOLERANCE};

/// 3D vector used for scale, translation, and basis axes.
///
/// * Components may represent points, directions, or per-axis scale factors
///   depending on the calling context.
/// * Arithmetic uses `f32`; NaN and infinities propagate without being
///   rejected.
/// * Use [`crate::Mat4::transform_point`] for points (homogeneous `w = 1`),
///   [`crate::Mat4::transform_direction`] for directions (`w = 0`) and
///   [`crate::Mat4::transform_normal`] for surface normals.
/// * `#[repr(C)]` with no padding: three consecutive `f32`s.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 3]", into = "[f32; 3]")
)]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components one; the identity scale.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) + other.component(0),
            self.component(1) + other.component(1),
            self.component(2) + other.component(2),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) - other.component(0),
            self.component(1) - other.component(1),
            self.component(2) - other.component(2),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.component(0) * scalar,
            self.component(1) * scalar,
            self.component(2) * scalar,
        )
    }

    /// Component-wise (Hadamard) product; used to combine non-uniform scales.
    pub fn mul_components(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) * other.component(0),
            self.component(1) * other.component(1),
            self.component(2) * other.component(2),
        )
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Normalises the vector, returning the zero vector if length ≤ `ZERO_TOLERANCE`.
    ///
    /// The threshold is a degeneracy cut-off rather than a precision bound:
    /// near-zero vectors normalise to zero so callers can detect them.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= ZERO_TOLERANCE {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Linear interpolation `self + (other - self) * t`. `t` is not clamped.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.add(&other.sub(self).scale(t))
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (0..3).all(|i| is_approx_equals_with(self.component(i), other.component(i), tolerance))
    }

    /// Returns `true` when the length is one within `ZERO_TOLERANCE`.
    pub fn is_normalized(&self) -> bool {
        is_approx_equals_with(self.length_squared(), 1.0, ZERO_TOLERANCE)
    }

    /// Returns `true` when every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|c| *c == 0.0)
    }

    /// Returns `true` when any component is NaN.
    pub fn is_nan(&self) -> bool {
        self.data.iter().any(|c| c.is_nan())
    }

    /// Returns `true` when any component is positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        self.data.iter().any(|c| c.is_infinite())
    }

    /// Builds two unit vectors `(u, w)` that complete `self` to an
    /// orthonormal basis.
    ///
    /// `self` is expected to be unit length. `u` is taken perpendicular to
    /// `self` in the plane of its two dominant components and `w = self × u`,
    /// so `(u, w, self)` is right-handed. The choice is deterministic for a
    /// given input. A zero input yields two zero vectors.
    ///
    /// # Examples
    /// ```
    /// use srt_math::Vec3;
    /// let (u, w) = Vec3::UNIT_Z.complement_basis();
    /// assert_eq!(u.cross(&w).to_array(), [0.0, 0.0, 1.0]);
    /// ```
    pub fn complement_basis(&self) -> (Self, Self) {
        let [x, y, z] = self.data;
        let u = if x.abs() >= y.abs() {
            let len_sq = x * x + z * z;
            if len_sq == 0.0 {
                return (Self::ZERO, Self::ZERO);
            }
            let inv = 1.0 / len_sq.sqrt();
            Self::new(-z * inv, 0.0, x * inv)
        } else {
            let len_sq = y * y + z * z;
            let inv = 1.0 / len_sq.sqrt();
            Self::new(0.0, z * inv, -y * inv)
        };
        let w = self.cross(&u);
        (u, w)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3::sub(&self, &rhs)
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl core::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl core::ops::Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl core::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec3::add(self, &rhs);
    }
}

impl core::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec3::sub(self, &rhs);
    }
}

impl core::ops::MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}
