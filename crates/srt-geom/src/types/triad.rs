// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};
use srt_math::{Mat4, Quat, Vec3, ZERO_TOLERANCE};

use crate::error::GeomError;

/// Three axis vectors forming a coordinate frame.
///
/// Axes are addressable as `0 = X`, `1 = Y`, `2 = Z`. Nothing is enforced at
/// construction: non-orthogonal, non-unit, zero-length and non-finite axes
/// are all representable and can be detected with the query methods.
///
/// Layout: `#[repr(C)]`, three consecutive [`Vec3`]s with no padding
/// ([`Triad::SIZE_IN_BYTES`]), so it can be cast to bytes with `bytemuck`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "PascalCase")
)]
pub struct Triad {
    /// First axis (index 0).
    pub x_axis: Vec3,
    /// Second axis (index 1).
    pub y_axis: Vec3,
    /// Third axis (index 2).
    pub z_axis: Vec3,
}

const _: () = assert!(core::mem::size_of::<Triad>() == 36);

impl Triad {
    /// The canonical right-handed unit basis.
    pub const UNIT_AXES: Self = Self::new(Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z);

    /// Size of the in-memory representation in bytes.
    pub const SIZE_IN_BYTES: usize = core::mem::size_of::<Self>();

    /// Number of axes.
    pub const AXIS_COUNT: usize = 3;

    /// Creates a triad from three explicit axes.
    pub const fn new(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        Self {
            x_axis,
            y_axis,
            z_axis,
        }
    }

    /// Builds a right-handed basis around `x_axis`, which should already be
    /// unit length.
    pub fn from_x_complement_basis(x_axis: Vec3) -> Self {
        let (u, w) = x_axis.complement_basis();
        Self::new(x_axis, u, w)
    }

    /// Builds a right-handed basis around `y_axis`, which should already be
    /// unit length.
    pub fn from_y_complement_basis(y_axis: Vec3) -> Self {
        let (u, w) = y_axis.complement_basis();
        Self::new(w, y_axis, u)
    }

    /// Builds a right-handed basis around `z_axis`, which should already be
    /// unit length. Typical use: a full frame from a surface normal.
    ///
    /// # Examples
    /// ```
    /// use srt_geom::Triad;
    /// use srt_math::Vec3;
    /// let frame = Triad::from_z_complement_basis(Vec3::UNIT_Z);
    /// assert!(frame.is_normalized());
    /// assert!((frame.compute_determinant() - 1.0).abs() < 1e-6);
    /// ```
    pub fn from_z_complement_basis(z_axis: Vec3) -> Self {
        let (u, w) = z_axis.complement_basis();
        Self::new(u, w, z_axis)
    }

    /// Returns the axes as an array in index order.
    pub fn to_array(self) -> [Vec3; 3] {
        bytemuck::cast(self)
    }

    /// Axis at `index`.
    pub fn axis(&self, index: usize) -> Result<Vec3, GeomError> {
        self.as_axes()
            .get(index)
            .copied()
            .ok_or(GeomError::IndexOutOfRange {
                index,
                len: Self::AXIS_COUNT,
            })
    }

    /// Replaces the axis at `index`.
    pub fn set_axis(&mut self, index: usize, axis: Vec3) -> Result<(), GeomError> {
        let slot = self
            .as_axes_mut()
            .get_mut(index)
            .ok_or(GeomError::IndexOutOfRange {
                index,
                len: Self::AXIS_COUNT,
            })?;
        *slot = axis;
        Ok(())
    }

    fn as_axes(&self) -> &[Vec3; 3] {
        bytemuck::cast_ref(self)
    }

    fn as_axes_mut(&mut self) -> &mut [Vec3; 3] {
        bytemuck::cast_mut(self)
    }

    /// Rotates every axis by `rotation`. Angles between axes are preserved.
    pub fn transform_by_rotation(&self, rotation: &Quat) -> Self {
        Self::new(
            rotation.rotate(&self.x_axis),
            rotation.rotate(&self.y_axis),
            rotation.rotate(&self.z_axis),
        )
    }

    /// Transforms every axis as a normal by a scale/rotation matrix
    /// (inverse-transpose of the upper 3×3; translation ignored).
    ///
    /// Axes are not renormalised; with scale in the matrix call
    /// [`Triad::normalize`] afterwards.
    pub fn transform_by_matrix(&self, matrix: &Mat4) -> Self {
        Self::new(
            matrix.transform_normal(&self.x_axis),
            matrix.transform_normal(&self.y_axis),
            matrix.transform_normal(&self.z_axis),
        )
    }

    /// Unit-normalises each axis in place. Does not re-orthogonalise.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns a copy with each axis unit-normalised independently.
    pub fn normalized(&self) -> Self {
        Self::new(
            self.x_axis.normalize(),
            self.y_axis.normalize(),
            self.z_axis.normalize(),
        )
    }

    /// Determinant of the 3×3 matrix whose rows are X, Y, Z.
    ///
    /// Positive for a right-handed basis, negative for left-handed, and near
    /// zero when the axes are linearly dependent.
    pub fn compute_determinant(&self) -> f32 {
        let [a, b, c] = self.x_axis.to_array();
        let [d, e, f] = self.y_axis.to_array();
        let [g, h, i] = self.z_axis.to_array();
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// All three axes are unit length within `ZERO_TOLERANCE`.
    pub fn is_normalized(&self) -> bool {
        self.as_axes().iter().all(Vec3::is_normalized)
    }

    /// Any axis is exactly the zero vector.
    pub fn is_degenerate(&self) -> bool {
        self.as_axes().iter().any(Vec3::is_zero)
    }

    /// Any component is NaN.
    pub fn is_nan(&self) -> bool {
        self.as_axes().iter().any(Vec3::is_nan)
    }

    /// Any component is positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        self.as_axes().iter().any(Vec3::is_infinite)
    }

    /// Axis-wise comparison within `ZERO_TOLERANCE`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, ZERO_TOLERANCE)
    }

    /// Axis-wise comparison within `tolerance`.
    pub fn approx_eq_with(&self, other: &Self, tolerance: f32) -> bool {
        self.as_axes()
            .iter()
            .zip(other.as_axes().iter())
            .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

impl Default for Triad {
    fn default() -> Self {
        Self::UNIT_AXES
    }
}

impl From<[Vec3; 3]> for Triad {
    fn from(axes: [Vec3; 3]) -> Self {
        bytemuck::cast(axes)
    }
}

/// Panics on an index outside `0..3`, like slice indexing. Use
/// [`Triad::axis`] for a checked lookup.
impl Index<usize> for Triad {
    type Output = Vec3;

    fn index(&self, index: usize) -> &Vec3 {
        &self.as_axes()[index]
    }
}

impl IndexMut<usize> for Triad {
    fn index_mut(&mut self, index: usize) -> &mut Vec3 {
        &mut self.as_axes_mut()[index]
    }
}
