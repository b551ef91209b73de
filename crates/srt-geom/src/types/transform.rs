// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cell::Cell;

use srt_math::{Mat4, Quat, Vec3, ZERO_TOLERANCE};
use tracing::trace;

use crate::error::GeomError;

/// Scale/rotation/translation placement of one spatial node, with a lazily
/// derived matrix.
///
/// Conventions:
/// - `scale` is non-uniform and applied first, then `rotation` (unit
///   quaternion), then `translation`.
/// - The matrix is `M = T * R * S` in the column-vector convention used by
///   [`Mat4`] (`S · R · T` when read with row vectors).
///
/// Caching:
/// - The matrix is stored in a two-state cache (`Valid` / `Dirty`). Every
///   mutator except [`Transform::set_identity`] marks it dirty; the next
///   [`Transform::matrix`] call recomputes it. Reading the matrix is therefore
///   a side-effecting read.
/// - The cache lives in a [`Cell`], which makes `Transform` `Send` but not
///   `Sync`: a shared reference can never reach a second thread, so the lazy
///   recompute cannot race. Wrap the value in a lock to share it.
///
/// Cloning copies the scale/rotation/translation only; the clone starts with
/// a dirty cache.
#[derive(Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "TransformFields", into = "TransformFields")
)]
pub struct Transform {
    scale: Vec3,
    rotation: Quat,
    translation: Vec3,
    cache: Cell<MatrixCache>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum MatrixCache {
    Valid(Mat4),
    Dirty,
}

/// The persisted form of a [`Transform`]: its fields in wire order.
///
/// The matrix is never part of this record; [`Transform::from_fields`]
/// rebuilds it eagerly.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "PascalCase")
)]
pub struct TransformFields {
    /// Per-axis scale (3 floats).
    pub scale: Vec3,
    /// Rotation quaternion `(x, y, z, w)` (4 floats).
    pub rotation: Quat,
    /// Translation (3 floats).
    pub translation: Vec3,
}

impl Transform {
    /// Identity transform (unit scale, no rotation, no translation) with a
    /// valid cache holding the identity matrix.
    pub const fn identity() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation: Quat::identity(),
            translation: Vec3::ZERO,
            cache: Cell::new(MatrixCache::Valid(Mat4::identity())),
        }
    }

    /// Creates a transform from components. The matrix is computed on first
    /// read.
    pub const fn new(scale: Vec3, rotation: Quat, translation: Vec3) -> Self {
        Self {
            scale,
            rotation,
            translation,
            cache: Cell::new(MatrixCache::Dirty),
        }
    }

    /// Creates a transform by decomposing `matrix`.
    pub fn from_matrix(matrix: &Mat4) -> Self {
        let (scale, rotation, translation) = matrix.decompose();
        Self::new(scale, rotation, translation)
    }

    /// Rebuilds a transform from its persisted fields, computing the matrix
    /// immediately so the result starts with a valid cache.
    pub fn from_fields(fields: TransformFields) -> Self {
        let transform = Self::new(fields.scale, fields.rotation, fields.translation);
        let matrix = transform.compose();
        trace!("transform loaded; matrix computed eagerly");
        transform.cache.set(MatrixCache::Valid(matrix));
        transform
    }

    /// Returns the persisted fields (scale, rotation, translation).
    pub fn to_fields(&self) -> TransformFields {
        TransformFields {
            scale: self.scale,
            rotation: self.rotation,
            translation: self.translation,
        }
    }

    /// Scale component.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Rotation component.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Translation component.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Replaces the scale.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.invalidate();
    }

    /// Replaces the rotation.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.invalidate();
    }

    /// Replaces the translation.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
        self.invalidate();
    }

    /// Replaces all three components.
    pub fn set(&mut self, scale: Vec3, rotation: Quat, translation: Vec3) {
        self.scale = scale;
        self.rotation = rotation;
        self.translation = translation;
        self.invalidate();
    }

    /// Replaces all three components with the decomposition of `matrix`.
    ///
    /// The stored matrix is recomposed from the decomposed parts on the next
    /// read rather than copied, so it is always a pure SRT matrix.
    pub fn set_from_matrix(&mut self, matrix: &Mat4) {
        let (scale, rotation, translation) = matrix.decompose();
        self.set(scale, rotation, translation);
    }

    /// Resets to identity and stores the identity matrix directly; the cache
    /// is valid immediately.
    pub fn set_identity(&mut self) {
        self.scale = Vec3::ONE;
        self.rotation = Quat::identity();
        self.translation = Vec3::ZERO;
        self.cache.set(MatrixCache::Valid(Mat4::identity()));
    }

    /// Returns `true` when the cached matrix is current.
    pub fn is_matrix_cached(&self) -> bool {
        matches!(self.cache.get(), MatrixCache::Valid(_))
    }

    /// Returns the column-major matrix for this transform.
    ///
    /// Recomputes and caches the matrix when the cache is dirty; otherwise
    /// returns the cached value unchanged, so repeated reads without an
    /// intervening mutation are bit-identical.
    pub fn matrix(&self) -> Mat4 {
        match self.cache.get() {
            MatrixCache::Valid(matrix) => matrix,
            MatrixCache::Dirty => {
                trace!("recomputing transform matrix");
                let matrix = self.compose();
                self.cache.set(MatrixCache::Valid(matrix));
                matrix
            }
        }
    }

    fn compose(&self) -> Mat4 {
        // M = T * R * S (column-major)
        let [sx, sy, sz] = self.scale.to_array();
        let [tx, ty, tz] = self.translation.to_array();
        Mat4::translation(tx, ty, tz)
            .multiply(&self.rotation.to_mat4())
            .multiply(&Mat4::scale(sx, sy, sz))
    }

    fn invalidate(&mut self) {
        self.cache.set(MatrixCache::Dirty);
    }

    /// Re-expresses this transform, given relative to `parent`, in the
    /// parent's own space (usually world space).
    ///
    /// - `scale' = parent.scale ⊙ scale`
    /// - `rotation' = parent.rotation * rotation` (rotates by `rotation`
    ///   first, then by `parent.rotation`)
    /// - `translation' = parent.rotation.rotate(translation ⊙ parent.scale) + parent.translation`
    ///
    /// The operation is not commutative: call it on the child with the
    /// parent as argument.
    ///
    /// # Examples
    /// ```
    /// use srt_geom::Transform;
    /// use srt_math::{Quat, Vec3};
    /// let parent = Transform::new(Vec3::ONE, Quat::identity(), Vec3::new(0.0, 5.0, 0.0));
    /// let mut child = Transform::new(Vec3::ONE, Quat::identity(), Vec3::new(1.0, 0.0, 0.0));
    /// child.combine_with_parent(&parent);
    /// assert_eq!(child.translation().to_array(), [1.0, 5.0, 0.0]);
    /// ```
    pub fn combine_with_parent(&mut self, parent: &Self) {
        let parent_scale = parent.scale;
        let parent_rotation = parent.rotation;
        let parent_translation = parent.translation;

        let local_translation = self.translation.mul_components(&parent_scale);
        self.scale = parent_scale.mul_components(&self.scale);
        self.rotation = parent_rotation.multiply(&self.rotation);
        self.translation = parent_rotation
            .rotate(&local_translation)
            .add(&parent_translation);
        self.invalidate();
    }

    /// Non-mutating form of [`Transform::combine_with_parent`].
    pub fn combined_with_parent(&self, parent: &Self) -> Self {
        let mut out = self.clone();
        out.combine_with_parent(parent);
        out
    }

    /// Sets this transform to the blend of `start` and `end` at `t`.
    ///
    /// Rotation uses shortest-arc slerp (unit result); scale and translation
    /// interpolate linearly. `t` is not clamped, values outside `[0, 1]`
    /// extrapolate.
    pub fn interpolate(&mut self, start: &Self, end: &Self, t: f32) {
        self.scale = start.scale.lerp(&end.scale, t);
        self.rotation = start.rotation.slerp(&end.rotation, t);
        self.translation = start.translation.lerp(&end.translation, t);
        self.invalidate();
    }

    /// Returns a new transform blended between `start` and `end` at `t`.
    pub fn interpolated(start: &Self, end: &Self, t: f32) -> Self {
        let mut out = Self::identity();
        out.interpolate(start, end, t);
        out
    }

    /// Transforms a point: scale, then rotate, then translate.
    ///
    /// Computed from the components without touching the cache; agrees with
    /// `self.matrix().transform_point(point)` up to rounding.
    pub fn transform_vector(&self, point: &Vec3) -> Vec3 {
        self.rotation
            .rotate(&point.mul_components(&self.scale))
            .add(&self.translation)
    }

    /// Rotated unit axis `index`: 0 = right (+X), 1 = up (+Y), 2 = forward
    /// (+Z). This is column `index` of `rotation().to_mat4()` in the
    /// column-vector convention (row `index` when read with row vectors).
    pub fn rotation_vector(&self, index: usize) -> Result<Vec3, GeomError> {
        const AXES: [Vec3; 3] = [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z];
        AXES.get(index)
            .map(|axis| self.rotation.rotate(axis))
            .ok_or(GeomError::IndexOutOfRange {
                index,
                len: AXES.len(),
            })
    }

    /// Compares scale, rotation and translation within `ZERO_TOLERANCE`.
    /// An absent comparand is never equal.
    pub fn equals(&self, other: Option<&Self>) -> bool {
        self.equals_with_tolerance(other, ZERO_TOLERANCE)
    }

    /// Compares scale and translation component-wise within `tolerance`.
    ///
    /// Rotations compare as rotations: `q` matches `q` or `-q`, since both
    /// encode the same orientation and shortest-arc interpolation may land on
    /// either. The cached matrix is not compared.
    pub fn equals_with_tolerance(&self, other: Option<&Self>, tolerance: f32) -> bool {
        other.is_some_and(|other| {
            self.scale.approx_eq(&other.scale, tolerance)
                && self.rotation.approx_eq_rotation(&other.rotation, tolerance)
                && self.translation.approx_eq(&other.translation, tolerance)
        })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Clone for Transform {
    fn clone(&self) -> Self {
        Self::new(self.scale, self.rotation, self.translation)
    }
}

impl From<TransformFields> for Transform {
    fn from(fields: TransformFields) -> Self {
        Self::from_fields(fields)
    }
}

impl From<Transform> for TransformFields {
    fn from(transform: Transform) -> Self {
        transform.to_fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_starts_dirty() {
        let original = Transform::identity();
        assert!(original.is_matrix_cached());
        let copy = original.clone();
        assert!(!copy.is_matrix_cached());
        assert_eq!(copy.matrix(), Mat4::identity());
        assert!(copy.is_matrix_cached());
    }

    #[test]
    fn mutators_mark_dirty() {
        let mut t = Transform::identity();
        t.set_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.cache.get(), MatrixCache::Dirty);
        let _ = t.matrix();
        t.set_scale(Vec3::ONE);
        assert_eq!(t.cache.get(), MatrixCache::Dirty);
        let _ = t.matrix();
        t.set_rotation(Quat::identity());
        assert_eq!(t.cache.get(), MatrixCache::Dirty);
    }

    #[test]
    fn from_fields_is_eager() {
        let t = Transform::from_fields(TransformFields {
            scale: Vec3::new(2.0, 2.0, 2.0),
            rotation: Quat::identity(),
            translation: Vec3::new(1.0, 0.0, 0.0),
        });
        assert!(t.is_matrix_cached());
        assert_eq!(
            t.matrix().transform_point(&Vec3::UNIT_X).to_array(),
            [3.0, 0.0, 0.0]
        );
    }
}
