// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! srt-math: scalar tolerance helpers and the vector, quaternion and matrix
//! primitives consumed by the SRT transform layer.
//!
//! All geometry is `f32`. Non-finite values are never rejected; they flow
//! through arithmetic so callers can detect them with the `is_nan` /
//! `is_infinite` queries.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

/// Tolerance constants, approximate comparisons, clamping and the quadratic
/// solver.
pub mod numeric;

mod mat4;
mod quat;
mod vec3;

pub use mat4::Mat4;
pub use numeric::{
    clamp, clamp_and_round, clamp_to_byte, deg_to_rad, in_interval, is_approx_equals,
    is_approx_equals_with, is_approx_zero, rad_to_deg, solve_quadratic, QuadraticRoots, Real,
    DEG_TO_RAD, EPSILON, RAD_TO_DEG, TIGHT_ZERO_TOLERANCE, ZERO_TOLERANCE,
};
pub use quat::Quat;
pub use vec3::Vec3;
