// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types: SRT transforms and three-axis frames.
//!
//! Notes:
//! - Matrices follow the column-vector convention of `srt_math::Mat4`.
//! - Approximate comparisons default to `srt_math::ZERO_TOLERANCE`.

#[doc = "Scale/rotation/translation transforms with a lazily cached matrix."]
pub mod transform;
#[doc = "Three-axis coordinate frames and complement-basis construction."]
pub mod triad;
