// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![doc = r"Spatial placement primitives.

This crate provides:
- `Transform`: scale, rotation and translation of one node, a lazily cached
  4×4 matrix, parent combination and interpolation.
- `Triad`: three-axis coordinate frames, built from explicit axes or from a
  single axis via complement-basis construction.

Design notes:
- A `Transform` never references its parent; combination takes the parent's
  current values as a one-shot input. Walking a hierarchy is the caller's job.
- Float32 throughout; NaN and infinities propagate instead of being rejected.
- Out-of-range axis/row indices are the only reported errors (`GeomError`).
"]

mod error;
/// Foundational geometric types.
pub mod types;

pub use error::GeomError;
pub use types::transform::{Transform, TransformFields};
pub use types::triad::Triad;
