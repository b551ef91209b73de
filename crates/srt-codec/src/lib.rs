// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! CBOR codec for SRT field lists.
//!
//! This crate provides encode/decode for:
//! - `Transform`: `[Scale, Rotation, Translation]`
//! - `Triad`: `[XAxis, YAxis, ZAxis]`
//!
//! # Design
//!
//! Serialization is kept out of `srt-geom` so the geometry types stay free of
//! wire concerns. Decoding a transform rebuilds its matrix eagerly.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

mod cbor;
mod error;

pub use cbor::{decode_transform, decode_triad, encode_transform, encode_triad};
pub use error::CodecError;
