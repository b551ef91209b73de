// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
use srt_codec::{decode_transform, decode_triad, encode_transform, encode_triad, CodecError};
use srt_geom::{Transform, Triad};
use srt_math::{Quat, Vec3};

const ONE: &str = "fa3f800000";
const ZERO: &str = "fa00000000";

#[test]
fn identity_transform_golden_bytes() {
    let bytes = encode_transform(&Transform::identity());
    let expected = [
        "83",
        "83", ONE, ONE, ONE,
        "84", ZERO, ZERO, ZERO, ONE,
        "83", ZERO, ZERO, ZERO,
    ]
    .concat();
    assert_eq!(hex::encode(bytes), expected);
}

#[test]
fn transform_roundtrip_restores_valid_cache() {
    let t = Transform::new(
        Vec3::new(2.0, 0.5, 1.0),
        Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 0.75),
        Vec3::new(-4.0, 3.5, 12.0),
    );
    let decoded = decode_transform(&encode_transform(&t)).expect("decode");
    assert!(decoded.is_matrix_cached());
    assert!(decoded.equals(Some(&t)));
    assert_eq!(decoded.matrix(), t.matrix());
}

#[test]
fn transform_encoding_ignores_cache_state() {
    let t = Transform::new(Vec3::ONE, Quat::identity(), Vec3::UNIT_X);
    let cold = encode_transform(&t);
    let _ = t.matrix();
    assert_eq!(encode_transform(&t), cold);
}

#[test]
fn triad_roundtrip() {
    let triad = Triad::from_y_complement_basis(Vec3::new(0.0, 0.6, 0.8));
    let decoded = decode_triad(&encode_triad(&triad)).expect("decode");
    assert_eq!(decoded, triad);
}

#[test]
fn triad_golden_bytes() {
    let bytes = encode_triad(&Triad::UNIT_AXES);
    let expected = [
        "83",
        "83", ONE, ZERO, ZERO,
        "83", ZERO, ONE, ZERO,
        "83", ZERO, ZERO, ONE,
    ]
    .concat();
    assert_eq!(hex::encode(bytes), expected);
}

#[test]
fn trailing_bytes_rejected() {
    let mut bytes = encode_triad(&Triad::UNIT_AXES);
    bytes.push(0x00);
    assert!(matches!(
        decode_triad(&bytes),
        Err(CodecError::TrailingBytes("Triad"))
    ));
}

#[test]
fn triad_bytes_are_not_a_transform() {
    let bytes = encode_triad(&Triad::UNIT_AXES);
    // Second field of a transform must be a 4-element quaternion.
    assert!(matches!(
        decode_transform(&bytes),
        Err(CodecError::Arity {
            record: "Quat",
            expected: 4,
            actual: 3
        })
    ));
}

#[test]
fn truncated_input_is_a_decode_error() {
    let bytes = encode_transform(&Transform::identity());
    assert!(matches!(
        decode_transform(&bytes[..bytes.len() - 2]),
        Err(CodecError::Decode(_))
    ));
}
