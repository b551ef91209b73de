// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! CBOR encoding and decoding for transform and triad field lists.
//!
//! Each record is a definite-length array of its fields in wire order; each
//! vector is a definite-length array of floats. Floats are written as `f32`
//! and accepted as `f32` or `f64`.

use minicbor::{Decoder, Encoder};
use srt_geom::{Transform, TransformFields, Triad};
use srt_math::{Quat, Vec3};

use crate::error::CodecError;

const TRANSFORM_FIELDS: u64 = 3;
const TRIAD_FIELDS: u64 = 3;

// ============================================================================
// Helpers
// ============================================================================

fn expect_array(
    d: &mut Decoder<'_>,
    record: &'static str,
    expected: u64,
) -> Result<(), CodecError> {
    let actual = d.array()?.ok_or(CodecError::IndefiniteArray(record))?;
    if actual != expected {
        return Err(CodecError::Arity {
            record,
            expected,
            actual,
        });
    }
    Ok(())
}

fn decode_robust_f32(d: &mut Decoder<'_>) -> Result<f32, CodecError> {
    match d.datatype()? {
        minicbor::data::Type::F32 => Ok(d.f32()?),
        #[allow(clippy::cast_possible_truncation)]
        minicbor::data::Type::F64 => Ok(d.f64()? as f32),
        t => Err(CodecError::NotAFloat(format!("{t:?}"))),
    }
}

fn encode_f32s<W: minicbor::encode::Write>(
    e: &mut Encoder<W>,
    values: &[f32],
) -> Result<(), minicbor::encode::Error<W::Error>> {
    e.array(values.len() as u64)?;
    for v in values {
        e.f32(*v)?;
    }
    Ok(())
}

// ============================================================================
// Vec3 / Quat
// ============================================================================

fn encode_vec3<W: minicbor::encode::Write>(
    e: &mut Encoder<W>,
    v: &Vec3,
) -> Result<(), minicbor::encode::Error<W::Error>> {
    encode_f32s(e, &v.to_array())
}

fn decode_vec3(d: &mut Decoder<'_>) -> Result<Vec3, CodecError> {
    expect_array(d, "Vec3", 3)?;
    Ok(Vec3::new(
        decode_robust_f32(d)?,
        decode_robust_f32(d)?,
        decode_robust_f32(d)?,
    ))
}

fn encode_quat<W: minicbor::encode::Write>(
    e: &mut Encoder<W>,
    q: &Quat,
) -> Result<(), minicbor::encode::Error<W::Error>> {
    encode_f32s(e, &q.to_array())
}

fn decode_quat(d: &mut Decoder<'_>) -> Result<Quat, CodecError> {
    expect_array(d, "Quat", 4)?;
    Ok(Quat::new(
        decode_robust_f32(d)?,
        decode_robust_f32(d)?,
        decode_robust_f32(d)?,
        decode_robust_f32(d)?,
    ))
}

// ============================================================================
// Transform
// ============================================================================

fn encode_transform_inner<W: minicbor::encode::Write>(
    e: &mut Encoder<W>,
    transform: &Transform,
) -> Result<(), minicbor::encode::Error<W::Error>> {
    let fields = transform.to_fields();
    e.array(TRANSFORM_FIELDS)?;
    encode_vec3(e, &fields.scale)?;
    encode_quat(e, &fields.rotation)?;
    encode_vec3(e, &fields.translation)?;
    Ok(())
}

fn decode_transform_inner(d: &mut Decoder<'_>) -> Result<Transform, CodecError> {
    expect_array(d, "Transform", TRANSFORM_FIELDS)?;
    let fields = TransformFields {
        scale: decode_vec3(d)?,
        rotation: decode_quat(d)?,
        translation: decode_vec3(d)?,
    };
    Ok(Transform::from_fields(fields))
}

// ============================================================================
// Triad
// ============================================================================

fn encode_triad_inner<W: minicbor::encode::Write>(
    e: &mut Encoder<W>,
    triad: &Triad,
) -> Result<(), minicbor::encode::Error<W::Error>> {
    e.array(TRIAD_FIELDS)?;
    encode_vec3(e, &triad.x_axis)?;
    encode_vec3(e, &triad.y_axis)?;
    encode_vec3(e, &triad.z_axis)?;
    Ok(())
}

fn decode_triad_inner(d: &mut Decoder<'_>) -> Result<Triad, CodecError> {
    expect_array(d, "Triad", TRIAD_FIELDS)?;
    Ok(Triad::new(decode_vec3(d)?, decode_vec3(d)?, decode_vec3(d)?))
}

// ============================================================================
// Public encode/decode functions
// ============================================================================

/// Encode a Transform's scale, rotation and translation to CBOR bytes.
///
/// The cached matrix is never written.
pub fn encode_transform(transform: &Transform) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut encoder = Encoder::new(&mut buf);
    #[allow(clippy::expect_used)]
    encode_transform_inner(&mut encoder, transform).expect("encoding should not fail");
    buf
}

/// Decode a Transform from CBOR bytes.
///
/// The matrix is computed before returning, so the result starts with a
/// valid cache.
pub fn decode_transform(bytes: &[u8]) -> Result<Transform, CodecError> {
    let mut decoder = Decoder::new(bytes);
    let transform = decode_transform_inner(&mut decoder)?;
    if decoder.position() < bytes.len() {
        return Err(CodecError::TrailingBytes("Transform"));
    }
    Ok(transform)
}

/// Encode a Triad's three axes to CBOR bytes.
pub fn encode_triad(triad: &Triad) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut encoder = Encoder::new(&mut buf);
    #[allow(clippy::expect_used)]
    encode_triad_inner(&mut encoder, triad).expect("encoding should not fail");
    buf
}

/// Decode a Triad from CBOR bytes.
pub fn decode_triad(bytes: &[u8]) -> Result<Triad, CodecError> {
    let mut decoder = Decoder::new(bytes);
    let triad = decode_triad_inner(&mut decoder)?;
    if decoder.position() < bytes.len() {
        return Err(CodecError::TrailingBytes("Triad"));
    }
    Ok(triad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_roundtrip() {
        let v = Vec3::new(1.5, -2.0, 1e-3);
        let mut buf = Vec::new();
        let mut encoder = Encoder::new(&mut buf);
        encode_vec3(&mut encoder, &v).unwrap();

        let mut decoder = Decoder::new(&buf);
        assert_eq!(decode_vec3(&mut decoder).unwrap(), v);
    }

    #[test]
    fn test_quat_accepts_f64_components() {
        let mut buf = Vec::new();
        let mut encoder = Encoder::new(&mut buf);
        encoder.array(4).unwrap();
        for c in [0.0_f64, 0.0, 0.0, 1.0] {
            encoder.f64(c).unwrap();
        }

        let mut decoder = Decoder::new(&buf);
        assert_eq!(decode_quat(&mut decoder).unwrap(), Quat::identity());
    }

    #[test]
    fn test_vec3_wrong_arity() {
        let mut buf = Vec::new();
        let mut encoder = Encoder::new(&mut buf);
        encode_f32s(&mut encoder, &[1.0, 2.0]).unwrap();

        let mut decoder = Decoder::new(&buf);
        let err = decode_vec3(&mut decoder).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Arity {
                record: "Vec3",
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_non_float_component_rejected() {
        let mut buf = Vec::new();
        let mut encoder = Encoder::new(&mut buf);
        encoder.array(3).unwrap();
        encoder.f32(1.0).unwrap();
        encoder.str("two").unwrap();
        encoder.f32(3.0).unwrap();

        let mut decoder = Decoder::new(&buf);
        assert!(matches!(
            decode_vec3(&mut decoder),
            Err(CodecError::NotAFloat(_))
        ));
    }

    #[test]
    fn test_indefinite_array_rejected() {
        let mut buf = Vec::new();
        let mut encoder = Encoder::new(&mut buf);
        encoder.begin_array().unwrap();
        encoder.f32(1.0).unwrap();
        encoder.end().unwrap();

        let mut decoder = Decoder::new(&buf);
        assert!(matches!(
            decode_vec3(&mut decoder),
            Err(CodecError::IndefiniteArray("Vec3"))
        ));
    }
}
