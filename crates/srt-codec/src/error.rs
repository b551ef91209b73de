// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors produced while decoding a field list.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The underlying CBOR was malformed or ended early.
    #[error("malformed CBOR: {0}")]
    Decode(#[from] minicbor::decode::Error),
    /// A record or vector carried an indefinite-length array.
    #[error("{0} must be a definite-length array")]
    IndefiniteArray(&'static str),
    /// A record or vector had the wrong number of elements.
    #[error("{record} expected {expected} fields, got {actual}")]
    Arity {
        /// Name of the record being decoded.
        record: &'static str,
        /// Required element count.
        expected: u64,
        /// Element count found on the wire.
        actual: u64,
    },
    /// A vector component was not a floating-point value.
    #[error("expected float, got {0}")]
    NotAFloat(String),
    /// Bytes remained after the top-level record.
    #[error("trailing bytes in {0}")]
    TrailingBytes(&'static str),
}
