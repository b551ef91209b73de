// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised by indexed access on geometry types.
///
/// These are programmer errors: the caller is expected to validate indices
/// beforehand. Numeric problems (NaN, infinities, degenerate axes) are never
/// reported here; they propagate through arithmetic and are detected with the
/// query predicates instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// An axis or row index fell outside `0..len`.
    #[error("index {index} out of range (expected 0..{len})")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of addressable entries.
        len: usize,
    },
}
