// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Tolerance constants and scalar helpers shared by the vector types and the
//! transform/triad layer.
//!
//! Comparison helpers are generic over [`Real`] so the same predicate serves
//! `f32` geometry and `f64` bookkeeping. Clamping works on anything
//! `PartialOrd`, integers included.
//!
//! Tolerance contract:
//! - [`ZERO_TOLERANCE`] (`1e-6`) is the engine-wide "close to zero" threshold
//!   and the default for every approximate comparison in this workspace.
//! - [`TIGHT_ZERO_TOLERANCE`] (`1e-12`) is reserved for `f64` callers that
//!   need a stricter bound.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};
use std::f32::consts::TAU;

use tracing::debug;

/// Standard tolerance for approximate comparisons.
pub const ZERO_TOLERANCE: f32 = 1e-6;

/// Tight tolerance for high-precision (`f64`) comparisons.
pub const TIGHT_ZERO_TOLERANCE: f64 = 1e-12;

/// Smallest positive representable `f32` (the lowest subnormal).
pub const EPSILON: f32 = f32::from_bits(1);

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f32 = TAU / 360.0;

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f32 = 360.0 / TAU;

/// Floating-point scalar accepted by the tolerance helpers.
///
/// Implemented for `f32` and `f64`. Arithmetic operators are required via the
/// standard operator traits so generic code can use `+`, `-`, `*`, `/` and
/// unary `-` directly.
pub trait Real:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Default tolerance for this type (`1e-6`).
    const ZERO_TOLERANCE: Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root; negative inputs yield NaN.
    fn sqrt(self) -> Self;
}

macro_rules! impl_real {
    ($t:ty) => {
        impl Real for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const ZERO_TOLERANCE: Self = 1e-6;

            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);

/// Returns `true` when `|a - b| <= ZERO_TOLERANCE`.
///
/// # Examples
/// ```
/// use srt_math::numeric::is_approx_equals;
/// assert!(is_approx_equals(1.000_000_1, 1.000_000_2));
/// assert!(!is_approx_equals(1.0, 1.1));
/// ```
pub fn is_approx_equals<T: Real>(a: T, b: T) -> bool {
    is_approx_equals_with(a, b, T::ZERO_TOLERANCE)
}

/// Returns `true` when `|a - b| <= tolerance`. NaN never compares equal.
pub fn is_approx_equals_with<T: Real>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() <= tolerance
}

/// Returns `true` when `|value| <= ZERO_TOLERANCE`.
pub fn is_approx_zero<T: Real>(value: T) -> bool {
    value.abs() <= T::ZERO_TOLERANCE
}

/// Clamps `value` to `[min, max]`.
///
/// `max` is checked before `min`, so an inverted range (`min > max`) yields
/// `min`. Unlike `Ord::clamp` this never panics.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let upper = if value > max { max } else { value };
    if upper < min {
        min
    } else {
        upper
    }
}

/// Clamps an integer into the byte range `[0, 255]`.
pub fn clamp_to_byte(value: i32) -> u8 {
    u8::try_from(clamp(value, 0, 255)).unwrap_or(u8::MAX)
}

/// Clamps `value` to `[min, max]` and rounds to the nearest integral value,
/// ties to even.
///
/// NaN maps to `0`; positive infinity maps to `max` and negative infinity to
/// `min`.
///
/// # Examples
/// ```
/// use srt_math::numeric::clamp_and_round;
/// assert_eq!(clamp_and_round(f64::NAN, 0.0, 10.0), 0.0);
/// assert_eq!(clamp_and_round(f64::INFINITY, 0.0, 10.0), 10.0);
/// assert_eq!(clamp_and_round(2.5, 0.0, 10.0), 2.0);
/// ```
pub fn clamp_and_round(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { max } else { min };
    }
    clamp(value, min, max).round_ties_even()
}

/// Inclusive range test: `min <= value <= max`.
pub fn in_interval<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * DEG_TO_RAD
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * RAD_TO_DEG
}

/// Real roots of `a·x² + b·x + c = 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum QuadraticRoots<T> {
    /// Positive discriminant: two distinct roots, `+√d` branch first.
    Two(T, T),
    /// Zero discriminant (or a linear equation): one repeated root.
    One(T),
    /// Negative discriminant, or no solution of the degenerate equation.
    None,
}

impl<T: Real> QuadraticRoots<T> {
    /// Returns `true` when at least one real root exists.
    pub fn has_real_roots(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns both output slots: `(r1, r2)`, `(r, r)` for a repeated root,
    /// and `(0, 0)` when there is no real solution.
    pub fn roots(&self) -> (T, T) {
        match *self {
            Self::Two(r1, r2) => (r1, r2),
            Self::One(r) => (r, r),
            Self::None => (T::ZERO, T::ZERO),
        }
    }
}

/// Solves `a·x² + b·x + c = 0` over the reals.
///
/// The discriminant `b² − 4ac` selects the result: positive gives two roots,
/// exactly zero gives one repeated root, negative gives
/// [`QuadraticRoots::None`]. When `a == 0` the equation is solved as the
/// linear `b·x + c = 0` instead of dividing by zero.
///
/// # Examples
/// ```
/// use srt_math::numeric::{solve_quadratic, QuadraticRoots};
/// assert_eq!(solve_quadratic(1.0_f64, -2.0, 1.0), QuadraticRoots::One(1.0));
/// assert!(!solve_quadratic(1.0_f64, 0.0, 1.0).has_real_roots());
/// ```
pub fn solve_quadratic<T: Real>(a: T, b: T, c: T) -> QuadraticRoots<T> {
    let two = T::ONE + T::ONE;
    if a == T::ZERO {
        debug!(?b, ?c, "quadratic with zero leading coefficient; solving linearly");
        if b == T::ZERO {
            return QuadraticRoots::None;
        }
        return QuadraticRoots::One(-c / b);
    }

    let discriminant = b * b - two * two * a * c;
    if discriminant > T::ZERO {
        let root = discriminant.sqrt();
        let denom = two * a;
        QuadraticRoots::Two((-b + root) / denom, (-b - root) / denom)
    } else if discriminant == T::ZERO {
        QuadraticRoots::One(-b / (two * a))
    } else {
        debug!(?a, ?b, ?c, ?discriminant, "quadratic has no real roots");
        QuadraticRoots::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_inverted_range_yields_min() {
        assert_eq!(clamp(5, 10, 0), 10);
        assert_eq!(clamp(-5, 10, 0), 10);
        assert_eq!(clamp(5.0_f32, 10.0, 0.0), 10.0);
    }

    #[test]
    fn clamp_to_byte_saturates() {
        assert_eq!(clamp_to_byte(-12), 0);
        assert_eq!(clamp_to_byte(128), 128);
        assert_eq!(clamp_to_byte(4096), 255);
    }

    #[test]
    fn epsilon_is_smallest_positive() {
        assert!(EPSILON > 0.0);
        assert_eq!(EPSILON / 2.0, 0.0);
    }

    #[test]
    fn linear_fallback_when_leading_coefficient_is_zero() {
        assert_eq!(solve_quadratic(0.0_f64, 2.0, -4.0), QuadraticRoots::One(2.0));
        assert_eq!(solve_quadratic(0.0_f64, 0.0, 1.0), QuadraticRoots::None);
    }
}
