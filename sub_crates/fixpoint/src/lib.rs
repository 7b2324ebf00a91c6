//! Conversion between `f32` and a self-scaling 32-bit fixed point format,
//! done entirely with bit manipulation of the float's fields.
//!
//! A `FixedPoint` is a raw `i32` plus its own scaling exponent: it
//! represents `value / 2^scaling`.  `to_fixed_point()` picks the scaling per
//! value, as large as it can be (for precision) while keeping the shifted
//! significand inside an `i32`.  The scaling never exceeds 30, which leaves
//! room for the sign bit and one guard bit.
//!
//! Conversions truncate rather than round.  Magnitudes that don't fit in
//! the format saturate to `FixedPoint::MAX` or `FixedPoint::MIN`.
//!
//! Warning: NaN, infinity and subnormal floats are _not_ supported.  They
//! convert without panicking, but to values that are meaningless.

#![allow(clippy::cast_lossless)]

pub mod arith;
pub mod layout;

use std::fmt;

pub use crate::arith::multiply;

use crate::layout::{
    compose, count_used_bits_from_lsb, shift_bits, FloatBits, EXPONENT_BIAS, MANTISSA_BITS,
    MAX_SCALING, MAX_VALUE, MIN_VALUE,
};

/// A fixed point number that carries its own scaling.
///
/// Two values with different scalings are not directly comparable: their
/// fields have to be compared after decoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FixedPoint {
    /// Raw integer representation.
    pub value: i32,
    /// Exponent such that the represented number is `value / 2^scaling`.
    pub scaling: i32,
}

impl FixedPoint {
    pub const ZERO: FixedPoint = FixedPoint::new(0, 0);

    /// Saturation target for large positive inputs.
    pub const MAX: FixedPoint = FixedPoint::new(MAX_VALUE, 0);

    /// Saturation target for large negative inputs.
    pub const MIN: FixedPoint = FixedPoint::new(MIN_VALUE, 0);

    #[inline]
    pub const fn new(value: i32, scaling: i32) -> FixedPoint {
        FixedPoint { value, scaling }
    }
}

impl Default for FixedPoint {
    fn default() -> FixedPoint {
        FixedPoint::ZERO
    }
}

impl From<f32> for FixedPoint {
    fn from(x: f32) -> FixedPoint {
        to_fixed_point(x)
    }
}

impl From<FixedPoint> for f32 {
    fn from(x: FixedPoint) -> f32 {
        from_fixed_point(x)
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", from_fixed_point(*self))
    }
}

/// Converts a float to fixed point, choosing the scaling that keeps the
/// most precision.
///
/// The scaling is `min(30 - exponent, 30)`.  If that comes out negative the
/// magnitude is too large to represent, and the result saturates to
/// `FixedPoint::MAX` or `FixedPoint::MIN` depending on sign.  Zero (of
/// either sign) converts to `FixedPoint::ZERO`.
///
/// For floats with exponents in `[-7, 30]` the conversion is lossless.
/// Below that, low significand bits are truncated away.
pub fn to_fixed_point(x: f32) -> FixedPoint {
    if x == 0.0 {
        return FixedPoint::ZERO;
    }

    let bits = FloatBits::decompose(x);
    let scaling = (MAX_SCALING - bits.exponent).min(MAX_SCALING);
    if scaling < 0 {
        return if bits.is_negative() {
            FixedPoint::MIN
        } else {
            FixedPoint::MAX
        };
    }

    encode(bits, scaling)
}

/// Converts a float to fixed point at a caller-chosen scaling.
///
/// Zero converts to a zero value at the requested scaling.  If the
/// significand's leading bit would land on (or past) the sign bit, the
/// result saturates to `i32::MAX` or `i32::MIN` at the requested scaling.
/// Bits shifted out below the binary point are truncated.
pub fn to_fixed_point_at(x: f32, scaling: i32) -> FixedPoint {
    if x == 0.0 {
        return FixedPoint::new(0, scaling);
    }

    let bits = FloatBits::decompose(x);
    let shift = shift_for(&bits, scaling);
    if shift <= MANTISSA_BITS as i64 - 31 {
        let value = if bits.is_negative() {
            MIN_VALUE
        } else {
            MAX_VALUE
        };
        return FixedPoint::new(value, scaling);
    }

    encode(bits, scaling)
}

/// Converts a fixed point number back to a float.
///
/// The float's exponent comes from the position of the highest set bit of
/// the magnitude, and its mantissa from the bits just below it.  Bits that
/// don't fit in the 23 bit mantissa are truncated.  A zero value (at any
/// scaling) converts to exactly `0.0`.
///
/// Scalings so extreme that the result isn't a normal float produce
/// garbage, but never panic.
pub fn from_fixed_point(x: FixedPoint) -> f32 {
    if x.value == 0 {
        return 0.0;
    }

    let sign = if x.value < 0 { 1 } else { 0 };

    // Works on `i32::MIN` too, whose magnitude only fits unsigned.
    let magnitude = x.value.unsigned_abs();

    let used_bits = count_used_bits_from_lsb(magnitude) as i32;
    let exponent = (used_bits - 1).wrapping_sub(x.scaling);
    let shift = used_bits - 1 - MANTISSA_BITS as i32;

    compose(
        sign,
        exponent.wrapping_add(EXPONENT_BIAS) as u32,
        shift_bits(magnitude, shift as i64),
    )
}

//----

/// How far right the significand has to move to land at `scaling`.
/// Negative means a left shift.
#[inline]
fn shift_for(bits: &FloatBits, scaling: i32) -> i64 {
    MANTISSA_BITS as i64 - bits.exponent as i64 - scaling as i64
}

/// Shifts the significand into place.  The caller has already made sure it
/// doesn't overflow into the sign bit.
#[inline]
fn encode(bits: FloatBits, scaling: i32) -> FixedPoint {
    let magnitude = shift_bits(bits.mantissa, shift_for(&bits, scaling)) as i32;
    let value = if bits.is_negative() {
        -magnitude
    } else {
        magnitude
    };
    FixedPoint::new(value, scaling)
}
