//! The bit layout of IEEE-754 single precision floats, plus the small
//! bit-twiddling helpers the fixed point conversions are built on.
//!
//! A float is laid out as `[sign 1, exponent 8, mantissa 23]`, from the
//! most significant bit down.  The exponent is stored with a bias of 127.

#![allow(clippy::cast_lossless)]

/// Number of explicitly stored mantissa bits.
pub const MANTISSA_BITS: u32 = 23;

/// Width of the exponent field.
pub const EXPONENT_BITS: u32 = 8;

/// Bias of the stored exponent field.
pub const EXPONENT_BIAS: i32 = 127;

/// The implicit leading bit of a normal significand.
pub const NORM_MASK: u32 = 1 << MANTISSA_BITS;

pub const MANTISSA_MASK: u32 = NORM_MASK - 1;
pub const SIGN_MASK: u32 = 1 << 31;
pub const EXPONENT_MASK: u32 = (SIGN_MASK - 1) ^ MANTISSA_MASK;

/// Largest scaling factor a conversion will pick.
///
/// A significand shifted up to this scaling still leaves the sign bit and
/// one guard bit free in an `i32`.
pub const MAX_SCALING: i32 = 30;

/// Largest raw fixed point value.
pub const MAX_VALUE: i32 = i32::MAX;

/// Smallest raw fixed point value.
pub const MIN_VALUE: i32 = i32::MIN;

/// The fields of a float, decoded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FloatBits {
    /// 1 for negative numbers, 0 otherwise.
    pub sign: u32,
    /// De-biased exponent.
    pub exponent: i32,
    /// Significand with the implicit leading bit restored.
    pub mantissa: u32,
}

impl FloatBits {
    /// Splits a float into its sign, de-biased exponent, and significand.
    ///
    /// The implicit leading bit is always OR'd into the significand, so
    /// the result is only meaningful for normal numbers.  Zero, subnormals,
    /// infinity and NaN decode without complaint but to nonsense.
    #[inline]
    pub fn decompose(x: f32) -> FloatBits {
        let bits = x.to_bits();
        FloatBits {
            sign: (bits & SIGN_MASK) >> 31,
            exponent: ((bits & EXPONENT_MASK) >> MANTISSA_BITS) as i32 - EXPONENT_BIAS,
            mantissa: (bits & MANTISSA_MASK) | NORM_MASK,
        }
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign != 0
    }
}

/// Builds a float from raw field values.
///
/// `biased_exponent` is the stored exponent field (bias already added), and
/// `mantissa` holds the stored mantissa bits.  Anything outside the width of
/// its field is masked off, including the implicit leading bit.
#[inline]
pub fn compose(sign: u32, biased_exponent: u32, mantissa: u32) -> f32 {
    f32::from_bits(
        ((sign << 31) & SIGN_MASK)
            | ((biased_exponent << MANTISSA_BITS) & EXPONENT_MASK)
            | (mantissa & MANTISSA_MASK),
    )
}

/// Number of bits needed to represent `x`, i.e. the 1-based position of its
/// highest set bit.  Zero needs zero bits.
#[inline]
pub fn count_used_bits_from_lsb(x: u32) -> u32 {
    32 - x.leading_zeros()
}

/// Shifts right by `shift` when it's positive and left by `-shift` when it's
/// negative.  Shifting by the full width or more gives zero.
#[inline]
pub fn shift_bits(bits: u32, shift: i64) -> u32 {
    if shift >= 32 || shift <= -32 {
        0
    } else if shift > 0 {
        bits >> shift
    } else if shift < 0 {
        bits << -shift
    } else {
        bits
    }
}
