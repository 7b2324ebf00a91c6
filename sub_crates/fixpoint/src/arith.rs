//! Arithmetic directly on `FixedPoint` values, without a round trip
//! through floating point.
//!
//! Only multiplication is provided.  There is no division: callers that
//! need it have to go through `f32`.

use std::ops::Mul;

use crate::FixedPoint;

/// Multiplies two fixed point numbers.
///
/// The raw result is `(x.value * y.value) >> (x.scaling + y.scaling)` and
/// it is tagged with `x`'s scaling.  Note the asymmetry: the result always
/// adopts the left operand's scaling, so `multiply(a, b)` and
/// `multiply(b, a)` generally differ in their scaling.
///
/// The product is formed in 64 bits, so it never wraps before the shift.
/// The shifted product is then narrowed to 32 bits by truncation (keeping
/// its low 32 bits), and that is the only place overflow can happen.  There
/// is no saturation.
///
/// A combined shift of 64 or more leaves only the sign (0 or -1).  A
/// negative combined shift multiplies up instead.
pub fn multiply(x: FixedPoint, y: FixedPoint) -> FixedPoint {
    let product = i64::from(x.value) * i64::from(y.value);
    let shift = i64::from(x.scaling) + i64::from(y.scaling);

    let shifted = if shift >= 64 {
        product >> 63
    } else if shift >= 0 {
        product >> shift
    } else if shift > -64 {
        product << -shift
    } else {
        0
    };

    // Narrowing: keep the low 32 bits.
    FixedPoint::new(shifted as i32, x.scaling)
}

impl Mul for FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn mul(self, other: FixedPoint) -> FixedPoint {
        multiply(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_fixed_point, to_fixed_point};

    #[test]
    fn left_operand_scaling() {
        let a = to_fixed_point(15.5);
        let b = to_fixed_point(2.0);
        assert_eq!(multiply(a, b).scaling, a.scaling);
        assert_eq!(multiply(b, a).scaling, b.scaling);
    }

    #[test]
    fn fifteen_and_a_half_times_two() {
        let a = to_fixed_point(15.5);
        let b = to_fixed_point(2.0);
        let p = multiply(a, b);

        // Shifting by both scalings leaves the integer product.
        assert_eq!(p.value, 31);
        assert_eq!(p.scaling, 27);
        assert_eq!(from_fixed_point(FixedPoint::new(p.value, 0)), 31.0);
    }

    #[test]
    fn one_times_x() {
        let one = to_fixed_point(1.0);
        for &x in &[3.0f32, 7.75, -12.5, 1000.0, 65535.0] {
            let p = multiply(one, to_fixed_point(x));
            assert_eq!(p.value, x.floor() as i32);
            assert_eq!(p.scaling, 30);
        }
    }

    #[test]
    fn truncates_toward_negative_infinity() {
        let a = FixedPoint::new(-3, 0);
        let b = FixedPoint::new(1, 1);
        assert_eq!(multiply(a, b).value, -2);
    }

    #[test]
    fn wide_intermediate() {
        let a = FixedPoint::new(1 << 20, 10);
        let b = FixedPoint::new(1 << 20, 12);

        // A 32-bit product would have wrapped to nothing.
        assert_eq!(a.value.wrapping_mul(b.value), 0);
        assert_eq!(multiply(a, b), FixedPoint::new(1 << 18, 10));
    }

    #[test]
    fn wide_intermediate_uneven() {
        let a = FixedPoint::new((1 << 20) + 123, 8);
        let b = FixedPoint::new(-(1 << 20) + 7, 9);
        let expected = ((a.value as i64 * b.value as i64) >> 17) as i32;
        assert_eq!(multiply(a, b).value, expected);
        assert_eq!(expected, -8389536);
    }

    #[test]
    fn narrowing_keeps_low_bits() {
        let a = FixedPoint::new(i32::max_value(), 0);
        let b = FixedPoint::new(4, 0);
        assert_eq!(multiply(a, b).value, -4);
    }

    #[test]
    fn extreme_shifts() {
        let pos = FixedPoint::new(1000, 40);
        let neg = FixedPoint::new(-1000, 40);
        assert_eq!(multiply(pos, pos).value, 0);
        assert_eq!(multiply(neg, pos).value, -1);

        let a = FixedPoint::new(3, -2);
        assert_eq!(multiply(a, FixedPoint::new(5, 0)).value, 60);
        let b = FixedPoint::new(3, -100);
        assert_eq!(multiply(b, FixedPoint::new(5, 0)).value, 0);

        let c = FixedPoint::new(7, i32::max_value());
        let d = FixedPoint::new(-7, i32::min_value());
        let _ = multiply(c, c);
        let _ = multiply(d, d);
        let _ = multiply(c, d);
    }

    #[test]
    fn zero_operand() {
        let a = to_fixed_point(123.25);
        assert_eq!(multiply(a, FixedPoint::ZERO).value, 0);
        assert_eq!(multiply(FixedPoint::ZERO, a), FixedPoint::ZERO);
    }

    #[test]
    fn mul_operator() {
        let a = FixedPoint::new(6 << 4, 4);
        let b = FixedPoint::new(7 << 2, 2);
        assert_eq!(a * b, multiply(a, b));
        assert_eq!((a * b).value, 42);
    }
}
