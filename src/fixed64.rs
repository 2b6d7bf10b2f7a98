//! Signed 32.32 fixed-point kernel.
//!
//! Raw values are `i64` with 32 fractional bits. Every operation is a pure
//! function over raw values with twos-complement wraparound semantics, so a
//! given input always produces the same output bit pattern on every
//! platform.
//!
//! # Algorithms
//!
//! - **mul**: four partial products, the low cross product shifted without
//!   sign extension
//! - **div_precise**: unsigned 64/64 long division over two 32-bit digits
//! - **div / rcp tiers**: CLZ-normalize the divisor to s2.30, reciprocal
//!   minimax polynomial, re-apply the exponent
//! - **sqrt_precise**: bit-by-bit digit recurrence
//! - **sqrt / rsqrt tiers**: CLZ-normalize, mantissa polynomial, sqrt(2)
//!   adjust for odd exponents
//! - **exp2 / log / log2 tiers**: fractional-part polynomial plus exponent
//!   shift (exp2), mantissa polynomial plus scaled exponent (logs)
//! - **sin tiers**: map the angle onto quarter turns in s2.30, mirror the
//!   back quadrants with a sign-bit trick, odd polynomial
//! - **atan2 tiers**: first-octant reduction, polynomial reciprocal for the
//!   ratio, arctangent polynomial, quadrant fix-up via sign masks
//!
//! Invalid inputs return sentinels instead of panicking: see the individual
//! operation docs.

use crate::bits::{clz64, logical_shift_right_i64, shift_right_i64};
use crate::error::{Error, Result};
use crate::poly;

/// Number of fractional bits.
pub const SHIFT: i32 = 32;
/// Mask covering the fractional bits.
pub const FRACTION_MASK: i64 = (1 << SHIFT) - 1;
/// Mask covering the integer bits.
pub const INTEGER_MASK: i64 = !FRACTION_MASK;

/// Raw zero.
pub const ZERO: i64 = 0;
/// Raw -1.0.
pub const NEG_ONE: i64 = -(1 << SHIFT);
/// Raw 1.0.
pub const ONE: i64 = 1 << SHIFT;
/// Raw 2.0.
pub const TWO: i64 = 2 << SHIFT;
/// Raw 3.0.
pub const THREE: i64 = 3 << SHIFT;
/// Raw 4.0.
pub const FOUR: i64 = 4 << SHIFT;
/// Raw 0.5.
pub const HALF: i64 = ONE >> 1;
/// Raw pi.
pub const PI: i64 = 13493037705;
/// Raw 2*pi.
pub const TWO_PI: i64 = 26986075409;
/// Raw pi/2.
pub const PI_HALF: i64 = 6746518852;
/// Raw e.
pub const E: i64 = 11674931555;
/// Smallest representable value.
pub const MIN_VALUE: i64 = i64::MIN;
/// Largest representable value.
pub const MAX_VALUE: i64 = i64::MAX;

// Private constants
const RCP_LN2: i64 = 0x1_7154_7652; // 1.0 / ln(2.0) ~= 1.4426950408889634
const RCP_LOG2_E: i64 = 2977044471; // 1.0 / log2(e) ~= 0.6931471805599453
const RCP_HALF_PI: i32 = 683565276; // 1.0 / (4.0 * 0.5 * pi) as s2.30

const SQRT2: i32 = 1518500249; // sqrt(2.0) as s2.30
const HALF_SQRT2: i32 = 759250125; // 0.5 * sqrt(2.0) as s2.30

// ============================================================================
// Conversions
// ============================================================================

/// Converts an integer to a fixed-point value.
#[inline]
pub fn from_int(v: i32) -> i64 {
    (v as i64) << SHIFT
}

/// Converts a double to a fixed-point value.
///
/// Unlike the wrapping integer arithmetic, the float boundary clamps:
/// out-of-range inputs saturate to [`MIN_VALUE`]/[`MAX_VALUE`] and NaN maps
/// to 0.
#[inline]
pub fn from_double(v: f64) -> i64 {
    (v * 4294967296.0) as i64
}

/// Converts a float to a fixed-point value, clamping like [`from_double`].
#[inline]
pub fn from_float(v: f32) -> i64 {
    (v * 4294967296.0) as i64
}

/// Converts a fixed-point value into a double.
#[inline]
pub fn to_double(v: i64) -> f64 {
    v as f64 * (1.0 / 4294967296.0)
}

/// Converts a fixed-point value into a float.
#[inline]
pub fn to_float(v: i64) -> f32 {
    v as f32 * (1.0 / 4294967296.0)
}

/// Converts a fixed-point value into an integer by rounding up.
#[inline]
pub fn ceil_to_int(v: i64) -> i32 {
    (v.wrapping_add(ONE - 1) >> SHIFT) as i32
}

/// Converts a fixed-point value into an integer by rounding down.
#[inline]
pub fn floor_to_int(v: i64) -> i32 {
    (v >> SHIFT) as i32
}

/// Converts a fixed-point value into an integer by rounding to nearest.
#[inline]
pub fn round_to_int(v: i64) -> i32 {
    (v.wrapping_add(HALF) >> SHIFT) as i32
}

/// Formats the value as a decimal string.
pub fn to_string(v: i64) -> String {
    format!("{}", to_double(v))
}

/// Parses a decimal string (`[+-]digits[.digits]`) into a raw value.
///
/// The conversion is pure integer arithmetic: the fractional digits are
/// scaled by 2^32 with round-half-up, so parsing is deterministic and does
/// not route through floating point.
pub fn from_str(s: &str) -> Result<i64> {
    parse_decimal(s, SHIFT as u32, i64::MAX)
}

pub(crate) fn parse_decimal(s: &str, shift: u32, max: i64) -> Result<i64> {
    let s = s.trim();
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (int_str, frac_str) = match body.split_once('.') {
        Some((i, f)) => (i, f),
        None => (body, ""),
    };
    if int_str.is_empty() && frac_str.is_empty() {
        return Err(Error::Empty);
    }

    // Magnitude arithmetic runs in i128 so the asymmetric negative endpoint
    // of the raw range stays parseable.
    let mut int_part: i128 = 0;
    for ch in int_str.chars() {
        let d = ch.to_digit(10).ok_or(Error::InvalidDigit { ch })? as i128;
        int_part = int_part * 10 + d;
        if int_part > 1 << 63 {
            return Err(Error::Overflow);
        }
    }

    // Accumulate the fraction as numerator/denominator, capping the digit
    // count well past the representable resolution.
    let mut num: u128 = 0;
    let mut den: u128 = 1;
    for ch in frac_str.chars() {
        let d = ch.to_digit(10).ok_or(Error::InvalidDigit { ch })? as u128;
        if den < 10u128.pow(19) {
            num = num * 10 + d;
            den *= 10;
        }
    }
    let frac = (((num << shift) + den / 2) / den) as i128;

    let magnitude = (int_part << shift) + frac;
    // Negative values reach one past the positive maximum.
    let limit = if negative {
        max as i128 + 1
    } else {
        max as i128
    };
    if magnitude > limit {
        return Err(Error::Overflow);
    }
    let raw = if negative { -magnitude } else { magnitude };
    Ok(raw as i64)
}

// ============================================================================
// Utility
// ============================================================================

/// Returns the absolute value of x. Wraps for the minimum value.
#[inline]
pub fn abs(x: i64) -> i64 {
    let mask = x >> 63;
    x.wrapping_add(mask) ^ mask
}

/// Negative absolute value (returns -abs(x)).
#[inline]
pub fn nabs(x: i64) -> i64 {
    abs(x).wrapping_neg()
}

/// Rounds up to the nearest integer value.
#[inline]
pub fn ceil(x: i64) -> i64 {
    x.wrapping_add(FRACTION_MASK) & INTEGER_MASK
}

/// Rounds down to the nearest integer value.
#[inline]
pub fn floor(x: i64) -> i64 {
    x & INTEGER_MASK
}

/// Rounds to the nearest integer value.
#[inline]
pub fn round(x: i64) -> i64 {
    x.wrapping_add(HALF) & INTEGER_MASK
}

/// Returns the fractional part of x, equal to `x - floor(x)`.
#[inline]
pub fn fract(x: i64) -> i64 {
    x & FRACTION_MASK
}

/// Returns the minimum of the two values.
#[inline]
pub fn min(a: i64, b: i64) -> i64 {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of the two values.
#[inline]
pub fn max(a: i64, b: i64) -> i64 {
    if a > b {
        a
    } else {
        b
    }
}

/// Returns the value clamped between lo and hi.
#[inline]
pub fn clamp(a: i64, lo: i64, hi: i64) -> i64 {
    if a > hi {
        hi
    } else if a < lo {
        lo
    } else {
        a
    }
}

/// Returns -1, 0 or 1 by the sign of the value.
#[inline]
pub fn sign(x: i64) -> i32 {
    ((x >> 63) | ((x.wrapping_neg() as u64 >> 63) as i64)) as i32
}

/// Linearly interpolates from a to b by t: `a*(1-t) + b*t`.
#[inline]
pub fn lerp(a: i64, b: i64, t: i64) -> i64 {
    mul(a, ONE.wrapping_sub(t)).wrapping_add(mul(b, t))
}

// ============================================================================
// Basic arithmetic
// ============================================================================

/// Adds the two values, wrapping on overflow.
#[inline]
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Subtracts b from a, wrapping on overflow.
#[inline]
pub fn sub(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Multiplies two values, wrapping on overflow.
///
/// Split into four partial products so the full 64x64 result is formed
/// without a widening type; the low cross product must not sign extend.
pub fn mul(a: i64, b: i64) -> i64 {
    let ai = a >> SHIFT;
    let af = a & FRACTION_MASK;
    let bi = b >> SHIFT;
    let bf = b & FRACTION_MASK;
    logical_shift_right_i64(af.wrapping_mul(bf), SHIFT)
        .wrapping_add(ai.wrapping_mul(b))
        .wrapping_add(af.wrapping_mul(bi))
}

// Multiplies a non-negative s2.30 value with a raw value, keeping the low
// 32 bits of the integer part. Used for angle wrapping.
#[inline]
fn mul_int_long_low(a: i32, b: i64) -> i32 {
    debug_assert!(a >= 0);
    let bi = (b >> SHIFT) as i32;
    let bf = b & FRACTION_MASK;
    (logical_shift_right_i64((a as i64).wrapping_mul(bf), SHIFT) as i32)
        .wrapping_add(a.wrapping_mul(bi))
}

// Multiplies a non-negative s2.30 value with a raw value into a full-width
// result.
#[inline]
fn mul_int_long_long(a: i32, b: i64) -> i64 {
    debug_assert!(a >= 0);
    let bi = b >> SHIFT;
    let bf = b & FRACTION_MASK;
    logical_shift_right_i64((a as i64).wrapping_mul(bf), SHIFT)
        .wrapping_add((a as i64).wrapping_mul(bi))
}

/// Divides two values exactly, truncating toward zero.
///
/// Unsigned 64/64 long division over two 32-bit digits. Returns
/// [`MAX_VALUE`] when the quotient does not fit, including division by
/// zero.
pub fn div_precise(a: i64, b: i64) -> i64 {
    let sign_dif = a ^ b;

    const B: u64 = 1 << 32; // digit base
    let abs_a = a.unsigned_abs();
    let u1 = abs_a >> 32;
    let u0 = abs_a << 32;
    let mut v = b.unsigned_abs();

    // Quotient would not fit (or b is zero).
    if u1 >= v {
        return MAX_VALUE;
    }

    let s = clz64(v); // 0 <= s <= 63
    v <<= s;
    let vn1 = v >> 32;
    let vn0 = v & 0xFFFF_FFFF;

    let un32 = (u1 << s) | if s > 0 { u0 >> (64 - s) } else { 0 };
    let un10 = u0 << s;

    let un1 = un10 >> 32;
    let un0 = un10 & 0xFFFF_FFFF;

    // First quotient digit.
    let mut q1 = un32 / vn1;
    let mut rhat = un32.wrapping_sub(q1.wrapping_mul(vn1));
    loop {
        if q1 >= B || q1.wrapping_mul(vn0) > B.wrapping_mul(rhat).wrapping_add(un1) {
            q1 -= 1;
            rhat = rhat.wrapping_add(vn1);
        } else {
            break;
        }
        if rhat >= B {
            break;
        }
    }

    let un21 = un32
        .wrapping_mul(B)
        .wrapping_add(un1)
        .wrapping_sub(q1.wrapping_mul(v));

    // Second quotient digit.
    let mut q0 = un21 / vn1;
    rhat = un21.wrapping_sub(q0.wrapping_mul(vn1));
    loop {
        if q0 >= B || q0.wrapping_mul(vn0) > B.wrapping_mul(rhat).wrapping_add(un0) {
            q0 -= 1;
            rhat = rhat.wrapping_add(vn1);
        } else {
            break;
        }
        if rhat >= B {
            break;
        }
    }

    let ret = q1.wrapping_mul(B).wrapping_add(q0) as i64;
    if sign_dif < 0 {
        ret.wrapping_neg()
    } else {
        ret
    }
}

#[inline]
fn div_approx(a: i64, b: i64, rcp_poly: fn(i32) -> i32) -> i64 {
    if b == MIN_VALUE || b == 0 {
        return 0;
    }

    // Handle negative values.
    let sign: i64 = if b < 0 { -1 } else { 1 };
    let b = b.wrapping_mul(sign);

    // Normalize input into [1.0, 2.0) range (convert to s2.30).
    let offset = 31 - clz64(b as u64);
    let n = shift_right_i64(b, offset + 2) as i32;
    debug_assert!(n >= poly::ONE);

    // Polynomial approximation.
    let res = rcp_poly(n.wrapping_sub(poly::ONE));

    // Apply exponent, convert back to s32.32.
    let y = mul_int_long_long(res, a) << 2;
    shift_right_i64(sign.wrapping_mul(y), offset)
}

/// Divides two values using the precise-tier reciprocal approximation.
///
/// Returns 0 when the divisor is 0 or [`MIN_VALUE`].
pub fn div(a: i64, b: i64) -> i64 {
    div_approx(a, b, poly::rcp_poly4_lut8)
}

/// Divides two values using the fast-tier reciprocal approximation.
///
/// Returns 0 when the divisor is 0 or [`MIN_VALUE`].
pub fn div_fast(a: i64, b: i64) -> i64 {
    div_approx(a, b, poly::rcp_poly6)
}

/// Divides two values using the fastest-tier reciprocal approximation.
///
/// Returns 0 when the divisor is 0 or [`MIN_VALUE`].
pub fn div_fastest(a: i64, b: i64) -> i64 {
    div_approx(a, b, poly::rcp_poly4)
}

/// Truncated remainder: `a - trunc(a/b)*b`. Returns 0 when b is 0.
pub fn rem(a: i64, b: i64) -> i64 {
    if b == 0 {
        return 0;
    }
    let di = a.wrapping_div(b);
    a.wrapping_sub(di.wrapping_mul(b))
}

// ============================================================================
// Square root and reciprocal
// ============================================================================

/// Calculates the square root exactly, one result bit per iteration.
///
/// Returns 0 for negative inputs.
pub fn sqrt_precise(a: i64) -> i64 {
    if a < 0 {
        return 0;
    }

    let mut r = a as u64;
    let mut b: u64 = 0x4000_0000_0000_0000;
    let mut q: u64 = 0;
    while b > 0x40 {
        let t = q.wrapping_add(b);
        if r >= t {
            r = r.wrapping_sub(t);
            q = t.wrapping_add(b);
        }
        r <<= 1;
        b >>= 1;
    }
    (q >> 16) as i64
}

#[inline]
fn sqrt_approx(x: i64, sqrt_poly: fn(i32) -> i32) -> i64 {
    // Return 0 for all non-positive values.
    if x <= 0 {
        return 0;
    }

    // Normalize input into [1.0, 2.0) range (as s2.30).
    let offset = 31 - clz64(x as u64);
    let n = (shift_right_i64(x, offset) >> 2) as i32;
    debug_assert!(n >= poly::ONE);
    let y = sqrt_poly(n.wrapping_sub(poly::ONE));

    // Halve the exponent; odd exponents pick up a sqrt(2) factor.
    let adjust = if offset & 1 != 0 { SQRT2 } else { poly::ONE };
    let offset = offset >> 1;

    // Apply exponent, convert back to s32.32.
    let yr = (poly::qmul30(adjust, y) as i64) << 2;
    shift_right_i64(yr, -offset)
}

/// Calculates the square root with the precise tier. Non-positive inputs
/// return 0.
pub fn sqrt(x: i64) -> i64 {
    sqrt_approx(x, poly::sqrt_poly3_lut8)
}

/// Calculates the square root with the fast tier. Non-positive inputs
/// return 0.
pub fn sqrt_fast(x: i64) -> i64 {
    sqrt_approx(x, poly::sqrt_poly4)
}

/// Calculates the square root with the fastest tier. Non-positive inputs
/// return 0.
pub fn sqrt_fastest(x: i64) -> i64 {
    sqrt_approx(x, poly::sqrt_poly3)
}

#[inline]
fn rsqrt_approx(x: i64, rsqrt_poly: fn(i32) -> i32) -> i64 {
    // Return 0 for invalid values.
    if x <= 0 {
        return 0;
    }

    // Normalize input into [1.0, 2.0) range (as s2.30).
    let offset = 31 - clz64(x as u64);
    let n = (shift_right_i64(x, offset) >> 2) as i32;
    debug_assert!(n >= poly::ONE);
    let y = rsqrt_poly(n.wrapping_sub(poly::ONE));

    // Halve the exponent; odd exponents pick up a 1/sqrt(2) factor.
    let adjust = if offset & 1 != 0 { HALF_SQRT2 } else { poly::ONE };
    let offset = offset >> 1;

    // Apply inverted exponent, convert back to s32.32.
    let yr = (poly::qmul30(adjust, y) as i64) << 2;
    shift_right_i64(yr, offset)
}

/// Calculates the reciprocal square root with the precise tier.
/// Non-positive inputs return 0.
pub fn rsqrt(x: i64) -> i64 {
    rsqrt_approx(x, poly::rsqrt_poly3_lut16)
}

/// Calculates the reciprocal square root with the fast tier. Non-positive
/// inputs return 0.
pub fn rsqrt_fast(x: i64) -> i64 {
    rsqrt_approx(x, poly::rsqrt_poly5)
}

/// Calculates the reciprocal square root with the fastest tier.
/// Non-positive inputs return 0.
pub fn rsqrt_fastest(x: i64) -> i64 {
    rsqrt_approx(x, poly::rsqrt_poly3)
}

#[inline]
fn rcp_approx(x: i64, rcp_poly: fn(i32) -> i32) -> i64 {
    if x == MIN_VALUE || x == 0 {
        return 0;
    }

    // Handle negative values.
    let sign: i64 = if x < 0 { -1 } else { 1 };
    let x = x.wrapping_mul(sign);

    // Normalize input into [1.0, 2.0) range (convert to s2.30).
    let offset = 31 - clz64(x as u64);
    let n = shift_right_i64(x, offset + 2) as i32;
    debug_assert!(n >= poly::ONE);

    // Polynomial approximation.
    let res = rcp_poly(n.wrapping_sub(poly::ONE));
    let y = sign.wrapping_mul(res as i64) << 2;

    // Apply exponent, convert back to s32.32.
    shift_right_i64(y, offset)
}

/// Calculates the reciprocal with the precise tier. Returns 0 for 0 and
/// [`MIN_VALUE`].
pub fn rcp(x: i64) -> i64 {
    rcp_approx(x, poly::rcp_poly4_lut8)
}

/// Calculates the reciprocal with the fast tier. Returns 0 for 0 and
/// [`MIN_VALUE`].
pub fn rcp_fast(x: i64) -> i64 {
    rcp_approx(x, poly::rcp_poly6)
}

/// Calculates the reciprocal with the fastest tier. Returns 0 for 0 and
/// [`MIN_VALUE`].
pub fn rcp_fastest(x: i64) -> i64 {
    rcp_approx(x, poly::rcp_poly4)
}

// ============================================================================
// Exponentials and logarithms
// ============================================================================

#[inline]
fn exp2_approx(x: i64, exp2_poly: fn(i32) -> i32) -> i64 {
    // Handle values that would under or overflow.
    if x >= 32 * ONE {
        return MAX_VALUE;
    }
    if x <= -32 * ONE {
        return 0;
    }

    // Compute exp2 for the fractional part.
    let k = ((x & FRACTION_MASK) >> 2) as i32;
    let y = (exp2_poly(k) as i64) << 2;

    // Combine integer and fractional parts, convert back to s32.32.
    let int_part = (x >> SHIFT) as i32;
    shift_right_i64(y, -int_part)
}

/// Calculates the base-2 exponent with the precise tier.
///
/// Saturates to [`MAX_VALUE`] at or above 32.0 and to 0 at or below -32.0.
pub fn exp2(x: i64) -> i64 {
    exp2_approx(x, poly::exp2_poly5)
}

/// Calculates the base-2 exponent with the fast tier. Saturates like
/// [`exp2`].
pub fn exp2_fast(x: i64) -> i64 {
    exp2_approx(x, poly::exp2_poly4)
}

/// Calculates the base-2 exponent with the fastest tier. Saturates like
/// [`exp2`].
pub fn exp2_fastest(x: i64) -> i64 {
    exp2_approx(x, poly::exp2_poly3)
}

/// Calculates the natural exponent with the precise tier.
pub fn exp(x: i64) -> i64 {
    // e^x == 2^(x / ln(2))
    exp2(mul(x, RCP_LN2))
}

/// Calculates the natural exponent with the fast tier.
pub fn exp_fast(x: i64) -> i64 {
    exp2_fast(mul(x, RCP_LN2))
}

/// Calculates the natural exponent with the fastest tier.
pub fn exp_fastest(x: i64) -> i64 {
    exp2_fastest(mul(x, RCP_LN2))
}

#[inline]
fn log_approx(x: i64, log_poly: fn(i32) -> i32) -> i64 {
    // Return 0 for invalid values.
    if x <= 0 {
        return 0;
    }

    // Normalize value to range [1.0, 2.0) as s2.30 and extract exponent.
    let offset = 31 - clz64(x as u64);
    let n = (shift_right_i64(x, offset) >> 2) as i32;
    debug_assert!(n >= poly::ONE);
    let y = (log_poly(n.wrapping_sub(poly::ONE)) as i64) << 2;

    // Combine integer and fractional parts (into s32.32).
    (offset as i64).wrapping_mul(RCP_LOG2_E).wrapping_add(y)
}

/// Calculates the natural logarithm with the precise tier. Non-positive
/// inputs return 0.
pub fn log(x: i64) -> i64 {
    log_approx(x, poly::log_poly5_lut8)
}

/// Calculates the natural logarithm with the fast tier. Non-positive
/// inputs return 0.
pub fn log_fast(x: i64) -> i64 {
    log_approx(x, poly::log_poly3_lut8)
}

/// Calculates the natural logarithm with the fastest tier. Non-positive
/// inputs return 0.
pub fn log_fastest(x: i64) -> i64 {
    log_approx(x, poly::log_poly5)
}

#[inline]
fn log2_approx(x: i64, log2_poly: fn(i32) -> i32) -> i64 {
    // Return 0 for invalid values.
    if x <= 0 {
        return 0;
    }

    // Normalize value to range [1.0, 2.0) as s2.30 and extract exponent.
    let offset = 31 - clz64(x as u64);
    let n = (shift_right_i64(x, offset) >> 2) as i32;
    debug_assert!(n >= poly::ONE);
    let y = (log2_poly(n.wrapping_sub(poly::ONE)) as i64) << 2;

    // Combine integer and fractional parts (into s32.32).
    ((offset as i64) << SHIFT).wrapping_add(y)
}

/// Calculates the base-2 logarithm with the precise tier. Non-positive
/// inputs return 0.
pub fn log2(x: i64) -> i64 {
    log2_approx(x, poly::log2_poly4_lut16)
}

/// Calculates the base-2 logarithm with the fast tier. Non-positive inputs
/// return 0.
pub fn log2_fast(x: i64) -> i64 {
    log2_approx(x, poly::log2_poly3_lut16)
}

/// Calculates the base-2 logarithm with the fastest tier. Non-positive
/// inputs return 0.
pub fn log2_fastest(x: i64) -> i64 {
    log2_approx(x, poly::log2_poly5)
}

/// Calculates x to the power of the exponent with the precise tier.
///
/// Non-positive bases return 0.
pub fn pow(x: i64, exponent: i64) -> i64 {
    if x <= 0 {
        return 0;
    }
    exp(mul(exponent, log(x)))
}

/// Calculates x to the power of the exponent with the fast tier.
/// Non-positive bases return 0.
pub fn pow_fast(x: i64, exponent: i64) -> i64 {
    if x <= 0 {
        return 0;
    }
    exp_fast(mul(exponent, log_fast(x)))
}

/// Calculates x to the power of the exponent with the fastest tier.
/// Non-positive bases return 0.
pub fn pow_fastest(x: i64, exponent: i64) -> i64 {
    if x <= 0 {
        return 0;
    }
    exp_fastest(mul(exponent, log_fastest(x)))
}

// ============================================================================
// Trigonometry
// ============================================================================

#[inline]
fn unit_sin(z: i32, sin_poly: fn(i32) -> i32) -> i32 {
    // The angle is in quarter turns: quadrants 1 and 2 occupy [1, 3] and
    // mirror onto [-1, 1] via 2 - z. Their top two raw bits differ, which
    // the xor test picks out without comparisons.
    let mut z = z;
    if (z ^ (z << 1)) < 0 {
        z = i32::MIN.wrapping_sub(z);
    }

    // Now z is within [-1, 1] (s2.30).
    debug_assert!((-poly::ONE..=poly::ONE).contains(&z));

    // Odd polynomial in z: evaluate on z*z, multiply once by z.
    let zz = poly::qmul30(z, z);
    poly::qmul30(sin_poly(zz), z)
}

#[inline]
fn sin_approx(x: i64, sin_poly: fn(i32) -> i32) -> i64 {
    // Map [0, 2pi] to [0, 4] quarter turns (as s2.30); the truncating
    // multiply also wraps the angle into one period.
    let z = mul_int_long_low(RCP_HALF_PI, x);

    // Compute sine, convert to s32.32.
    (unit_sin(z, sin_poly) as i64) << 2
}

/// Calculates the sine with the precise tier.
pub fn sin(x: i64) -> i64 {
    sin_approx(x, poly::sin_poly4)
}

/// Calculates the sine with the fast tier.
pub fn sin_fast(x: i64) -> i64 {
    sin_approx(x, poly::sin_poly3)
}

/// Calculates the sine with the fastest tier.
pub fn sin_fastest(x: i64) -> i64 {
    sin_approx(x, poly::sin_poly2)
}

/// Calculates the cosine with the precise tier.
pub fn cos(x: i64) -> i64 {
    sin(x.wrapping_add(PI_HALF))
}

/// Calculates the cosine with the fast tier.
pub fn cos_fast(x: i64) -> i64 {
    sin_fast(x.wrapping_add(PI_HALF))
}

/// Calculates the cosine with the fastest tier.
pub fn cos_fastest(x: i64) -> i64 {
    sin_fastest(x.wrapping_add(PI_HALF))
}

/// Calculates the tangent with the precise tier.
///
/// Returns 0 where the cosine rounds to zero (the poles).
pub fn tan(x: i64) -> i64 {
    let z = mul_int_long_low(RCP_HALF_PI, x);
    let sin_x = (unit_sin(z, poly::sin_poly4) as i64) << 32;
    let cos_x = (unit_sin(z.wrapping_add(poly::ONE), poly::sin_poly4) as i64) << 32;
    div(sin_x, cos_x)
}

/// Calculates the tangent with the fast tier. Returns 0 at the poles.
pub fn tan_fast(x: i64) -> i64 {
    let z = mul_int_long_low(RCP_HALF_PI, x);
    let sin_x = (unit_sin(z, poly::sin_poly3) as i64) << 32;
    let cos_x = (unit_sin(z.wrapping_add(poly::ONE), poly::sin_poly3) as i64) << 32;
    div_fast(sin_x, cos_x)
}

/// Calculates the tangent with the fastest tier. Returns 0 at the poles.
pub fn tan_fastest(x: i64) -> i64 {
    let z = mul_int_long_low(RCP_HALF_PI, x);
    let sin_x = (unit_sin(z, poly::sin_poly2) as i64) << 32;
    let cos_x = (unit_sin(z.wrapping_add(poly::ONE), poly::sin_poly2) as i64) << 32;
    div_fastest(sin_x, cos_x)
}

// First-octant ratio y/x as s2.30, for 0 <= y <= x.
#[inline]
fn atan2_div(y: i64, x: i64, rcp_poly: fn(i32) -> i32) -> i32 {
    debug_assert!(y >= 0 && x > 0 && x >= y);

    // Normalize input into [1.0, 2.0) range (convert to s2.30).
    let offset = 31 - clz64(x as u64);
    let n = (shift_right_i64(x, offset) >> 2) as i32;
    let k = n.wrapping_sub(poly::ONE);

    // Polynomial approximation of the reciprocal. The fastest tier's
    // truncated evaluation undershoots 0.5 by one ulp at the top of the
    // mantissa range, so the lower bound tolerates that.
    let oox = rcp_poly(k);
    debug_assert!(oox >= poly::ONE / 2 - 1 && oox <= poly::ONE);

    // Apply exponent and multiply.
    let yr = shift_right_i64(y, offset);
    poly::qmul30((yr >> 2) as i32, oox)
}

#[inline]
fn atan2_approx(
    y: i64,
    x: i64,
    rcp_poly: fn(i32) -> i32,
    atan_poly: fn(i32) -> i32,
) -> i64 {
    if x == 0 {
        if y > 0 {
            return PI_HALF;
        }
        if y < 0 {
            return -PI_HALF;
        }
        return 0;
    }
    // Keep results on the x axis exact; the sign-mask path below would be
    // one ulp short of pi for negative x.
    if y == 0 {
        return if x > 0 { 0 } else { PI };
    }

    let nx = x ^ (x >> 63);
    let ny = y ^ (y >> 63);
    let neg_mask = (x ^ y) >> 63;

    if nx >= ny {
        let k = atan2_div(ny, nx, rcp_poly);
        let z = atan_poly(k);
        let angle = neg_mask ^ ((z as i64) << 2);
        if x > 0 {
            return angle;
        }
        if y >= 0 {
            return angle.wrapping_add(PI);
        }
        angle.wrapping_sub(PI)
    } else {
        let k = atan2_div(nx, ny, rcp_poly);
        let z = atan_poly(k);
        let angle = neg_mask ^ ((z as i64) << 2);
        (if y > 0 { PI_HALF } else { -PI_HALF }).wrapping_sub(angle)
    }
}

/// Calculates the angle of the vector (x, y) with the precise tier.
///
/// Results on the axes are exact: `atan2(0, x)` is 0 or pi and
/// `atan2(y, 0)` is plus or minus pi/2; the origin maps to 0.
pub fn atan2(y: i64, x: i64) -> i64 {
    atan2_approx(y, x, poly::rcp_poly4_lut8, poly::atan_poly5_lut8)
}

/// Calculates the angle of the vector (x, y) with the fast tier. Axis
/// results are exact as in [`atan2`].
pub fn atan2_fast(y: i64, x: i64) -> i64 {
    atan2_approx(y, x, poly::rcp_poly6, poly::atan_poly3_lut8)
}

/// Calculates the angle of the vector (x, y) with the fastest tier. Axis
/// results are exact as in [`atan2`].
pub fn atan2_fastest(y: i64, x: i64) -> i64 {
    atan2_approx(y, x, poly::rcp_poly4, poly::atan_poly4)
}

/// Calculates the arctangent with the precise tier.
pub fn atan(x: i64) -> i64 {
    atan2(x, ONE)
}

/// Calculates the arctangent with the fast tier.
pub fn atan_fast(x: i64) -> i64 {
    atan2_fast(x, ONE)
}

/// Calculates the arctangent with the fastest tier.
pub fn atan_fastest(x: i64) -> i64 {
    atan2_fastest(x, ONE)
}

/// Calculates the arcsine with the precise tier.
///
/// Inputs outside [-1, 1] return 0.
pub fn asin(x: i64) -> i64 {
    if !(-ONE..=ONE).contains(&x) {
        return 0;
    }
    atan2(x, sqrt(mul(ONE.wrapping_add(x), ONE.wrapping_sub(x))))
}

/// Calculates the arcsine with the fast tier. Inputs outside [-1, 1]
/// return 0.
pub fn asin_fast(x: i64) -> i64 {
    if !(-ONE..=ONE).contains(&x) {
        return 0;
    }
    atan2_fast(x, sqrt_fast(mul(ONE.wrapping_add(x), ONE.wrapping_sub(x))))
}

/// Calculates the arcsine with the fastest tier. Inputs outside [-1, 1]
/// return 0.
pub fn asin_fastest(x: i64) -> i64 {
    if !(-ONE..=ONE).contains(&x) {
        return 0;
    }
    atan2_fastest(x, sqrt_fastest(mul(ONE.wrapping_add(x), ONE.wrapping_sub(x))))
}

/// Calculates the arccosine with the precise tier.
///
/// Inputs outside [-1, 1] return 0.
pub fn acos(x: i64) -> i64 {
    if !(-ONE..=ONE).contains(&x) {
        return 0;
    }
    atan2(sqrt(mul(ONE.wrapping_add(x), ONE.wrapping_sub(x))), x)
}

/// Calculates the arccosine with the fast tier. Inputs outside [-1, 1]
/// return 0.
pub fn acos_fast(x: i64) -> i64 {
    if !(-ONE..=ONE).contains(&x) {
        return 0;
    }
    atan2_fast(sqrt_fast(mul(ONE.wrapping_add(x), ONE.wrapping_sub(x))), x)
}

/// Calculates the arccosine with the fastest tier. Inputs outside [-1, 1]
/// return 0.
pub fn acos_fastest(x: i64) -> i64 {
    if !(-ONE..=ONE).contains(&x) {
        return 0;
    }
    atan2_fastest(sqrt_fastest(mul(ONE.wrapping_add(x), ONE.wrapping_sub(x))), x)
}
