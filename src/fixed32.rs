//! Signed 16.16 fixed-point kernel.
//!
//! Raw values are `i32` with 16 fractional bits. The operation surface and
//! the normalization/polynomial machinery mirror [`crate::fixed64`]; the
//! differences come from the narrower word:
//!
//! - **mul** and **div_precise** use a single widening 64-bit step
//! - **sqrt_precise** widens to s32.32, runs the digit recurrence there and
//!   narrows the result
//! - **asin / acos** escalate entirely into the s32.32 kernel: squaring
//!   `1 - x^2` and the subsequent atan2 lose too many of the 16 fractional
//!   bits to stay accurate in-width
//!
//! The widening paths are fixed internal dependencies on [`crate::fixed64`],
//! not configurable seams. Invalid inputs return the same sentinels as the
//! wide kernel.

use crate::bits::{clz32, shift_right_i32};
use crate::error::Result;
use crate::fixed64;
use crate::poly;

/// Number of fractional bits.
pub const SHIFT: i32 = 16;
/// Mask covering the fractional bits.
pub const FRACTION_MASK: i32 = (1 << SHIFT) - 1;
/// Mask covering the integer bits.
pub const INTEGER_MASK: i32 = !FRACTION_MASK;

/// Raw zero.
pub const ZERO: i32 = 0;
/// Raw -1.0.
pub const NEG_ONE: i32 = -(1 << SHIFT);
/// Raw 1.0.
pub const ONE: i32 = 1 << SHIFT;
/// Raw 2.0.
pub const TWO: i32 = 2 << SHIFT;
/// Raw 3.0.
pub const THREE: i32 = 3 << SHIFT;
/// Raw 4.0.
pub const FOUR: i32 = 4 << SHIFT;
/// Raw 0.5.
pub const HALF: i32 = ONE >> 1;
/// Raw pi.
pub const PI: i32 = (fixed64::PI >> 16) as i32;
/// Raw 2*pi.
pub const TWO_PI: i32 = (fixed64::TWO_PI >> 16) as i32;
/// Raw pi/2.
pub const PI_HALF: i32 = (fixed64::PI_HALF >> 16) as i32;
/// Raw e.
pub const E: i32 = (fixed64::E >> 16) as i32;
/// Smallest representable value.
pub const MIN_VALUE: i32 = i32::MIN;
/// Largest representable value.
pub const MAX_VALUE: i32 = i32::MAX;

// Private constants
const RCP_LN2: i32 = (0x1_7154_7652i64 >> 16) as i32; // 1.0 / ln(2.0)
const RCP_LOG2_E: i32 = (2977044471i64 >> 16) as i32; // 1.0 / log2(e)
const RCP_TWO_PI: i32 = 683565276; // 1.0 / (4.0 * 0.5 * pi) as s2.30

const SQRT2: i32 = 1518500249; // sqrt(2.0) as s2.30
const HALF_SQRT2: i32 = 759250125; // 0.5 * sqrt(2.0) as s2.30

// ============================================================================
// Conversions
// ============================================================================

/// Converts an integer to a fixed-point value. Wraps out-of-range inputs.
#[inline]
pub fn from_int(v: i32) -> i32 {
    v.wrapping_shl(SHIFT as u32)
}

/// Converts a double to a fixed-point value.
///
/// Unlike the wrapping integer arithmetic, the float boundary clamps:
/// out-of-range inputs saturate to [`MIN_VALUE`]/[`MAX_VALUE`] and NaN maps
/// to 0.
#[inline]
pub fn from_double(v: f64) -> i32 {
    (v * 65536.0) as i32
}

/// Converts a float to a fixed-point value, clamping like [`from_double`].
#[inline]
pub fn from_float(v: f32) -> i32 {
    (v * 65536.0) as i32
}

/// Converts a fixed-point value into a double.
#[inline]
pub fn to_double(v: i32) -> f64 {
    v as f64 * (1.0 / 65536.0)
}

/// Converts a fixed-point value into a float.
#[inline]
pub fn to_float(v: i32) -> f32 {
    v as f32 * (1.0 / 65536.0)
}

/// Converts a fixed-point value into an integer by rounding up.
#[inline]
pub fn ceil_to_int(v: i32) -> i32 {
    v.wrapping_add(ONE - 1) >> SHIFT
}

/// Converts a fixed-point value into an integer by rounding down.
#[inline]
pub fn floor_to_int(v: i32) -> i32 {
    v >> SHIFT
}

/// Converts a fixed-point value into an integer by rounding to nearest.
#[inline]
pub fn round_to_int(v: i32) -> i32 {
    v.wrapping_add(HALF) >> SHIFT
}

/// Formats the value as a decimal string.
pub fn to_string(v: i32) -> String {
    format!("{}", to_double(v))
}

/// Parses a decimal string (`[+-]digits[.digits]`) into a raw value.
///
/// Same deterministic integer conversion as [`fixed64::from_str`], scaled
/// by 2^16 with round-half-up on the fraction.
pub fn from_str(s: &str) -> Result<i32> {
    fixed64::parse_decimal(s, SHIFT as u32, i32::MAX as i64).map(|v| v as i32)
}

// ============================================================================
// Utility
// ============================================================================

/// Returns the absolute value of x. Wraps for the minimum value.
#[inline]
pub fn abs(x: i32) -> i32 {
    if x < 0 {
        x.wrapping_neg()
    } else {
        x
    }
}

/// Negative absolute value (returns -abs(x)).
#[inline]
pub fn nabs(x: i32) -> i32 {
    if x > 0 {
        -x
    } else {
        x
    }
}

/// Rounds up to the nearest integer value.
#[inline]
pub fn ceil(x: i32) -> i32 {
    x.wrapping_add(FRACTION_MASK) & INTEGER_MASK
}

/// Rounds down to the nearest integer value.
#[inline]
pub fn floor(x: i32) -> i32 {
    x & INTEGER_MASK
}

/// Rounds to the nearest integer value.
#[inline]
pub fn round(x: i32) -> i32 {
    x.wrapping_add(HALF) & INTEGER_MASK
}

/// Returns the fractional part of x, equal to `x - floor(x)`.
#[inline]
pub fn fract(x: i32) -> i32 {
    x & FRACTION_MASK
}

/// Returns the minimum of the two values.
#[inline]
pub fn min(a: i32, b: i32) -> i32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of the two values.
#[inline]
pub fn max(a: i32, b: i32) -> i32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Returns the value clamped between lo and hi.
#[inline]
pub fn clamp(a: i32, lo: i32, hi: i32) -> i32 {
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
pub fn sign(x: i32) -> i32 {
    if x == 0 {
        0
    } else if x < 0 {
        -1
    } else {
        1
    }
}

/// Linearly interpolates from a to b by t: `a*(1-t) + b*t`.
#[inline]
pub fn lerp(a: i32, b: i32, t: i32) -> i32 {
    mul(a, ONE.wrapping_sub(t)).wrapping_add(mul(b, t))
}

// ============================================================================
// Basic arithmetic
// ============================================================================

/// Adds the two values, wrapping on overflow.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Subtracts b from a, wrapping on overflow.
#[inline]
pub fn sub(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Multiplies two values with a single widening multiply, truncating back
/// to raw. Wraps when the true product exceeds the format range.
#[inline]
pub fn mul(a: i32, b: i32) -> i32 {
    ((a as i64 * b as i64) >> SHIFT) as i32
}

/// Divides two values exactly through a widening division, truncating
/// toward zero.
///
/// Returns 0 when b is 0; quotients beyond the format range wrap through
/// the narrowing cast.
pub fn div_precise(a: i32, b: i32) -> i32 {
    if b == 0 {
        return 0;
    }
    (((a as i64) << SHIFT) / b as i64) as i32
}

#[inline]
fn div_approx(a: i32, b: i32, rcp_poly: fn(i32) -> i32) -> i32 {
    if b == MIN_VALUE || b == 0 {
        return 0;
    }

    // Handle negative values.
    let sign: i32 = if b < 0 { -1 } else { 1 };
    let b = b.wrapping_mul(sign);

    // Normalize input into [1.0, 2.0) range (convert to s2.30).
    let offset = 29 - clz32(b as u32);
    let n = shift_right_i32(b, offset - 28);
    debug_assert!(n >= poly::ONE);

    // Polynomial approximation.
    let res = rcp_poly(n.wrapping_sub(poly::ONE));

    // Multiply by reciprocal, apply exponent, convert back to s16.16.
    let y = poly::qmul30(res, a);
    shift_right_i32(sign.wrapping_mul(y), offset - 14)
}

/// Divides two values using the precise-tier reciprocal approximation.
///
/// Returns 0 when the divisor is 0 or [`MIN_VALUE`].
pub fn div(a: i32, b: i32) -> i32 {
    div_approx(a, b, poly::rcp_poly4_lut8)
}

/// Divides two values using the fast-tier reciprocal approximation.
///
/// Returns 0 when the divisor is 0 or [`MIN_VALUE`].
pub fn div_fast(a: i32, b: i32) -> i32 {
    div_approx(a, b, poly::rcp_poly6)
}

/// Divides two values using the fastest-tier reciprocal approximation.
///
/// Returns 0 when the divisor is 0 or [`MIN_VALUE`].
pub fn div_fastest(a: i32, b: i32) -> i32 {
    div_approx(a, b, poly::rcp_poly4)
}

/// Truncated remainder: `a - trunc(a/b)*b`. Returns 0 when b is 0.
pub fn rem(a: i32, b: i32) -> i32 {
    if b == 0 {
        return 0;
    }
    let di = a.wrapping_div(b);
    a.wrapping_sub(di.wrapping_mul(b))
}

// ============================================================================
// Square root and reciprocal
// ============================================================================

/// Calculates the square root exactly by widening into the s32.32 digit
/// recurrence. Non-positive inputs return 0.
pub fn sqrt_precise(a: i32) -> i32 {
    if a <= 0 {
        return 0;
    }
    (fixed64::sqrt_precise((a as i64) << SHIFT) >> SHIFT) as i32
}

#[inline]
fn sqrt_approx(x: i32, sqrt_poly: fn(i32) -> i32) -> i32 {
    // Return 0 for all non-positive values.
    if x <= 0 {
        return 0;
    }

    // Normalize input into [1.0, 2.0) range (as s2.30).
    let offset = 15 - clz32(x as u32);
    let n = shift_right_i32(x, offset - 14);
    debug_assert!(n >= poly::ONE);
    let y = sqrt_poly(n.wrapping_sub(poly::ONE));

    // Halve the exponent; odd exponents pick up a sqrt(2) factor.
    let adjust = if offset & 1 != 0 { SQRT2 } else { poly::ONE };
    let offset = offset >> 1;

    // Apply exponent, convert back to s16.16.
    let yr = poly::qmul30(adjust, y);
    shift_right_i32(yr, 14 - offset)
}

/// Calculates the square root with the precise tier. Non-positive inputs
/// return 0.
pub fn sqrt(x: i32) -> i32 {
    sqrt_approx(x, poly::sqrt_poly3_lut8)
}

/// Calculates the square root with the fast tier. Non-positive inputs
/// return 0.
pub fn sqrt_fast(x: i32) -> i32 {
    sqrt_approx(x, poly::sqrt_poly4)
}

/// Calculates the square root with the fastest tier. Non-positive inputs
/// return 0.
pub fn sqrt_fastest(x: i32) -> i32 {
    sqrt_approx(x, poly::sqrt_poly3)
}

#[inline]
fn rsqrt_approx(x: i32, rsqrt_poly: fn(i32) -> i32) -> i32 {
    // Return 0 for invalid values.
    if x <= 0 {
        return 0;
    }

    // Normalize input into [1.0, 2.0) range (as s2.30).
    let offset = 1 - clz32(x as u32);
    let n = shift_right_i32(x, offset);
    debug_assert!(n >= poly::ONE);
    let y = rsqrt_poly(n.wrapping_sub(poly::ONE));

    // Halve the exponent; odd exponents pick up a 1/sqrt(2) factor.
    let adjust = if offset & 1 != 0 { HALF_SQRT2 } else { poly::ONE };
    let offset = offset >> 1;

    // Apply inverted exponent, convert back to s16.16.
    let yr = poly::qmul30(adjust, y);
    shift_right_i32(yr, offset + 21)
}

/// Calculates the reciprocal square root with the precise tier.
/// Non-positive inputs return 0.
pub fn rsqrt(x: i32) -> i32 {
    rsqrt_approx(x, poly::rsqrt_poly3_lut16)
}

/// Calculates the reciprocal square root with the fast tier. Non-positive
/// inputs return 0.
pub fn rsqrt_fast(x: i32) -> i32 {
    rsqrt_approx(x, poly::rsqrt_poly5)
}

/// Calculates the reciprocal square root with the fastest tier.
/// Non-positive inputs return 0.
pub fn rsqrt_fastest(x: i32) -> i32 {
    rsqrt_approx(x, poly::rsqrt_poly3)
}

#[inline]
fn rcp_approx(x: i32, rcp_poly: fn(i32) -> i32) -> i32 {
    if x == MIN_VALUE || x == 0 {
        return 0;
    }

    // Handle negative values.
    let sign: i32 = if x < 0 { -1 } else { 1 };
    let x = x.wrapping_mul(sign);

    // Normalize input into [1.0, 2.0) range (convert to s2.30).
    let offset = 29 - clz32(x as u32);
    let n = shift_right_i32(x, offset - 28);
    debug_assert!(n >= poly::ONE);

    // Polynomial approximation.
    let res = rcp_poly(n.wrapping_sub(poly::ONE));

    // Apply exponent, convert back to s16.16.
    shift_right_i32(sign.wrapping_mul(res), offset)
}

/// Calculates the reciprocal with the precise tier. Returns 0 for 0 and
/// [`MIN_VALUE`].
pub fn rcp(x: i32) -> i32 {
    rcp_approx(x, poly::rcp_poly4_lut8)
}

/// Calculates the reciprocal with the fast tier. Returns 0 for 0 and
/// [`MIN_VALUE`].
pub fn rcp_fast(x: i32) -> i32 {
    rcp_approx(x, poly::rcp_poly6)
}

/// Calculates the reciprocal with the fastest tier. Returns 0 for 0 and
/// [`MIN_VALUE`].
pub fn rcp_fastest(x: i32) -> i32 {
    rcp_approx(x, poly::rcp_poly4)
}

// ============================================================================
// Exponentials and logarithms
// ============================================================================

#[inline]
fn exp2_approx(x: i32, exp2_poly: fn(i32) -> i32) -> i32 {
    // Handle values that would under or overflow.
    if x >= 15 * ONE {
        return MAX_VALUE;
    }
    if x <= -16 * ONE {
        return 0;
    }

    // Compute exp2 for the fractional part.
    let k = (x & FRACTION_MASK) << 14;
    let y = exp2_poly(k);

    // Combine integer and fractional parts, convert back to s16.16.
    let int_part = x >> SHIFT;
    shift_right_i32(y, 14 - int_part)
}

/// Calculates the base-2 exponent with the precise tier.
///
/// Saturates to [`MAX_VALUE`] at or above 15.0 and to 0 at or below -16.0.
pub fn exp2(x: i32) -> i32 {
    exp2_approx(x, poly::exp2_poly5)
}

/// Calculates the base-2 exponent with the fast tier. Saturates like
/// [`exp2`].
pub fn exp2_fast(x: i32) -> i32 {
    exp2_approx(x, poly::exp2_poly4)
}

/// Calculates the base-2 exponent with the fastest tier. Saturates like
/// [`exp2`].
pub fn exp2_fastest(x: i32) -> i32 {
    exp2_approx(x, poly::exp2_poly3)
}

/// Calculates the natural exponent with the precise tier.
pub fn exp(x: i32) -> i32 {
    // e^x == 2^(x / ln(2))
    exp2(mul(x, RCP_LN2))
}

/// Calculates the natural exponent with the fast tier.
pub fn exp_fast(x: i32) -> i32 {
    exp2_fast(mul(x, RCP_LN2))
}

/// Calculates the natural exponent with the fastest tier.
pub fn exp_fastest(x: i32) -> i32 {
    exp2_fastest(mul(x, RCP_LN2))
}

#[inline]
fn log_approx(x: i32, log_poly: fn(i32) -> i32) -> i32 {
    // Return 0 for invalid values.
    if x <= 0 {
        return 0;
    }

    // Normalize value to range [1.0, 2.0) as s2.30 and extract exponent.
    let offset = 15 - clz32(x as u32);
    let n = shift_right_i32(x, offset - 14);
    debug_assert!(n >= poly::ONE);
    let y = log_poly(n.wrapping_sub(poly::ONE));

    // Combine integer and fractional parts (into s16.16).
    offset.wrapping_mul(RCP_LOG2_E).wrapping_add(y >> 14)
}

/// Calculates the natural logarithm with the precise tier. Non-positive
/// inputs return 0.
pub fn log(x: i32) -> i32 {
    log_approx(x, poly::log_poly5_lut8)
}

/// Calculates the natural logarithm with the fast tier. Non-positive
/// inputs return 0.
pub fn log_fast(x: i32) -> i32 {
    log_approx(x, poly::log_poly3_lut8)
}

/// Calculates the natural logarithm with the fastest tier. Non-positive
/// inputs return 0.
pub fn log_fastest(x: i32) -> i32 {
    log_approx(x, poly::log_poly5)
}

#[inline]
fn log2_approx(x: i32, log2_poly: fn(i32) -> i32) -> i32 {
    // Return 0 for invalid values.
    if x <= 0 {
        return 0;
    }

    // Normalize value to range [1.0, 2.0) as s2.30 and extract exponent.
    let offset = 15 - clz32(x as u32);
    let n = shift_right_i32(x, offset - 14);
    debug_assert!(n >= poly::ONE);
    let y = log2_poly(n.wrapping_sub(poly::ONE));

    // Combine integer and fractional parts (into s16.16).
    (offset << SHIFT).wrapping_add(y >> 14)
}

/// Calculates the base-2 logarithm with the precise tier. Non-positive
/// inputs return 0.
pub fn log2(x: i32) -> i32 {
    log2_approx(x, poly::log2_poly4_lut16)
}

/// Calculates the base-2 logarithm with the fast tier. Non-positive inputs
/// return 0.
pub fn log2_fast(x: i32) -> i32 {
    log2_approx(x, poly::log2_poly3_lut16)
}

/// Calculates the base-2 logarithm with the fastest tier. Non-positive
/// inputs return 0.
pub fn log2_fastest(x: i32) -> i32 {
    log2_approx(x, poly::log2_poly5)
}

/// Calculates x to the power of the exponent with the precise tier.
///
/// Non-positive bases return 0.
pub fn pow(x: i32, exponent: i32) -> i32 {
    if x <= 0 {
        return 0;
    }
    exp(mul(exponent, log(x)))
}

/// Calculates x to the power of the exponent with the fast tier.
/// Non-positive bases return 0.
pub fn pow_fast(x: i32, exponent: i32) -> i32 {
    if x <= 0 {
        return 0;
    }
    exp_fast(mul(exponent, log_fast(x)))
}

/// Calculates x to the power of the exponent with the fastest tier.
/// Non-positive bases return 0.
pub fn pow_fastest(x: i32, exponent: i32) -> i32 {
    if x <= 0 {
        return 0;
    }
    exp_fastest(mul(exponent, log_fastest(x)))
}

// ============================================================================
// Trigonometry
// ============================================================================

#[inline]
fn sin_approx(x: i32, sin_poly: fn(i32) -> i32) -> i32 {
    // Map [0, 2pi] to [0, 4] quarter turns (as s2.30); the truncating
    // multiply also wraps the angle into one period.
    let mut z = mul(RCP_TWO_PI, x);

    // Quadrants 1 and 2 occupy [1, 3] and mirror onto [-1, 1] via 2 - z;
    // their top two raw bits differ, which the xor test picks out.
    if (z ^ (z << 1)) < 0 {
        z = i32::MIN.wrapping_sub(z);
    }

    // Now z is within [-1, 1] (s2.30).
    debug_assert!((-poly::ONE..=poly::ONE).contains(&z));

    // Odd polynomial in z: evaluate on z*z, multiply once by z.
    let zz = poly::qmul30(z, z);
    let res = poly::qmul30(sin_poly(zz), z);

    // Convert back to s16.16.
    res >> 14
}

/// Calculates the sine with the precise tier.
pub fn sin(x: i32) -> i32 {
    sin_approx(x, poly::sin_poly4)
}

/// Calculates the sine with the fast tier.
pub fn sin_fast(x: i32) -> i32 {
    sin_approx(x, poly::sin_poly3)
}

/// Calculates the sine with the fastest tier.
pub fn sin_fastest(x: i32) -> i32 {
    sin_approx(x, poly::sin_poly2)
}

/// Calculates the cosine with the precise tier.
pub fn cos(x: i32) -> i32 {
    sin(x.wrapping_add(PI_HALF))
}

/// Calculates the cosine with the fast tier.
pub fn cos_fast(x: i32) -> i32 {
    sin_fast(x.wrapping_add(PI_HALF))
}

/// Calculates the cosine with the fastest tier.
pub fn cos_fastest(x: i32) -> i32 {
    sin_fastest(x.wrapping_add(PI_HALF))
}

/// Calculates the tangent with the precise tier.
///
/// Returns 0 where the cosine rounds to zero (the poles).
pub fn tan(x: i32) -> i32 {
    mul(sin(x), rcp(cos(x)))
}

/// Calculates the tangent with the fast tier. Returns 0 at the poles.
pub fn tan_fast(x: i32) -> i32 {
    mul(sin_fast(x), rcp_fast(cos_fast(x)))
}

/// Calculates the tangent with the fastest tier. Returns 0 at the poles.
pub fn tan_fastest(x: i32) -> i32 {
    mul(sin_fastest(x), rcp_fastest(cos_fastest(x)))
}

// First-octant ratio y/x as s2.30, for 0 <= y <= x.
#[inline]
fn atan2_div(y: i32, x: i32, rcp_poly: fn(i32) -> i32) -> i32 {
    debug_assert!(y >= 0 && x > 0 && x >= y);

    // Normalize input into [1.0, 2.0) range (convert to s2.30).
    let offset = 1 - clz32(x as u32);
    let n = shift_right_i32(x, offset);
    debug_assert!(n >= poly::ONE);

    // Polynomial approximation of the reciprocal. The fastest tier's
    // truncated evaluation undershoots 0.5 by one ulp at the top of the
    // mantissa range, so the lower bound tolerates that.
    let oox = rcp_poly(n.wrapping_sub(poly::ONE));
    debug_assert!(oox >= poly::ONE / 2 - 1 && oox <= poly::ONE);

    // Apply exponent and multiply.
    let yr = shift_right_i32(y, offset);
    poly::qmul30(yr, oox)
}

/// Calculates the angle of the vector (x, y) with the precise tier.
///
/// Results on the axes are exact: `atan2(0, x)` is 0 or pi and
/// `atan2(y, 0)` is plus or minus pi/2; the origin maps to 0.
pub fn atan2(y: i32, x: i32) -> i32 {
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

    let nx = abs(x);
    let ny = abs(y);
    let neg_mask = (x ^ y) >> 31;

    if nx >= ny {
        let k = atan2_div(ny, nx, poly::rcp_poly4_lut8);
        let z = poly::atan_poly5_lut8(k);
        let angle = (neg_mask ^ (z >> 14)).wrapping_sub(neg_mask);
        if x > 0 {
            return angle;
        }
        if y >= 0 {
            return angle.wrapping_add(PI);
        }
        angle.wrapping_sub(PI)
    } else {
        let k = atan2_div(nx, ny, poly::rcp_poly4_lut8);
        let z = poly::atan_poly5_lut8(k);
        let angle = neg_mask ^ (z >> 14);
        (if y > 0 { PI_HALF } else { -PI_HALF }).wrapping_sub(angle)
    }
}

#[inline]
fn atan2_masked(
    y: i32,
    x: i32,
    rcp_poly: fn(i32) -> i32,
    atan_poly: fn(i32) -> i32,
) -> i32 {
    if x == 0 {
        if y > 0 {
            return PI_HALF;
        }
        if y < 0 {
            return -PI_HALF;
        }
        return 0;
    }
    if y == 0 {
        return if x > 0 { 0 } else { PI };
    }

    let nx = abs(x);
    let ny = abs(y);
    let neg_mask = (x ^ y) >> 31;

    if nx >= ny {
        let k = atan2_div(ny, nx, rcp_poly);
        let z = atan_poly(k);
        let angle = neg_mask ^ (z >> 14);
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
        let angle = neg_mask ^ (z >> 14);
        (if y > 0 { PI_HALF } else { -PI_HALF }).wrapping_sub(angle)
    }
}

/// Calculates the angle of the vector (x, y) with the fast tier. Axis
/// results are exact as in [`atan2`].
pub fn atan2_fast(y: i32, x: i32) -> i32 {
    atan2_masked(y, x, poly::rcp_poly6, poly::atan_poly3_lut8)
}

/// Calculates the angle of the vector (x, y) with the fastest tier. Axis
/// results are exact as in [`atan2`].
pub fn atan2_fastest(y: i32, x: i32) -> i32 {
    atan2_masked(y, x, poly::rcp_poly4, poly::atan_poly4)
}

/// Calculates the arctangent with the precise tier.
pub fn atan(x: i32) -> i32 {
    atan2(x, ONE)
}

/// Calculates the arctangent with the fast tier.
pub fn atan_fast(x: i32) -> i32 {
    atan2_fast(x, ONE)
}

/// Calculates the arctangent with the fastest tier.
pub fn atan_fastest(x: i32) -> i32 {
    atan2_fastest(x, ONE)
}

/// Calculates the arcsine with the precise tier by escalating into the
/// s32.32 kernel.
///
/// Inputs outside [-1, 1] return 0.
pub fn asin(x: i32) -> i32 {
    if !(-ONE..=ONE).contains(&x) {
        return 0;
    }
    // (1+x)*(1-x) as a direct widening product is already s32.32.
    let xx = (ONE + x) as i64 * (ONE - x) as i64;
    let y = fixed64::sqrt(xx);
    (fixed64::atan2((x as i64) << SHIFT, y) >> SHIFT) as i32
}

/// Calculates the arcsine with the fast tier. Inputs outside [-1, 1]
/// return 0.
pub fn asin_fast(x: i32) -> i32 {
    if !(-ONE..=ONE).contains(&x) {
        return 0;
    }
    let xx = (ONE + x) as i64 * (ONE - x) as i64;
    let y = fixed64::sqrt_fast(xx);
    (fixed64::atan2_fast((x as i64) << SHIFT, y) >> SHIFT) as i32
}

/// Calculates the arcsine with the fastest tier. Inputs outside [-1, 1]
/// return 0.
pub fn asin_fastest(x: i32) -> i32 {
    if !(-ONE..=ONE).contains(&x) {
        return 0;
    }
    let xx = (ONE + x) as i64 * (ONE - x) as i64;
    let y = fixed64::sqrt_fastest(xx);
    (fixed64::atan2_fastest((x as i64) << SHIFT, y) >> SHIFT) as i32
}

/// Calculates the arccosine with the precise tier by escalating into the
/// s32.32 kernel.
///
/// Inputs outside [-1, 1] return 0.
pub fn acos(x: i32) -> i32 {
    if !(-ONE..=ONE).contains(&x) {
        return 0;
    }
    let xx = (ONE + x) as i64 * (ONE - x) as i64;
    let y = fixed64::sqrt(xx);
    (fixed64::atan2(y, (x as i64) << SHIFT) >> SHIFT) as i32
}

/// Calculates the arccosine with the fast tier. Inputs outside [-1, 1]
/// return 0.
pub fn acos_fast(x: i32) -> i32 {
    if !(-ONE..=ONE).contains(&x) {
        return 0;
    }
    let xx = (ONE + x) as i64 * (ONE - x) as i64;
    let y = fixed64::sqrt_fast(xx);
    (fixed64::atan2_fast(y, (x as i64) << SHIFT) >> SHIFT) as i32
}

/// Calculates the arccosine with the fastest tier. Inputs outside [-1, 1]
/// return 0.
pub fn acos_fastest(x: i32) -> i32 {
    if !(-ONE..=ONE).contains(&x) {
        return 0;
    }
    let xx = (ONE + x) as i64 * (ONE - x) as i64;
    let y = fixed64::sqrt_fastest(xx);
    (fixed64::atan2_fastest(y, (x as i64) << SHIFT) >> SHIFT) as i32
}
