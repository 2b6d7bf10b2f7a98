//! Shared polynomial and table-lookup evaluation engine.
//!
//! All evaluators operate in the s2.30 domain: the input is a normalized
//! mantissa offset `a` in `[0.0, 1.0)` (arctangent accepts up to exactly
//! `1.0`) and the output is again s2.30. Each transcendental primitive has
//! three evaluators, one per precision tier:
//!
//! - **Precise**: segmented minimax polynomials (LUT variants) or the
//!   highest-degree plain polynomial, worst case roughly 23-28 bits
//! - **Fast**: mid-degree plain polynomials, roughly 16-19 bits
//! - **Fastest**: low-degree plain polynomials, roughly 10-13 bits
//!
//! Segmented evaluators select a coefficient row by the top bits of the
//! mantissa offset and run the same Horner recurrence on that row. All
//! arithmetic wraps on overflow; results are bit-exact by construction.

mod coefficients;

use coefficients as coef;

/// One in the s2.30 evaluation domain.
pub const ONE: i32 = 1 << 30;

/// Multiplies two s2.30 values, truncating the result back to s2.30.
#[inline]
pub fn qmul30(a: i32, b: i32) -> i32 {
    ((a as i64 * b as i64) >> 30) as i32
}

/// Horner evaluation over one coefficient row.
///
/// The row is highest-order first; the final entry is added as the constant
/// term after the last multiply.
#[inline]
fn horner(a: i32, row: &[i32]) -> i32 {
    let mut y = qmul30(a, row[0]);
    for &c in &row[1..row.len() - 1] {
        y = qmul30(a, y.wrapping_add(c));
    }
    y.wrapping_add(row[row.len() - 1])
}

#[inline]
fn horner_lut(a: i32, table: &[i32], index_shift: i32, row_len: usize) -> i32 {
    let row = ((a >> index_shift) as usize) * row_len;
    horner(a, &table[row..row + row_len])
}

// ============================================================================
// Base-2 exponential
// ============================================================================

/// exp2 mantissa polynomial, fastest tier (~13.2 bits).
pub fn exp2_poly3(a: i32) -> i32 {
    horner(a, &coef::EXP2_POLY3)
}

/// exp2 mantissa polynomial, fast tier (~18.2 bits).
pub fn exp2_poly4(a: i32) -> i32 {
    horner(a, &coef::EXP2_POLY4)
}

/// exp2 mantissa polynomial, precise tier (~23.4 bits).
pub fn exp2_poly5(a: i32) -> i32 {
    horner(a, &coef::EXP2_POLY5)
}

// ============================================================================
// Reciprocal
// ============================================================================

/// Reciprocal mantissa polynomial, fastest tier (~11.3 bits).
pub fn rcp_poly4(a: i32) -> i32 {
    horner(a, &coef::RCP_POLY4)
}

/// Reciprocal mantissa polynomial, fast tier (~16.5 bits).
pub fn rcp_poly6(a: i32) -> i32 {
    horner(a, &coef::RCP_POLY6)
}

/// Segmented reciprocal mantissa polynomial, precise tier (~24.1 bits).
pub fn rcp_poly4_lut8(a: i32) -> i32 {
    horner_lut(a, &coef::RCP_POLY4_LUT8, 27, 5)
}

// ============================================================================
// Square root
// ============================================================================

/// sqrt mantissa polynomial, fastest tier (~13.4 bits).
pub fn sqrt_poly3(a: i32) -> i32 {
    horner(a, &coef::SQRT_POLY3)
}

/// sqrt mantissa polynomial, fast tier (~16.5 bits).
pub fn sqrt_poly4(a: i32) -> i32 {
    horner(a, &coef::SQRT_POLY4)
}

/// Segmented sqrt mantissa polynomial, precise tier (~23.6 bits).
pub fn sqrt_poly3_lut8(a: i32) -> i32 {
    horner_lut(a, &coef::SQRT_POLY3_LUT8, 27, 4)
}

// ============================================================================
// Reciprocal square root
// ============================================================================

/// rsqrt mantissa polynomial, fastest tier (~10.6 bits).
pub fn rsqrt_poly3(a: i32) -> i32 {
    horner(a, &coef::RSQRT_POLY3)
}

/// rsqrt mantissa polynomial, fast tier (~16.1 bits).
pub fn rsqrt_poly5(a: i32) -> i32 {
    horner(a, &coef::RSQRT_POLY5)
}

/// Segmented rsqrt mantissa polynomial, precise tier (~24.6 bits).
pub fn rsqrt_poly3_lut16(a: i32) -> i32 {
    horner_lut(a, &coef::RSQRT_POLY3_LUT16, 26, 4)
}

// ============================================================================
// Natural logarithm
// ============================================================================

/// ln mantissa polynomial, fastest tier (~12.2 bits).
pub fn log_poly5(a: i32) -> i32 {
    horner(a, &coef::LOG_POLY5)
}

/// Segmented ln mantissa polynomial, fast tier (~15.4 bits).
pub fn log_poly3_lut8(a: i32) -> i32 {
    horner_lut(a, &coef::LOG_POLY3_LUT8, 27, 4)
}

/// Segmented ln mantissa polynomial, precise tier (~26.2 bits).
pub fn log_poly5_lut8(a: i32) -> i32 {
    horner_lut(a, &coef::LOG_POLY5_LUT8, 27, 6)
}

// ============================================================================
// Base-2 logarithm
// ============================================================================

/// log2 mantissa polynomial, fastest tier (~12.3 bits).
pub fn log2_poly5(a: i32) -> i32 {
    horner(a, &coef::LOG2_POLY5)
}

/// Segmented log2 mantissa polynomial, fast tier (~18.8 bits).
pub fn log2_poly3_lut16(a: i32) -> i32 {
    horner_lut(a, &coef::LOG2_POLY3_LUT16, 26, 4)
}

/// Segmented log2 mantissa polynomial, precise tier (~25.2 bits).
pub fn log2_poly4_lut16(a: i32) -> i32 {
    horner_lut(a, &coef::LOG2_POLY4_LUT16, 26, 5)
}

// ============================================================================
// Unit sine
// ============================================================================

/// Unit sine polynomial in the squared argument, fastest tier (~12.6 bits).
pub fn sin_poly2(a: i32) -> i32 {
    horner(a, &coef::SIN_POLY2)
}

/// Unit sine polynomial in the squared argument, fast tier (~19.6 bits).
pub fn sin_poly3(a: i32) -> i32 {
    horner(a, &coef::SIN_POLY3)
}

/// Unit sine polynomial in the squared argument, precise tier (~27.1 bits).
pub fn sin_poly4(a: i32) -> i32 {
    horner(a, &coef::SIN_POLY4)
}

// ============================================================================
// Arctangent
// ============================================================================

/// Arctangent polynomial on a first-octant ratio, fastest tier (~11.5 bits).
pub fn atan_poly4(a: i32) -> i32 {
    horner(a, &coef::ATAN_POLY4)
}

/// Segmented arctangent polynomial, fast tier (~18.0 bits).
pub fn atan_poly3_lut8(a: i32) -> i32 {
    horner_lut(a, &coef::ATAN_POLY3_LUT8, 27, 4)
}

/// Segmented arctangent polynomial, precise tier (~28.1 bits).
pub fn atan_poly5_lut8(a: i32) -> i32 {
    horner_lut(a, &coef::ATAN_POLY5_LUT8, 27, 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_f64(x: i32) -> f64 {
        x as f64 / ONE as f64
    }

    fn check(eval: fn(i32) -> i32, reference: fn(f64) -> f64, tol: f64) {
        // Sweep the mantissa offset domain [0, 1).
        for i in 0..512 {
            let a = i * (ONE / 512);
            let got = to_f64(eval(a));
            let want = reference(to_f64(a));
            assert!(
                (got - want).abs() < tol,
                "a={} got={} want={}",
                to_f64(a),
                got,
                want
            );
        }
    }

    #[test]
    fn qmul30_squares_one() {
        assert_eq!(qmul30(ONE, ONE), ONE);
        assert_eq!(qmul30(ONE / 2, ONE / 2), ONE / 4);
        assert_eq!(qmul30(-ONE, ONE), -ONE);
    }

    #[test]
    fn exp2_tiers_match_reference() {
        check(exp2_poly5, |x| x.exp2(), 1e-6);
        check(exp2_poly4, |x| x.exp2(), 1e-5);
        check(exp2_poly3, |x| x.exp2(), 2e-4);
    }

    #[test]
    fn rcp_tiers_match_reference() {
        check(rcp_poly4_lut8, |x| 1.0 / (1.0 + x), 1e-6);
        check(rcp_poly6, |x| 1.0 / (1.0 + x), 2e-5);
        check(rcp_poly4, |x| 1.0 / (1.0 + x), 5e-4);
    }

    #[test]
    fn sqrt_tiers_match_reference() {
        check(sqrt_poly3_lut8, |x| (1.0 + x).sqrt(), 1e-6);
        check(sqrt_poly4, |x| (1.0 + x).sqrt(), 2e-5);
        check(sqrt_poly3, |x| (1.0 + x).sqrt(), 2e-4);
    }

    #[test]
    fn rsqrt_tiers_match_reference() {
        check(rsqrt_poly3_lut16, |x| 1.0 / (1.0 + x).sqrt(), 1e-6);
        check(rsqrt_poly5, |x| 1.0 / (1.0 + x).sqrt(), 2e-5);
        check(rsqrt_poly3, |x| 1.0 / (1.0 + x).sqrt(), 1e-3);
    }

    #[test]
    fn log_tiers_match_reference() {
        check(log_poly5_lut8, |x| (1.0 + x).ln(), 1e-7);
        check(log_poly3_lut8, |x| (1.0 + x).ln(), 5e-5);
        check(log_poly5, |x| (1.0 + x).ln(), 5e-4);
    }

    #[test]
    fn log2_tiers_match_reference() {
        check(log2_poly4_lut16, |x| (1.0 + x).log2(), 1e-6);
        check(log2_poly3_lut16, |x| (1.0 + x).log2(), 5e-5);
        check(log2_poly5, |x| (1.0 + x).log2(), 5e-4);
    }

    #[test]
    fn sin_tiers_match_reference() {
        // Input is z*z for z in [0, 1]; the evaluator returns sin(z*pi/2)/z.
        let reference = |zz: f64| {
            let z = zz.sqrt();
            if z == 0.0 {
                std::f64::consts::FRAC_PI_2
            } else {
                (z * std::f64::consts::FRAC_PI_2).sin() / z
            }
        };
        check(sin_poly4, reference, 1e-6);
        check(sin_poly3, reference, 2e-5);
        check(sin_poly2, reference, 1e-3);
    }

    #[test]
    fn atan_tiers_match_reference() {
        check(atan_poly5_lut8, |x| x.atan(), 1e-7);
        check(atan_poly3_lut8, |x| x.atan(), 1e-5);
        check(atan_poly4, |x| x.atan(), 5e-4);
    }

    #[test]
    fn atan_top_of_range_is_exact() {
        // 843314857 == round(atan(1.0) * 2^30)
        assert_eq!(atan_poly5_lut8(ONE), 843314857);
        assert_eq!(atan_poly3_lut8(ONE), 843314857);
    }
}
