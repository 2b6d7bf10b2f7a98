//! Bit-level primitives shared by both fixed-point kernels.
//!
//! Every transcendental function starts by normalizing its argument into the
//! s2.30 mantissa domain `[1.0, 2.0)`. That normalization is built from
//! leading-zero counts and shifts whose direction is encoded in the sign of
//! the shift amount: a negative amount shifts left. Centralizing the
//! dual-direction shifts here keeps the kernels free of ad-hoc direction
//! branches.

/// Number of leading zero bits in a 32-bit word. Returns 32 for zero.
#[inline]
pub fn clz32(x: u32) -> i32 {
    x.leading_zeros() as i32
}

/// Number of leading zero bits in a 64-bit word. Returns 64 for zero.
#[inline]
pub fn clz64(x: u64) -> i32 {
    x.leading_zeros() as i32
}

/// Arithmetic shift of a 32-bit value with direction encoded in the sign of
/// `amount`: non-negative amounts shift right, negative amounts shift left.
///
/// The magnitude of `amount` must be less than 32.
#[inline]
pub fn shift_right_i32(v: i32, amount: i32) -> i32 {
    if amount >= 0 {
        v >> amount
    } else {
        v << -amount
    }
}

/// Arithmetic shift of a 64-bit value with direction encoded in the sign of
/// `amount`: non-negative amounts shift right, negative amounts shift left.
///
/// The magnitude of `amount` must be less than 64.
#[inline]
pub fn shift_right_i64(v: i64, amount: i32) -> i64 {
    if amount >= 0 {
        v >> amount
    } else {
        v << -amount
    }
}

/// Right shift without sign extension.
///
/// Used where the shifted quantity is a raw bit pattern rather than a signed
/// magnitude, e.g. the low cross product inside the s32.32 multiply.
#[inline]
pub fn logical_shift_right_i64(v: i64, amount: i32) -> i64 {
    ((v as u64) >> amount) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clz_counts_leading_zeros() {
        assert_eq!(clz32(0), 32);
        assert_eq!(clz32(1), 31);
        assert_eq!(clz32(u32::MAX), 0);
        assert_eq!(clz64(0), 64);
        assert_eq!(clz64(1), 63);
        assert_eq!(clz64(1 << 32), 31);
        assert_eq!(clz64(u64::MAX), 0);
    }

    #[test]
    fn shift_right_positive_amount() {
        assert_eq!(shift_right_i32(256, 4), 16);
        assert_eq!(shift_right_i32(-256, 4), -16);
        assert_eq!(shift_right_i64(1 << 40, 8), 1 << 32);
        assert_eq!(shift_right_i64(-(1 << 40), 8), -(1 << 32));
    }

    #[test]
    fn shift_right_negative_amount_shifts_left() {
        assert_eq!(shift_right_i32(16, -4), 256);
        assert_eq!(shift_right_i32(-16, -4), -256);
        assert_eq!(shift_right_i64(1, -62), 1 << 62);
    }

    #[test]
    fn shift_right_zero_amount_is_identity() {
        assert_eq!(shift_right_i32(12345, 0), 12345);
        assert_eq!(shift_right_i64(-12345, 0), -12345);
    }

    #[test]
    fn shift_right_width_minus_one() {
        assert_eq!(shift_right_i32(-1, 31), -1);
        assert_eq!(shift_right_i32(i32::MAX, 31), 0);
        assert_eq!(shift_right_i64(-1, 63), -1);
        assert_eq!(shift_right_i64(i64::MAX, 63), 0);
    }

    #[test]
    fn logical_shift_ignores_sign() {
        assert_eq!(logical_shift_right_i64(-1, 32), 0xFFFF_FFFF);
        assert_eq!(logical_shift_right_i64(i64::MIN, 63), 1);
        assert_eq!(logical_shift_right_i64(256, 4), 16);
    }
}
