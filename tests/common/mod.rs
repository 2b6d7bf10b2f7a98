//! Common test utilities
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use fixr::{fixed32, fixed64};

/// Create a deterministically seeded RNG for sampling test inputs
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED_CAFE)
}

/// Assert an s32.32 result is close to a double reference
///
/// Uses the formula: |got - want| <= atol + rtol * |want|
pub fn assert_close64(got: i64, want: f64, rtol: f64, atol: f64, msg: &str) {
    let got = fixed64::to_double(got);
    let diff = (got - want).abs();
    let tol = atol + rtol * want.abs();
    assert!(
        diff <= tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        got,
        want,
        diff,
        tol
    );
}

/// Assert an s16.16 result is close to a double reference
pub fn assert_close32(got: i32, want: f64, rtol: f64, atol: f64, msg: &str) {
    let got = fixed32::to_double(got);
    let diff = (got - want).abs();
    let tol = atol + rtol * want.abs();
    assert!(
        diff <= tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        got,
        want,
        diff,
        tol
    );
}

/// Multiplicative sweep over [lo, hi], about 5% apart, as s32.32 values
pub fn sweep64(lo: f64, hi: f64) -> Vec<i64> {
    let mut out = Vec::new();
    let mut v = lo;
    while v <= hi {
        out.push(fixed64::from_double(v));
        v *= 1.05;
    }
    out
}

/// Multiplicative sweep over [lo, hi], about 5% apart, as s16.16 values
pub fn sweep32(lo: f64, hi: f64) -> Vec<i32> {
    let mut out = Vec::new();
    let mut v = lo;
    while v <= hi {
        out.push(fixed32::from_double(v));
        v *= 1.05;
    }
    out
}

/// Linear sweep of n points over [lo, hi] as s32.32 values
pub fn linspace64(lo: f64, hi: f64, n: usize) -> Vec<i64> {
    (0..n)
        .map(|i| fixed64::from_double(lo + (hi - lo) * i as f64 / (n - 1) as f64))
        .collect()
}

/// Linear sweep of n points over [lo, hi] as s16.16 values
pub fn linspace32(lo: f64, hi: f64, n: usize) -> Vec<i32> {
    (0..n)
        .map(|i| fixed32::from_double(lo + (hi - lo) * i as f64 / (n - 1) as f64))
        .collect()
}
