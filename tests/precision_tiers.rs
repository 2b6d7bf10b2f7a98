//! Cross-tier accuracy ordering.
//!
//! Each transcendental primitive ships three evaluators; these tests
//! measure worst-case error against a double reference over dense sweeps
//! and check both the per-tier bound and the precise <= fast <= fastest
//! ordering of the maxima.

mod common;

use common::{linspace32, linspace64, sweep32, sweep64};
use fixr::{fixed32, fixed64};

fn max_err(f: fn(i64) -> i64, reference: fn(f64) -> f64, inputs: &[i64]) -> f64 {
    let mut worst = 0.0f64;
    for &x in inputs {
        let got = fixed64::to_double(f(x));
        let want = reference(fixed64::to_double(x));
        worst = worst.max((got - want).abs());
    }
    worst
}

fn max_rel_err(f: fn(i64) -> i64, reference: fn(f64) -> f64, inputs: &[i64]) -> f64 {
    let mut worst = 0.0f64;
    for &x in inputs {
        let got = fixed64::to_double(f(x));
        let want = reference(fixed64::to_double(x));
        worst = worst.max((got - want).abs() / want.abs());
    }
    worst
}

#[test]
fn sin_tier_ordering() {
    let xs = linspace64(-7.0, 7.0, 2001);
    let precise = max_err(fixed64::sin, |x| x.sin(), &xs);
    let fast = max_err(fixed64::sin_fast, |x| x.sin(), &xs);
    let fastest = max_err(fixed64::sin_fastest, |x| x.sin(), &xs);

    assert!(precise < 1e-6, "precise worst {}", precise);
    assert!(fast < 1e-4, "fast worst {}", fast);
    assert!(fastest < 1e-3, "fastest worst {}", fastest);
    assert!(precise <= fast && fast <= fastest);
}

#[test]
fn sqrt_tier_ordering() {
    let xs = sweep64(0.01, 10_000.0);
    let precise = max_rel_err(fixed64::sqrt, |x| x.sqrt(), &xs);
    let fast = max_rel_err(fixed64::sqrt_fast, |x| x.sqrt(), &xs);
    let fastest = max_rel_err(fixed64::sqrt_fastest, |x| x.sqrt(), &xs);

    assert!(precise < 1e-6, "precise worst {}", precise);
    assert!(fast < 1e-4, "fast worst {}", fast);
    assert!(fastest < 1e-3, "fastest worst {}", fastest);
    assert!(precise <= fast && fast <= fastest);
}

#[test]
fn rcp_tier_ordering() {
    let xs = sweep64(0.01, 10_000.0);
    let precise = max_rel_err(fixed64::rcp, |x| 1.0 / x, &xs);
    let fast = max_rel_err(fixed64::rcp_fast, |x| 1.0 / x, &xs);
    let fastest = max_rel_err(fixed64::rcp_fastest, |x| 1.0 / x, &xs);

    assert!(precise < 1e-6, "precise worst {}", precise);
    assert!(fast < 1e-4, "fast worst {}", fast);
    assert!(fastest < 1e-3, "fastest worst {}", fastest);
    assert!(precise <= fast && fast <= fastest);
}

#[test]
fn exp2_tier_ordering() {
    let xs = linspace64(-8.0, 8.0, 1601);
    let precise = max_rel_err(fixed64::exp2, |x| x.exp2(), &xs);
    let fast = max_rel_err(fixed64::exp2_fast, |x| x.exp2(), &xs);
    let fastest = max_rel_err(fixed64::exp2_fastest, |x| x.exp2(), &xs);

    assert!(precise < 1e-6, "precise worst {}", precise);
    assert!(fast < 1e-4, "fast worst {}", fast);
    assert!(fastest < 1e-3, "fastest worst {}", fastest);
    assert!(precise <= fast && fast <= fastest);
}

#[test]
fn rsqrt_tier_ordering() {
    let xs = sweep64(0.01, 10_000.0);
    let precise = max_rel_err(fixed64::rsqrt, |x| 1.0 / x.sqrt(), &xs);
    let fast = max_rel_err(fixed64::rsqrt_fast, |x| 1.0 / x.sqrt(), &xs);
    let fastest = max_rel_err(fixed64::rsqrt_fastest, |x| 1.0 / x.sqrt(), &xs);

    assert!(precise < 1e-6, "precise worst {}", precise);
    assert!(fast < 1e-4, "fast worst {}", fast);
    assert!(fastest < 1e-3, "fastest worst {}", fastest);
    assert!(precise <= fast && fast <= fastest);
}

#[test]
fn exp_tier_ordering() {
    let xs = linspace64(-5.0, 5.0, 1001);
    let precise = max_rel_err(fixed64::exp, |x| x.exp(), &xs);
    let fast = max_rel_err(fixed64::exp_fast, |x| x.exp(), &xs);
    let fastest = max_rel_err(fixed64::exp_fastest, |x| x.exp(), &xs);

    assert!(precise < 1e-6, "precise worst {}", precise);
    assert!(fast < 1e-4, "fast worst {}", fast);
    assert!(fastest < 1e-3, "fastest worst {}", fastest);
    assert!(precise <= fast && fast <= fastest);
}

#[test]
fn log_tier_ordering() {
    let xs = sweep64(0.01, 100.0);
    let precise = max_err(fixed64::log, |x| x.ln(), &xs);
    let fast = max_err(fixed64::log_fast, |x| x.ln(), &xs);
    let fastest = max_err(fixed64::log_fastest, |x| x.ln(), &xs);

    assert!(precise < 1e-6, "precise worst {}", precise);
    assert!(fast < 1e-4, "fast worst {}", fast);
    assert!(fastest < 1e-3, "fastest worst {}", fastest);
    assert!(precise <= fast && fast <= fastest);
}

#[test]
fn log2_tier_ordering() {
    let xs = sweep64(0.01, 100.0);
    let precise = max_err(fixed64::log2, |x| x.log2(), &xs);
    let fast = max_err(fixed64::log2_fast, |x| x.log2(), &xs);
    let fastest = max_err(fixed64::log2_fastest, |x| x.log2(), &xs);

    assert!(precise < 1e-6, "precise worst {}", precise);
    assert!(fast < 1e-4, "fast worst {}", fast);
    assert!(fastest < 1e-3, "fastest worst {}", fastest);
    assert!(precise <= fast && fast <= fastest);
}

#[test]
fn atan_tier_ordering() {
    let xs = linspace64(-6.0, 6.0, 1201);
    let precise = max_err(fixed64::atan, |x| x.atan(), &xs);
    let fast = max_err(fixed64::atan_fast, |x| x.atan(), &xs);
    let fastest = max_err(fixed64::atan_fastest, |x| x.atan(), &xs);

    assert!(precise < 1e-6, "precise worst {}", precise);
    assert!(fast < 1e-4, "fast worst {}", fast);
    assert!(fastest < 5e-3, "fastest worst {}", fastest);
    assert!(precise <= fast && fast <= fastest);
}

fn assert_monotone(f: fn(i64) -> i64, inputs: &[i64], name: &str) {
    for w in inputs.windows(2) {
        assert!(
            f(w[0]) <= f(w[1]),
            "{} not monotone between {} and {}",
            name,
            fixed64::to_double(w[0]),
            fixed64::to_double(w[1])
        );
    }
}

#[test]
fn monotone_on_coarse_grids() {
    // Grid steps are chosen to exceed the worst tier error, so even the
    // fastest approximations must order their outputs.
    let pos = sweep64(0.01, 10_000.0);
    assert_monotone(fixed64::sqrt, &pos, "sqrt");
    assert_monotone(fixed64::sqrt_fast, &pos, "sqrt_fast");
    assert_monotone(fixed64::sqrt_fastest, &pos, "sqrt_fastest");
    assert_monotone(fixed64::log, &pos, "log");
    assert_monotone(fixed64::log_fastest, &pos, "log_fastest");
    assert_monotone(fixed64::log2_fastest, &pos, "log2_fastest");

    let xs = linspace64(-8.0, 8.0, 161);
    assert_monotone(fixed64::exp2, &xs, "exp2");
    assert_monotone(fixed64::exp2_fastest, &xs, "exp2_fastest");

    let narrow = linspace64(-2.0, 2.0, 41);
    assert_monotone(fixed64::atan, &narrow, "atan");
    assert_monotone(fixed64::atan_fastest, &narrow, "atan_fastest");
}

#[test]
fn tiers_actually_differ() {
    // The tiers must be distinct evaluators, not aliases.
    let xs = linspace64(0.1, 6.0, 60);
    assert!(xs.iter().any(|&x| fixed64::sin_fastest(x) != fixed64::sin(x)));
    assert!(xs.iter().any(|&x| fixed64::sin_fast(x) != fixed64::sin(x)));
    assert!(xs.iter().any(|&x| fixed64::sqrt_fastest(x) != fixed64::sqrt(x)));
    assert!(xs.iter().any(|&x| fixed64::exp2_fastest(x) != fixed64::exp2(x)));
}

// ============================================================================
// 16.16 kernel
// ============================================================================

fn max_err32(f: fn(i32) -> i32, reference: fn(f64) -> f64, inputs: &[i32]) -> f64 {
    let mut worst = 0.0f64;
    for &x in inputs {
        let got = fixed32::to_double(f(x));
        let want = reference(fixed32::to_double(x));
        worst = worst.max((got - want).abs());
    }
    worst
}

// One raw ulp (about 1.5e-5) dominates the precise and fast tiers in the
// narrow kernel, so only the fastest tier is required to be measurably
// coarser than the precise one.
fn check_tiers32(
    fns: [fn(i32) -> i32; 3],
    reference: fn(f64) -> f64,
    inputs: &[i32],
    bounds: [f64; 3],
    name: &str,
) {
    let worst: Vec<f64> = fns.iter().map(|&f| max_err32(f, reference, inputs)).collect();
    for (w, b) in worst.iter().zip(bounds) {
        assert!(*w < b, "{} worst {} over bound {}", name, w, b);
    }
    assert!(worst[0] <= worst[2], "{} precise coarser than fastest", name);
}

#[test]
fn narrow_kernel_tier_bounds() {
    check_tiers32(
        [fixed32::sin, fixed32::sin_fast, fixed32::sin_fastest],
        |x| x.sin(),
        &linspace32(-7.0, 7.0, 2001),
        [1e-4, 1e-4, 1e-3],
        "sin",
    );
    check_tiers32(
        [fixed32::sqrt, fixed32::sqrt_fast, fixed32::sqrt_fastest],
        |x| x.sqrt(),
        &sweep32(0.25, 100.0),
        [1e-4, 2e-4, 2e-3],
        "sqrt",
    );
    check_tiers32(
        [fixed32::rsqrt, fixed32::rsqrt_fast, fixed32::rsqrt_fastest],
        |x| 1.0 / x.sqrt(),
        &sweep32(0.25, 4.0),
        [1e-4, 2e-4, 5e-3],
        "rsqrt",
    );
    check_tiers32(
        [fixed32::rcp, fixed32::rcp_fast, fixed32::rcp_fastest],
        |x| 1.0 / x,
        &sweep32(0.1, 10.0),
        [1e-4, 5e-4, 1e-2],
        "rcp",
    );
    check_tiers32(
        [fixed32::exp2, fixed32::exp2_fast, fixed32::exp2_fastest],
        |x| x.exp2(),
        &linspace32(-4.0, 4.0, 801),
        [1e-4, 5e-4, 5e-3],
        "exp2",
    );
    // The base-e wrappers fold the 1/ln(2) argument scaling into a raw
    // multiply whose truncation all three tiers share, so their absolute
    // bounds sit above the bare exp2 ones.
    check_tiers32(
        [fixed32::exp, fixed32::exp_fast, fixed32::exp_fastest],
        |x| x.exp(),
        &linspace32(-3.0, 3.0, 601),
        [1e-3, 1e-3, 5e-3],
        "exp",
    );
    check_tiers32(
        [fixed32::log, fixed32::log_fast, fixed32::log_fastest],
        |x| x.ln(),
        &sweep32(0.05, 20.0),
        [1e-4, 2e-4, 1e-3],
        "log",
    );
    check_tiers32(
        [fixed32::log2, fixed32::log2_fast, fixed32::log2_fastest],
        |x| x.log2(),
        &sweep32(0.05, 20.0),
        [1e-4, 2e-4, 1e-3],
        "log2",
    );
    check_tiers32(
        [fixed32::atan, fixed32::atan_fast, fixed32::atan_fastest],
        |x| x.atan(),
        &linspace32(-6.0, 6.0, 1201),
        [2e-4, 2e-4, 5e-3],
        "atan",
    );
}

fn assert_monotone32(f: fn(i32) -> i32, inputs: &[i32], name: &str) {
    for w in inputs.windows(2) {
        assert!(
            f(w[0]) <= f(w[1]),
            "{} not monotone between {} and {}",
            name,
            fixed32::to_double(w[0]),
            fixed32::to_double(w[1])
        );
    }
}

#[test]
fn narrow_kernel_monotone_on_coarse_grids() {
    let pos = sweep32(0.01, 1000.0);
    assert_monotone32(fixed32::sqrt, &pos, "sqrt");
    assert_monotone32(fixed32::sqrt_fastest, &pos, "sqrt_fastest");
    assert_monotone32(fixed32::log, &pos, "log");
    assert_monotone32(fixed32::log_fastest, &pos, "log_fastest");
    assert_monotone32(fixed32::log2_fastest, &pos, "log2_fastest");

    let xs = linspace32(-8.0, 8.0, 161);
    assert_monotone32(fixed32::exp2, &xs, "exp2");
    assert_monotone32(fixed32::exp2_fastest, &xs, "exp2_fastest");

    let narrow = linspace32(-2.0, 2.0, 41);
    assert_monotone32(fixed32::atan, &narrow, "atan");
    assert_monotone32(fixed32::atan_fastest, &narrow, "atan_fastest");
}
