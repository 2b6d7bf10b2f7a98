//! Basic arithmetic throughput: multiply, divide and square root in both
//! formats, precise against approximated tiers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fixr::{fixed32, fixed64};

fn inputs64() -> Vec<i64> {
    // Deterministic pseudo-random raws, away from the sentinel inputs.
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..1024)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 16) as i64 & 0xFF_FFFF_FFFF) + fixed64::ONE
        })
        .collect()
}

fn inputs32() -> Vec<i32> {
    inputs64().iter().map(|&x| (x >> 16) as i32).collect()
}

fn bench_mul(c: &mut Criterion) {
    let xs = inputs64();
    let ns = inputs32();
    c.bench_function("fixed64/mul", |b| {
        b.iter(|| {
            for w in xs.windows(2) {
                black_box(fixed64::mul(black_box(w[0]), black_box(w[1])));
            }
        })
    });
    c.bench_function("fixed32/mul", |b| {
        b.iter(|| {
            for w in ns.windows(2) {
                black_box(fixed32::mul(black_box(w[0]), black_box(w[1])));
            }
        })
    });
}

fn bench_div(c: &mut Criterion) {
    let xs = inputs64();
    let tiers: [(&str, fn(i64, i64) -> i64); 4] = [
        ("fixed64/div_precise", fixed64::div_precise),
        ("fixed64/div", fixed64::div),
        ("fixed64/div_fast", fixed64::div_fast),
        ("fixed64/div_fastest", fixed64::div_fastest),
    ];
    for (name, f) in tiers {
        c.bench_function(name, |b| {
            b.iter(|| {
                for w in xs.windows(2) {
                    black_box(f(black_box(w[0]), black_box(w[1])));
                }
            })
        });
    }
}

fn bench_sqrt(c: &mut Criterion) {
    let xs = inputs64();
    let tiers: [(&str, fn(i64) -> i64); 4] = [
        ("fixed64/sqrt_precise", fixed64::sqrt_precise),
        ("fixed64/sqrt", fixed64::sqrt),
        ("fixed64/sqrt_fast", fixed64::sqrt_fast),
        ("fixed64/sqrt_fastest", fixed64::sqrt_fastest),
    ];
    for (name, f) in tiers {
        c.bench_function(name, |b| {
            b.iter(|| {
                for &x in &xs {
                    black_box(f(black_box(x)));
                }
            })
        });
    }
}

criterion_group!(benches, bench_mul, bench_div, bench_sqrt);
criterion_main!(benches);
