//! Transcendental function throughput across the three precision tiers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fixr::fixed64;

fn angles() -> Vec<i64> {
    (0..1024)
        .map(|i| fixed64::from_double(i as f64 * 0.0123 - 6.3))
        .collect()
}

fn positives() -> Vec<i64> {
    (0..1024)
        .map(|i| fixed64::from_double(0.01 + i as f64 * 0.173))
        .collect()
}

fn bench_unary(c: &mut Criterion, name: &str, f: fn(i64) -> i64, xs: &[i64]) {
    c.bench_function(name, |b| {
        b.iter(|| {
            for &x in xs {
                black_box(f(black_box(x)));
            }
        })
    });
}

fn bench_sin(c: &mut Criterion) {
    let xs = angles();
    bench_unary(c, "fixed64/sin", fixed64::sin, &xs);
    bench_unary(c, "fixed64/sin_fast", fixed64::sin_fast, &xs);
    bench_unary(c, "fixed64/sin_fastest", fixed64::sin_fastest, &xs);
}

fn bench_exp_log(c: &mut Criterion) {
    let xs = angles();
    let ps = positives();
    bench_unary(c, "fixed64/exp2", fixed64::exp2, &xs);
    bench_unary(c, "fixed64/exp2_fastest", fixed64::exp2_fastest, &xs);
    bench_unary(c, "fixed64/log", fixed64::log, &ps);
    bench_unary(c, "fixed64/log_fastest", fixed64::log_fastest, &ps);
}

fn bench_atan2(c: &mut Criterion) {
    let xs = angles();
    let tiers: [(&str, fn(i64, i64) -> i64); 3] = [
        ("fixed64/atan2", fixed64::atan2),
        ("fixed64/atan2_fast", fixed64::atan2_fast),
        ("fixed64/atan2_fastest", fixed64::atan2_fastest),
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

fn bench_pow(c: &mut Criterion) {
    let ps = positives();
    c.bench_function("fixed64/pow", |b| {
        b.iter(|| {
            for w in ps.windows(2) {
                black_box(fixed64::pow(black_box(w[0]), black_box(fixed64::HALF)));
            }
        })
    });
}

criterion_group!(benches, bench_sin, bench_exp_log, bench_atan2, bench_pow);
criterion_main!(benches);
