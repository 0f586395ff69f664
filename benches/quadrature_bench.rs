//! Benchmarks for the three quadrature rules.
//!
//! Run with: `cargo bench --bench quadrature_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quadrature::math::quadrature::gausslegendre::GaussLegendreRule;
use quadrature::{custom_integration, rectangular_rule, trapezoidal_rule, Vectorized};

fn integrand(x: f64) -> f64 {
    (x * x + 1.0).sqrt() * x.sin()
}

/// Rectangular vs trapezoidal at equal subdivision counts.
fn bench_composite_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite_rules");

    for n in [10, 100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("rectangular", n), &n, |b, &n| {
            b.iter(|| rectangular_rule(integrand, black_box(0.0), black_box(2.0), n))
        });
        group.bench_with_input(BenchmarkId::new("trapezoidal", n), &n, |b, &n| {
            b.iter(|| trapezoidal_rule(integrand, black_box(0.0), black_box(2.0), n))
        });
    }

    group.finish();
}

/// Gauss-Legendre with and without rebuilding the rule per call.
fn bench_gauss_legendre(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_legendre");

    for order in [5, 20, 100] {
        group.bench_with_input(BenchmarkId::new("custom_integration", order), &order, |b, &order| {
            b.iter(|| custom_integration(Vectorized(integrand), black_box(0.0), black_box(2.0), order))
        });

        let rule = GaussLegendreRule::new(order).unwrap();
        group.bench_with_input(BenchmarkId::new("reused_rule", order), &rule, |b, rule| {
            b.iter(|| rule.integrate(Vectorized(integrand), black_box(0.0), black_box(2.0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_composite_rules, bench_gauss_legendre);
criterion_main!(benches);
