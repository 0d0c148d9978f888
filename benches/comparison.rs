use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use numkit::interp::{akima, lagrange, newton, spline, Akima, SampleSet};
use numkit::ode::{euler, rk4};
use numkit::optim::{bisection, newton_method, secant};

// ---------------------------------------------------------------------------
// Helpers: sin(x) sampled on uniform knots
// ---------------------------------------------------------------------------

fn knots(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| i as f64 * 6.0 / (n - 1) as f64).collect();
    let ys = xs.iter().map(|x| x.sin()).collect();
    (xs, ys)
}

// ---------------------------------------------------------------------------
// Polynomial interpolation
// ---------------------------------------------------------------------------

fn polynomial_8(c: &mut Criterion) {
    let mut g = c.benchmark_group("polynomial_8");
    let (xs, ys) = knots(8);
    let s = SampleSet::new(&xs, &ys).unwrap();

    g.bench_function("lagrange", |b| b.iter(|| lagrange(black_box(&s), black_box(2.345))));
    g.bench_function("newton", |b| b.iter(|| newton(black_box(&s), black_box(2.345))));

    g.finish();
}

fn polynomial_32(c: &mut Criterion) {
    let mut g = c.benchmark_group("polynomial_32");
    let (xs, ys) = knots(32);
    let s = SampleSet::new(&xs, &ys).unwrap();

    g.bench_function("lagrange", |b| b.iter(|| lagrange(black_box(&s), black_box(2.345))));
    g.bench_function("newton", |b| b.iter(|| newton(black_box(&s), black_box(2.345))));

    g.finish();
}

// ---------------------------------------------------------------------------
// Piecewise interpolation
// ---------------------------------------------------------------------------

fn piecewise_1000(c: &mut Criterion) {
    let mut g = c.benchmark_group("piecewise_1000");
    let (xs, ys) = knots(1000);
    let s = SampleSet::new(&xs, &ys).unwrap();
    let table = Akima::new(&s).unwrap();

    g.bench_function("cubic", |b| b.iter(|| spline::cubic(black_box(&s), black_box(4.321))));
    g.bench_function("quadratic", |b| {
        b.iter(|| spline::quadratic(black_box(&s), black_box(4.321)))
    });
    g.bench_function("akima_prebuilt", |b| b.iter(|| table.eval(black_box(4.321))));
    g.bench_function("akima_one_shot", |b| b.iter(|| akima(black_box(&s), black_box(4.321))));

    g.finish();
}

// ---------------------------------------------------------------------------
// Root finding
// ---------------------------------------------------------------------------

fn roots_sqrt2(c: &mut Criterion) {
    let mut g = c.benchmark_group("roots_sqrt2");
    let f = |x: f64| x * x - 2.0;

    g.bench_function("bisection", |b| {
        b.iter(|| bisection(f, black_box(0.0), black_box(2.0), 1e-12))
    });
    g.bench_function("secant", |b| b.iter(|| secant(f, black_box(0.0), black_box(2.0), 1e-12)));
    g.bench_function("newton", |b| {
        b.iter(|| newton_method(f, |x| 2.0 * x, black_box(1.0), 1e-12, 50))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// ODE steppers
// ---------------------------------------------------------------------------

fn ode_growth(c: &mut Criterion) {
    let mut g = c.benchmark_group("ode_growth");

    g.bench_function("euler", |b| {
        b.iter(|| euler(|_t, y: f64| y, 0.0, black_box(1.0), 1e-3, 1.0))
    });
    g.bench_function("rk4", |b| b.iter(|| rk4(|_t, y: f64| y, 0.0, black_box(1.0), 1e-3, 1.0)));

    g.finish();
}

criterion_group!(
    benches,
    polynomial_8,
    polynomial_32,
    piecewise_1000,
    roots_sqrt2,
    ode_growth,
);
criterion_main!(benches);
