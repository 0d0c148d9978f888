//! End-to-end checks of the documented numerical properties, through the
//! public API only.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use numkit::diff::{backward_diff, central_diff, forward_diff};
use numkit::fit::least_squares;
use numkit::interp::{akima, lagrange, linear, newton, spline, SampleSet};
use numkit::ode::{euler, rk4};
use numkit::optim::{bisection, newton_method, secant};

const XS: [f64; 3] = [1.0, 2.0, 3.0];
const YS: [f64; 3] = [2.0, 4.0, 6.0];

fn f_sqrt2(x: f64) -> f64 {
    x * x - 2.0
}

// ── Interpolation ────────────────────────────────────────────────────

#[test]
fn linear_passes_through_endpoints() {
    for &(x1, x2, y1, y2) in &[(0.0, 1.0, 3.0, -1.0), (-4.0, 4.0, 0.5, 8.0), (2.0, 2.5, 1.0, 1.0)] {
        assert_eq!(linear(x1, x1, x2, y1, y2), y1);
        assert_eq!(linear(x2, x1, x2, y1, y2), y2);
    }
}

#[test]
fn polynomials_exact_on_collinear_set() {
    let s = SampleSet::new(&XS, &YS).unwrap();
    assert_eq!(lagrange(&s, 2.5), 5.0);
    assert_eq!(newton(&s, 2.5), 5.0);
}

#[test]
fn pinned_spline_values() {
    let s = SampleSet::new(&XS, &YS).unwrap();
    assert_eq!(spline::cubic(&s, 2.5).unwrap().round(), 5.0);
    assert_eq!(spline::quadratic(&s, 2.5).unwrap(), 4.75);
}

#[test]
fn every_method_exact_at_knots() {
    let xs = [-2.0_f64, -0.5, 0.1, 1.3, 2.0, 4.4];
    let ys = [3.3, -1.0, 0.7, 2.2, -5.0, 0.0];
    let s = SampleSet::new(&xs, &ys).unwrap();
    for (&x, &y) in xs.iter().zip(&ys) {
        assert_eq!(lagrange(&s, x), y);
        assert_eq!(newton(&s, x), y);
        assert_eq!(spline::cubic(&s, x).unwrap(), y);
        assert_eq!(spline::quadratic(&s, x).unwrap(), y);
        assert_eq!(akima(&s, x).unwrap(), y);
    }
}

#[test]
fn polynomial_forms_agree() {
    let xs = [0.0_f64, 0.5, 1.0, 1.5, 2.0];
    let ys = xs.map(f64::exp);
    let s = SampleSet::new(&xs, &ys).unwrap();
    for &x in &[0.25, 0.8, 1.75] {
        assert_relative_eq!(lagrange(&s, x), newton(&s, x), max_relative = 1e-12);
        assert_abs_diff_eq!(lagrange(&s, x), x.exp(), epsilon = 1e-2);
    }
}

// ── Least squares ────────────────────────────────────────────────────

#[test]
fn least_squares_recovers_exact_line() {
    let fit = least_squares(&XS, &YS);
    assert_eq!(fit.slope, 2.0);
    assert_eq!(fit.intercept, 0.0);
}

// ── Root finding ─────────────────────────────────────────────────────

#[test]
fn root_finders_find_sqrt2() {
    assert_eq!(bisection(f_sqrt2, 0.0, 2.0, 1e-5).trunc(), 1.0);
    assert_eq!(secant(f_sqrt2, 0.0, 2.0, 1e-5).unwrap().trunc(), 1.0);
}

#[test]
fn bisection_is_idempotent() {
    let a = bisection(f_sqrt2, 0.0, 2.0, 1e-7);
    let b = bisection(f_sqrt2, 0.0, 2.0, 1e-7);
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn newton_converges_quickly() {
    let r = newton_method(f_sqrt2, |x| 2.0 * x, 1.0, 1e-7, 10);
    assert_abs_diff_eq!(r, core::f64::consts::SQRT_2, epsilon = 1e-7);
}

// ── Finite differences ───────────────────────────────────────────────

#[test]
fn finite_differences_on_sine() {
    let x = 1.0_f64;
    assert_abs_diff_eq!(forward_diff(f64::sin, x, 1e-6), x.cos(), epsilon = 1e-5);
    assert_abs_diff_eq!(backward_diff(f64::sin, x, 1e-6), x.cos(), epsilon = 1e-5);
    assert_abs_diff_eq!(central_diff(f64::sin, x, 1e-4), x.cos(), epsilon = 1e-8);
}

// ── ODE ──────────────────────────────────────────────────────────────

#[test]
fn rk4_more_accurate_than_euler() {
    // Unit-ish steps of 0.5 up to t = 3 (final time 3.5 after overshoot)
    let exact = 3.5_f64.exp();
    let e_euler = (euler(|_t, y| y, 0.0, 1.0, 0.5, 3.0) - exact).abs();
    let e_rk4 = (rk4(|_t, y| y, 0.0, 1.0, 0.5, 3.0) - exact).abs();
    assert!(e_rk4 * 50.0 < e_euler, "rk4 {e_rk4}, euler {e_euler}");
}
