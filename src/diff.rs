//! Single-shot finite-difference derivative approximations.
//!
//! Each routine evaluates `f` exactly twice and keeps no state. The step `h`
//! is used as given; no step-size heuristic is applied. Forward and
//! backward differences are first-order accurate in `h`, the central
//! difference second-order.
//!
//! # Example
//!
//! ```
//! use numkit::diff::{central_diff, forward_diff};
//!
//! let f = |x: f64| x * x * x;
//! // d/dx x³ at 2 = 12
//! assert!((central_diff(f, 2.0, 1e-5) - 12.0).abs() < 1e-8);
//! assert!((forward_diff(f, 2.0, 1e-6) - 12.0).abs() < 1e-4);
//! ```

use crate::traits::{two, FloatScalar};

/// Forward difference `(f(x + h) - f(x)) / h`.
pub fn forward_diff<T: FloatScalar>(mut f: impl FnMut(T) -> T, x: T, h: T) -> T {
    (f(x + h) - f(x)) / h
}

/// Backward difference `(f(x) - f(x - h)) / h`.
pub fn backward_diff<T: FloatScalar>(mut f: impl FnMut(T) -> T, x: T, h: T) -> T {
    (f(x) - f(x - h)) / h
}

/// Central difference `(f(x + h) - f(x - h)) / (2h)`.
pub fn central_diff<T: FloatScalar>(mut f: impl FnMut(T) -> T, x: T, h: T) -> T {
    (f(x + h) - f(x - h)) / (two::<T>() * h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_function_exact() {
        let f = |x: f64| 3.0 * x + 1.0;
        assert_eq!(forward_diff(f, 2.0, 0.5), 3.0);
        assert_eq!(backward_diff(f, 2.0, 0.5), 3.0);
        assert_eq!(central_diff(f, 2.0, 0.5), 3.0);
    }

    #[test]
    fn quadratic_one_sided_bias() {
        // f = x², f'(1) = 2; forward bias +h, backward bias -h, central exact
        let f = |x: f64| x * x;
        let h = 0.25;
        assert!((forward_diff(f, 1.0, h) - 2.25).abs() < 1e-14);
        assert!((backward_diff(f, 1.0, h) - 1.75).abs() < 1e-14);
        assert!((central_diff(f, 1.0, h) - 2.0).abs() < 1e-14);
    }

    #[test]
    fn central_is_more_accurate() {
        let x = 0.7_f64;
        let exact = x.cos();
        let h = 1e-3;
        let e_fwd = (forward_diff(f64::sin, x, h) - exact).abs();
        let e_ctr = (central_diff(f64::sin, x, h) - exact).abs();
        assert!(e_ctr < e_fwd / 10.0, "fwd {e_fwd}, ctr {e_ctr}");
    }

    #[test]
    fn exactly_two_evaluations() {
        let mut calls = 0;
        let _ = central_diff(
            |x: f64| {
                calls += 1;
                x
            },
            1.0,
            0.1,
        );
        assert_eq!(calls, 2);
    }

    #[test]
    fn zero_step_is_nan() {
        assert!(forward_diff(|x: f64| x * x, 1.0, 0.0).is_nan());
    }

    #[test]
    fn f32_central() {
        let d = central_diff(|x: f32| x * x, 3.0_f32, 1e-2);
        assert!((d - 6.0).abs() < 1e-3);
    }
}
