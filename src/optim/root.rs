use crate::traits::{two, FloatScalar};

use super::OptimError;

/// Iteration cap used by [`secant`] when no settings are given.
const DEFAULT_MAX_ITER: usize = 100;

/// Settings for iterative root finders.
#[derive(Debug, Clone, Copy)]
pub struct RootSettings<T> {
    /// Convergence tolerance on the distance between successive iterates.
    pub tol: T,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl Default for RootSettings<f64> {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

impl Default for RootSettings<f32> {
    fn default() -> Self {
        Self {
            tol: 1e-5,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

/// Bisection on the bracket `[a, b]`.
///
/// While `b - a > tol`, takes the midpoint `c` and returns it immediately if
/// `f(c) == 0` or the half-width `(b - a) / 2` is below `tol`; otherwise
/// keeps the half where `f(a)·f(c) < 0`. Also returns `c` once the midpoint
/// can no longer separate from the endpoints, so a zero or negative `tol`
/// still terminates. Converges in `O(log₂((b - a) / tol))` iterations.
///
/// # Preconditions
///
/// `a < b` and `f(a)·f(b) < 0`. This is not checked: without a sign change
/// the result is an endpoint-ward point that need not be a root.
///
/// # Example
///
/// ```
/// use numkit::optim::bisection;
///
/// let r = bisection(|x: f64| x * x - 2.0, 0.0, 2.0, 1e-5);
/// assert_eq!(r.trunc(), 1.0);
/// assert!((r - core::f64::consts::SQRT_2).abs() < 1e-5);
/// ```
pub fn bisection<T: FloatScalar>(mut f: impl FnMut(T) -> T, a: T, b: T, tol: T) -> T {
    let mut a = a;
    let mut b = b;
    let mut iter = 0usize;

    while b - a > tol {
        let c = (a + b) / two::<T>();
        iter += 1;
        let fc = f(c);
        if fc == T::zero() || (b - a) / two::<T>() < tol || c <= a || c >= b {
            log::trace!("bisection converged after {iter} iterations");
            return c;
        }
        if f(a) * fc < T::zero() {
            b = c;
        } else {
            a = c;
        }
    }

    (a + b) / two::<T>()
}

/// Secant method from the starting pair `(a, b)` with a 100-iteration cap.
///
/// Shorthand for [`secant_with`] using `tol` and the default iteration cap.
///
/// # Example
///
/// ```
/// use numkit::optim::secant;
///
/// let r = secant(|x: f64| x * x - 2.0, 0.0, 2.0, 1e-5).unwrap();
/// assert_eq!(r.trunc(), 1.0);
/// ```
pub fn secant<T: FloatScalar>(f: impl FnMut(T) -> T, a: T, b: T, tol: T) -> Result<T, OptimError> {
    secant_with(
        f,
        a,
        b,
        &RootSettings {
            tol,
            max_iter: DEFAULT_MAX_ITER,
        },
    )
}

/// Secant method from the starting pair `(a, b)`.
///
/// Iterates `c = b - f(b)·(b - a) / (f(b) - f(a))`, `a ← b`, `b ← c` while
/// `|b - a| > settings.tol`, and returns the latest iterate. The starting
/// points need not bracket a root.
///
/// If `f(b) == f(a)` the update divides by zero; the resulting NaN ends the
/// loop and is returned as `Ok(NaN)`.
///
/// # Errors
///
/// Returns [`OptimError::MaxIterations`] if the iterates have not settled
/// after `settings.max_iter` updates.
pub fn secant_with<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    settings: &RootSettings<T>,
) -> Result<T, OptimError> {
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);
    let mut iter = 0usize;

    while (b - a).abs() > settings.tol {
        if iter == settings.max_iter {
            log::warn!(
                "secant did not converge in {} iterations (last step {:?})",
                settings.max_iter,
                (b - a).abs()
            );
            return Err(OptimError::MaxIterations);
        }
        let c = b - fb * (b - a) / (fb - fa);
        a = b;
        fa = fb;
        b = c;
        fb = f(b);
        iter += 1;
    }

    log::trace!("secant finished after {iter} iterations");
    Ok(b)
}

/// Newton's method with a user-supplied derivative.
///
/// Iterates `x ← x - f(x) / df(x)` for at most `max_iter` steps. Stops early
/// and returns the current `x` when `|df(x)| < tol` (a near-stationary point,
/// where the update would blow up), or returns the new iterate once the
/// step `|x_new - x|` drops below `tol`. If neither happens, the last
/// iterate is returned; running out of iterations is not an error.
///
/// # Example
///
/// ```
/// use numkit::optim::newton_method;
///
/// let r = newton_method(|x: f64| x * x - 2.0, |x| 2.0 * x, 1.0, 1e-7, 50);
/// assert!((r - core::f64::consts::SQRT_2).abs() < 1e-7);
/// ```
pub fn newton_method<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    mut df: impl FnMut(T) -> T,
    x0: T,
    tol: T,
    max_iter: usize,
) -> T {
    let mut x = x0;

    for iter in 0..max_iter {
        let dfx = df(x);
        if dfx.abs() < tol {
            log::trace!("newton stopped at a flat derivative after {iter} iterations");
            return x;
        }

        let x_new = x - f(x) / dfx;
        if (x_new - x).abs() < tol {
            log::trace!("newton converged after {} iterations", iter + 1);
            return x_new;
        }
        x = x_new;
    }

    log::warn!("newton exhausted {max_iter} iterations; returning last iterate");
    x
}
