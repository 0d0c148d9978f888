use crate::traits::FloatScalar;

use super::march;

/// Single explicit Euler step: `y + h·f(t, y)`.
///
/// ```
/// use numkit::ode::euler_step;
///
/// let y1 = euler_step(|_t, y| -2.0 * y, 0.0, 1.0_f64, 0.1);
/// assert!((y1 - 0.8).abs() < 1e-15);
/// ```
#[inline]
pub fn euler_step<T: FloatScalar>(mut f: impl FnMut(T, T) -> T, t: T, y: T, h: T) -> T {
    y + h * f(t, y)
}

/// Integrate `dy/dt = f(t, y)` with fixed-step explicit Euler.
///
/// Starting from `y(t_i) = y_i`, steps by `h` while the current time is
/// `<= t` and returns the final `y`. The final time overshoots `t` by up to
/// one step (see the [module docs](super)). First-order accurate.
///
/// ```
/// use numkit::ode::euler;
///
/// // dy/dt = 1: four steps of 0.5 from t = 0 (the last starts at t = 1.5)
/// let y = euler(|_t, _y| 1.0_f64, 0.0, 0.0, 0.5, 1.5);
/// assert_eq!(y, 2.0);
/// ```
pub fn euler<T: FloatScalar>(mut f: impl FnMut(T, T) -> T, t_i: T, y_i: T, h: T, t: T) -> T {
    march(t_i, y_i, h, t, |ti, y, h| euler_step(&mut f, ti, y, h))
}
