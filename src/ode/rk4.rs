use crate::traits::{six, two, FloatScalar};

use super::march;

/// Single step of the classic 4th-order Runge-Kutta method.
///
/// Advances `y` from `t` to `t + h` using four stage evaluations:
///
/// - `k1 = h·f(t, y)`
/// - `k2 = h·f(t + h/2, y + k1/2)`
/// - `k3 = h·f(t + h/2, y + k2/2)`
/// - `k4 = h·f(t + h, y + k3)`
///
/// and returns `y + (k1 + 2·k2 + 2·k3 + k4) / 6`.
///
/// ```
/// use numkit::ode::rk4_step;
///
/// // dy/dt = -y (exponential decay)
/// let y1 = rk4_step(|_t, y| -y, 0.0, 1.0_f64, 0.01);
/// assert!((y1 - (-0.01_f64).exp()).abs() < 1e-10);
/// ```
pub fn rk4_step<T: FloatScalar>(mut f: impl FnMut(T, T) -> T, t: T, y: T, h: T) -> T {
    let half = h / two::<T>();

    let k1 = h * f(t, y);
    let k2 = h * f(t + half, y + k1 / two::<T>());
    let k3 = h * f(t + half, y + k2 / two::<T>());
    let k4 = h * f(t + h, y + k3);

    y + (k1 + two::<T>() * k2 + two::<T>() * k3 + k4) / six::<T>()
}

/// Integrate `dy/dt = f(t, y)` with fixed-step 4th-order Runge-Kutta.
///
/// Same marching rule as [`euler`](super::euler): steps while the current
/// time is `<= t`, so the result corresponds to a final time up to one step
/// past `t`.
///
/// ```
/// use numkit::ode::rk4;
///
/// // dy/dt = 2t, y(0) = 0 → y = t²; RK4 is exact for polynomials of low degree.
/// // Steps start at t = 0, 0.5, 1.0, ending at t = 1.5.
/// let y = rk4(|t, _y| 2.0 * t, 0.0, 0.0_f64, 0.5, 1.0);
/// assert!((y - 2.25).abs() < 1e-14);
/// ```
pub fn rk4<T: FloatScalar>(mut f: impl FnMut(T, T) -> T, t_i: T, y_i: T, h: T, t: T) -> T {
    march(t_i, y_i, h, t, |ti, y, h| rk4_step(&mut f, ti, y, h))
}
