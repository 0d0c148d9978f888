//! Fixed-step ODE integration for scalar equations `dy/dt = f(t, y)`.
//!
//! [`euler`] and [`rk4`] march from `(t_i, y_i)` while `t_i <= t`, testing
//! the condition before each step. The last step may therefore cross the
//! target time by up to one step size `h`, and a start exactly at the
//! target still takes one step. Callers wanting to land on `t` exactly
//! should choose `h` accordingly and aim one step short.
//!
//! [`euler_step`] and [`rk4_step`] expose the single-step updates.
//!
//! A step that is zero, negative, NaN, or too small to advance `t_i`
//! yields NaN instead of looping forever. The check happens only when a
//! step is due, so a start already past `t` returns `y_i` unchanged.
//!
//! # Example
//!
//! ```
//! use numkit::ode::{euler, rk4};
//!
//! // dy/dt = y, y(0) = 1; steps at t = 0, 0.25, 0.5, 0.75, 1 end at t = 1.25
//! let exact = 1.25_f64.exp();
//! let e_euler = (euler(|_t, y| y, 0.0, 1.0, 0.25, 1.0) - exact).abs();
//! let e_rk4 = (rk4(|_t, y| y, 0.0, 1.0, 0.25, 1.0) - exact).abs();
//! assert!(e_rk4 < e_euler / 100.0);
//! ```

mod euler;
mod rk4;


pub use euler::{euler, euler_step};
pub use rk4::{rk4, rk4_step};

use crate::traits::FloatScalar;

/// Shared marching loop: apply `step` while `t_i <= t`.
///
/// The step size is only checked once a step is due, so a start already
/// past `t` returns `y_i` whatever `h` is.
fn march<T: FloatScalar>(
    t_i: T,
    y_i: T,
    h: T,
    t: T,
    mut step: impl FnMut(T, T, T) -> T,
) -> T {
    let mut ti = t_i;
    let mut y = y_i;
    while ti <= t {
        let next = ti + h;
        if !(next > ti) {
            if h > T::zero() {
                log::warn!("step size {h:?} does not advance t = {ti:?}; returning NaN");
            } else {
                log::warn!("step size {h:?} is not positive; returning NaN");
            }
            return T::nan();
        }
        y = step(ti, y, h);
        ti = next;
    }
    y
}
