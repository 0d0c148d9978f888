//! Local two-point spline segments.
//!
//! These are not globally smooth splines: each segment's polynomial is
//! built only from its two bracketing knots and the segment width, so no
//! tridiagonal system is solved and first derivatives jump at interior
//! knots. Both blends pass through their endpoints.
//!
//! With `h = x_{i+1} - x_i`, `dy = y_{i+1} - y_i` and `dx = x - x_i`:
//!
//! | Blend       | Polynomial in `dx`                           |
//! |-------------|----------------------------------------------|
//! | [`cubic`]     | `y_i + 3·dy/h²·dx² - 2·dy/h³·dx³`            |
//! | [`quadratic`] | `y_i + dy/(2h)·dx + dy/(2h²)·dx²`            |
//!
//! # Example
//!
//! ```
//! use numkit::interp::{spline, SampleSet};
//!
//! let xs = [1.0_f64, 2.0, 3.0];
//! let ys = [2.0, 4.0, 6.0];
//! let s = SampleSet::new(&xs, &ys).unwrap();
//! assert_eq!(spline::cubic(&s, 2.5).unwrap(), 5.0);
//! assert_eq!(spline::quadratic(&s, 2.5).unwrap(), 4.75);
//! assert!(spline::cubic(&s, 3.5).is_err());
//! ```

use crate::traits::{three, two, FloatScalar};

use super::{find_segment, InterpError, SampleSet, Segment};

/// Evaluate the cubic two-point blend at `x`.
///
/// The cubic has zero slope at both knots of its segment (a smoothstep
/// between `y_i` and `y_{i+1}`). Coefficients `[a, b, c, d]` are
/// `[y_i, 0, 3·dy/h², -2·dy/h³]`.
///
/// # Errors
///
/// `InterpError::OutOfRange` if `x` lies outside `[x_0, x_{n-1}]` or is NaN;
/// `InterpError::TooFewPoints` for fewer than 2 knots.
pub fn cubic<T: FloatScalar>(samples: &SampleSet<'_, T>, x: T) -> Result<T, InterpError> {
    match locate(samples, x)? {
        Segment::Knot(i) => Ok(samples.ys()[i]),
        Segment::Interior(i) => {
            let (h, dy, dx) = segment_terms(samples, i, x);
            let a = samples.ys()[i];
            let b = T::zero();
            let c = three::<T>() * dy / (h * h);
            let d = -two::<T>() * dy / (h * h * h);
            Ok(a + dx * (b + dx * (c + dx * d)))
        }
    }
}

/// Evaluate the quadratic two-point blend at `x`.
///
/// Coefficients `[a, b, c]` are `[y_i, dy/(2h), dy/(2h²)]`, giving a slope
/// of half the secant at `x_i` and one and a half times it at `x_{i+1}`.
///
/// # Errors
///
/// Same as [`cubic`].
pub fn quadratic<T: FloatScalar>(samples: &SampleSet<'_, T>, x: T) -> Result<T, InterpError> {
    match locate(samples, x)? {
        Segment::Knot(i) => Ok(samples.ys()[i]),
        Segment::Interior(i) => {
            let (h, dy, dx) = segment_terms(samples, i, x);
            let a = samples.ys()[i];
            let b = dy / (two::<T>() * h);
            let c = dy / (two::<T>() * h * h);
            Ok(a + dx * (b + dx * c))
        }
    }
}

fn locate<T: FloatScalar>(samples: &SampleSet<'_, T>, x: T) -> Result<Segment, InterpError> {
    if samples.len() < 2 {
        return Err(InterpError::TooFewPoints);
    }
    find_segment(samples.xs(), x)
}

/// `(h, dy, dx)` for segment `i`.
fn segment_terms<T: FloatScalar>(samples: &SampleSet<'_, T>, i: usize, x: T) -> (T, T, T) {
    let xs = samples.xs();
    let ys = samples.ys();
    (xs[i + 1] - xs[i], ys[i + 1] - ys[i], x - xs[i])
}
