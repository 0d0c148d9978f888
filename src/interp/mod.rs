//! Interpolation over ordered sample data: two-point linear, Lagrange,
//! Newton divided differences, local two-point cubic/quadratic splines, and
//! Akima's shape-adaptive piecewise cubic.
//!
//! Every routine borrows its data through a [`SampleSet`], evaluates a
//! single query, and keeps nothing once it returns. Polynomial interpolants
//! are defined everywhere (they extrapolate); the piecewise methods reject
//! queries outside `[x_0, x_{n-1}]` with [`InterpError::OutOfRange`].
//!
//! # Examples
//!
//! ```
//! use numkit::interp::{lagrange, spline, SampleSet};
//!
//! let xs = [1.0_f64, 2.0, 3.0];
//! let ys = [2.0, 4.0, 6.0];
//! let samples = SampleSet::new(&xs, &ys).unwrap();
//! assert_eq!(lagrange(&samples, 2.5), 5.0);
//! assert_eq!(spline::quadratic(&samples, 2.5).unwrap(), 4.75);
//! ```

mod lagrange;
mod linear;
mod samples;
pub mod spline;

#[cfg(feature = "alloc")]
mod akima;
#[cfg(feature = "alloc")]
mod newton;


pub use lagrange::lagrange;
pub use linear::linear;
pub use samples::SampleSet;

#[cfg(feature = "alloc")]
pub use akima::{akima, Akima};
#[cfg(feature = "alloc")]
pub use newton::{divided_difference, divided_differences, newton};

use crate::traits::FloatScalar;

/// Errors from sample-set construction and piecewise evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpError {
    /// Not enough data points for the interpolation method.
    TooFewPoints,
    /// The `xs` array is not strictly increasing.
    NotSorted,
    /// `xs` and `ys` have different lengths.
    LengthMismatch,
    /// The query lies outside `[x_0, x_{n-1}]` (or is NaN).
    OutOfRange,
}

impl core::fmt::Display for InterpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterpError::TooFewPoints => write!(f, "not enough data points for interpolation"),
            InterpError::NotSorted => write!(f, "x values must be strictly increasing"),
            InterpError::LengthMismatch => write!(f, "xs and ys must have the same length"),
            InterpError::OutOfRange => write!(f, "query lies outside the sampled range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterpError {}

/// Validate that a slice is strictly increasing.
fn validate_sorted<T: FloatScalar>(xs: &[T]) -> Result<(), InterpError> {
    for i in 1..xs.len() {
        // `!(a < b)` also rejects NaN knots
        if !(xs[i - 1] < xs[i]) {
            return Err(InterpError::NotSorted);
        }
    }
    Ok(())
}

/// Outcome of locating a query among the knots.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Segment {
    /// The query equals knot `i` exactly.
    Knot(usize),
    /// The query lies strictly inside `(xs[i], xs[i+1])`.
    Interior(usize),
}

/// Binary search for the segment bracketing `x`.
///
/// Stops early on an exact knot hit. Otherwise the bounds cross and the
/// segment is `left - 1`. Queries outside the knot range (including NaN)
/// are rejected before searching.
fn find_segment<T: FloatScalar>(xs: &[T], x: T) -> Result<Segment, InterpError> {
    debug_assert!(xs.len() >= 2);
    let n = xs.len();
    if !(x >= xs[0] && x <= xs[n - 1]) {
        return Err(InterpError::OutOfRange);
    }

    // Signed bounds so `right` can step below zero
    let mut left: isize = 0;
    let mut right: isize = n as isize - 1;
    while left <= right {
        let mid = (left + right) / 2;
        let xm = xs[mid as usize];
        if x == xm {
            return Ok(Segment::Knot(mid as usize));
        }
        if xm < x {
            left = mid + 1;
        } else {
            right = mid - 1;
        }
    }
    // Only unsorted knots (via `new_unchecked`) can land here
    if left < 1 || left as usize >= n {
        return Err(InterpError::OutOfRange);
    }
    Ok(Segment::Interior((left - 1) as usize))
}
