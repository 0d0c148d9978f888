//! Closed-form ordinary least-squares line fit.

use crate::traits::FloatScalar;

/// Straight line `y = slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Slope of the fitted line.
    pub slope: T,
    /// Value of the fitted line at `x = 0`.
    pub intercept: T,
}

impl<T: FloatScalar> LinearFit<T> {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn eval(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

/// Fit a line to `(xs[i], ys[i])` by ordinary least squares.
///
/// Accumulates `Σx`, `Σy`, `Σxy` and `Σx²` in a single pass, then
///
/// - `slope = (n·Σxy - Σx·Σy) / (n·Σx² - (Σx)²)`
/// - `intercept = (Σy - slope·Σx) / n`
///
/// Abscissae need not be sorted. When all `xs` coincide (or the input is
/// empty) the denominator vanishes and the result is NaN or infinite.
///
/// # Panics
///
/// Panics if `xs` and `ys` differ in length.
///
/// # Example
///
/// ```
/// use numkit::fit::least_squares;
///
/// let fit = least_squares(&[1.0_f64, 2.0, 3.0], &[2.0, 4.0, 6.0]);
/// assert_eq!(fit.slope, 2.0);
/// assert_eq!(fit.intercept, 0.0);
/// assert_eq!(fit.eval(10.0), 20.0);
/// ```
pub fn least_squares<T: FloatScalar>(xs: &[T], ys: &[T]) -> LinearFit<T> {
    assert_eq!(xs.len(), ys.len(), "xs and ys must have the same length");

    let mut n = T::zero();
    let mut sx = T::zero();
    let mut sy = T::zero();
    let mut sxy = T::zero();
    let mut sxx = T::zero();
    for (&x, &y) in xs.iter().zip(ys) {
        n = n + T::one();
        sx = sx + x;
        sy = sy + y;
        sxy = sxy + x * y;
        sxx = sxx + x * x;
    }

    let slope = (n * sxy - sx * sy) / (n * sxx - sx * sx);
    let intercept = (sy - slope * sx) / n;
    LinearFit { slope, intercept }
}
