use crate::traits::FloatScalar;

/// Two-point linear interpolation.
///
/// Returns `y1 + (x - x1) * (y2 - y1) / (x2 - x1)`, evaluated in that order.
/// `x` outside `[x1, x2]` extrapolates along the same line. When `x1 == x2`
/// the division yields NaN or infinity, which is returned as-is.
///
/// # Example
///
/// ```
/// use numkit::interp::linear;
///
/// assert_eq!(linear(1.5_f64, 1.0, 2.0, 10.0, 20.0), 15.0);
/// assert_eq!(linear(1.0_f64, 1.0, 2.0, 10.0, 20.0), 10.0);
/// ```
#[inline]
pub fn linear<T: FloatScalar>(x: T, x1: T, x2: T, y1: T, y2: T) -> T {
    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}
