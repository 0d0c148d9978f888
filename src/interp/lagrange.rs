use crate::traits::FloatScalar;

use super::SampleSet;

/// Lagrange form of the interpolating polynomial through all knots.
///
/// Computes `Σ y_i · Π_{j≠i} (x - x_j) / (x_i - x_j)` in O(N²), one basis
/// polynomial at a time. A query equal to a knot returns that knot's
/// y-value exactly. Coincident abscissae (reachable only through
/// [`SampleSet::new_unchecked`]) make the affected basis terms NaN or
/// infinite, including for queries on the repeated abscissa itself.
///
/// # Example
///
/// ```
/// use numkit::interp::{lagrange, SampleSet};
///
/// // y = x² through three points is reproduced exactly
/// let xs = [0.0_f64, 1.0, 2.0];
/// let ys = [0.0, 1.0, 4.0];
/// let s = SampleSet::new(&xs, &ys).unwrap();
/// assert!((lagrange(&s, 1.5) - 2.25).abs() < 1e-12);
/// ```
pub fn lagrange<T: FloatScalar>(samples: &SampleSet<'_, T>, x: T) -> T {
    if let Some(i) = samples.knot_index(x) {
        return samples.ys()[i];
    }

    let xs = samples.xs();
    let ys = samples.ys();
    let mut sum = T::zero();
    for i in 0..xs.len() {
        let mut basis = T::one();
        for j in 0..xs.len() {
            if j != i {
                basis = basis * ((x - xs[j]) / (xs[i] - xs[j]));
            }
        }
        sum = sum + ys[i] * basis;
    }
    sum
}
