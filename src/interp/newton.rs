extern crate alloc;

use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::SampleSet;

/// Newton form of the interpolating polynomial through all knots.
///
/// Builds the divided differences `Δ[0,k]` with [`divided_differences`] and
/// evaluates
///
/// `y_0 + Σ_{k=1}^{n-1} Δ[0,k] · Π_{j<k} (x - x_j)`
///
/// accumulating the product left to right. This agrees with [`lagrange`]
/// in exact arithmetic but rounds differently. A query equal to a distinct
/// knot returns that knot's y-value exactly.
///
/// [`lagrange`]: super::lagrange
///
/// # Example
///
/// ```
/// use numkit::interp::{newton, SampleSet};
///
/// let xs = [1.0_f64, 2.0, 3.0];
/// let ys = [2.0, 4.0, 6.0];
/// let s = SampleSet::new(&xs, &ys).unwrap();
/// assert_eq!(newton(&s, 2.5), 5.0);
/// ```
pub fn newton<T: FloatScalar>(samples: &SampleSet<'_, T>, x: T) -> T {
    if let Some(i) = samples.knot_index(x) {
        return samples.ys()[i];
    }
    let xs = samples.xs();
    if xs.is_empty() {
        return T::nan();
    }

    let coeffs = divided_differences(samples);
    let mut result = coeffs[0];
    let mut prod = T::one();
    for k in 1..coeffs.len() {
        prod = prod * (x - xs[k - 1]);
        result = result + coeffs[k] * prod;
    }
    result
}

/// Top row of the divided-difference table: `[Δ[0,0], Δ[0,1], …, Δ[0,n-1]]`.
///
/// Sweeps the triangular table one order at a time, in place. Each entry is
/// produced by exactly the recurrence
/// `Δ[i,k] = (Δ[i+1,k] - Δ[i,k-1]) / (x_k - x_i)`, so the values match
/// [`divided_difference`] bit for bit while costing O(N²) instead of O(2ᴺ).
pub fn divided_differences<T: FloatScalar>(samples: &SampleSet<'_, T>) -> Vec<T> {
    let xs = samples.xs();
    let n = xs.len();
    // table[i] holds Δ[i - order, i] after each sweep
    let mut table: Vec<T> = samples.ys().to_vec();
    for order in 1..n {
        for i in (order..n).rev() {
            table[i] = (table[i] - table[i - 1]) / (xs[i] - xs[i - order]);
        }
    }
    table
}

/// Divided difference `Δ[i,k]` by direct recursion.
///
/// `Δ[i,i] = y_i` and `Δ[i,k] = (Δ[i+1,k] - Δ[i,k-1]) / (x_k - x_i)`.
/// Exponential in `k - i`; intended for inspecting individual entries of
/// small tables.
///
/// # Panics
///
/// Panics if `i > k` or `k` is out of bounds.
///
/// # Example
///
/// ```
/// use numkit::interp::{divided_difference, SampleSet};
///
/// // y = x²: second divided difference is the leading coefficient
/// let xs = [0.0_f64, 1.0, 3.0];
/// let ys = [0.0, 1.0, 9.0];
/// let s = SampleSet::new(&xs, &ys).unwrap();
/// assert_eq!(divided_difference(&s, 0, 2), 1.0);
/// ```
pub fn divided_difference<T: FloatScalar>(samples: &SampleSet<'_, T>, i: usize, k: usize) -> T {
    assert!(i <= k, "divided difference requires i <= k");
    let xs = samples.xs();
    if i == k {
        return samples.ys()[i];
    }
    (divided_difference(samples, i + 1, k) - divided_difference(samples, i, k - 1)) / (xs[k] - xs[i])
}
