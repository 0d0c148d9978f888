use crate::traits::FloatScalar;

use super::{validate_sorted, InterpError};

/// Borrowed view over parallel knot arrays `xs` / `ys`.
///
/// The caller owns the data; a `SampleSet` only lends it to one evaluation
/// at a time and is never retained by any routine. Knots must be strictly
/// increasing, and nothing in this crate sorts them.
///
/// # Example
///
/// ```
/// use numkit::interp::{SampleSet, InterpError};
///
/// let xs = [0.0_f64, 1.0, 2.0];
/// let ys = [1.0, 3.0, 2.0];
/// let s = SampleSet::new(&xs, &ys).unwrap();
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.bounds(), (0.0, 2.0));
///
/// let bad = SampleSet::new(&[1.0_f64, 0.0], &[0.0, 0.0]);
/// assert_eq!(bad.unwrap_err(), InterpError::NotSorted);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SampleSet<'a, T> {
    xs: &'a [T],
    ys: &'a [T],
}

impl<'a, T: FloatScalar> SampleSet<'a, T> {
    /// Construct a validated sample set.
    ///
    /// Returns `InterpError::LengthMismatch` if the slices differ in length,
    /// `InterpError::TooFewPoints` for fewer than 2 points, and
    /// `InterpError::NotSorted` if `xs` is not strictly increasing.
    pub fn new(xs: &'a [T], ys: &'a [T]) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch);
        }
        if xs.len() < 2 {
            return Err(InterpError::TooFewPoints);
        }
        validate_sorted(xs)?;
        Ok(Self { xs, ys })
    }

    /// Construct a sample set without checking ordering or size.
    ///
    /// Degenerate data (coincident abscissae) is passed straight through to
    /// the formulas, which then yield NaN or infinity, even for a query on
    /// the repeated abscissa. The piecewise methods
    /// still require at least 2 points and report `TooFewPoints` otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `xs` and `ys` differ in length.
    pub fn new_unchecked(xs: &'a [T], ys: &'a [T]) -> Self {
        assert_eq!(xs.len(), ys.len(), "xs and ys must have the same length");
        Self { xs, ys }
    }

    /// The knot x-values.
    pub fn xs(&self) -> &'a [T] {
        self.xs
    }

    /// The knot y-values.
    pub fn ys(&self) -> &'a [T] {
        self.ys
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// True when the set holds no knots (only possible via `new_unchecked`).
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// First and last abscissa, `(x_0, x_{n-1})`.
    ///
    /// # Panics
    ///
    /// Panics on an empty set.
    pub fn bounds(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Whether `x` lies inside `[x_0, x_{n-1}]`.
    pub fn contains(&self, x: T) -> bool {
        match (self.xs.first(), self.xs.last()) {
            (Some(&lo), Some(&hi)) => x >= lo && x <= hi,
            _ => false,
        }
    }

    /// Index `i` with `xs[i] == x`, if the query hits a knot exactly.
    ///
    /// A hit on an abscissa that occurs more than once is not reported, so
    /// coincident knots fall through to the formulas.
    pub(crate) fn knot_index(&self, x: T) -> Option<usize> {
        let i = self.xs.iter().position(|&xi| xi == x)?;
        if self.xs[i + 1..].iter().any(|&xj| xj == x) {
            return None;
        }
        Some(i)
    }
}
