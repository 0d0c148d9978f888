extern crate alloc;

use alloc::vec::Vec;

use crate::traits::{three, two, FloatScalar};

use super::{InterpError, SampleSet};

/// Akima piecewise cubic interpolant (heap-allocated, runtime-sized).
///
/// Node derivatives are weighted averages of neighbouring secant slopes,
/// with weights `|m_{i+1} - m_i|` and `|m_{i-1} - m_{i-2}|`, which keeps the
/// curve from overshooting near isolated outliers. At the two ends the
/// secant slopes are extended by parabolic extrapolation
/// (`m_{-1} = 2m_0 - m_1`, `m_{-2} = 3m_0 - 2m_1`, and symmetrically on the
/// right), so every node gets a well-defined derivative. Requires at least
/// 3 points.
///
/// Each segment stores `[a, b, c, d]` for
/// `S_i(t) = a + t·(b + t·(c + t·d))`, `t = (x - x_i) / h_i ∈ [0, 1]`.
///
/// # Example
///
/// ```
/// use numkit::interp::{Akima, SampleSet};
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
/// let ys = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let s = SampleSet::new(&xs, &ys).unwrap();
/// let akima = Akima::new(&s).unwrap();
/// assert!((akima.eval(2.5).unwrap() - 2.5).abs() < 1e-14);
/// ```
#[derive(Debug, Clone)]
pub struct Akima<T> {
    xs: Vec<T>,
    ys: Vec<T>,
    coeffs: Vec<[T; 4]>,
}

impl<T: FloatScalar> Akima<T> {
    /// Build the interpolant from a sample set.
    ///
    /// Returns `InterpError::TooFewPoints` if the set has fewer than 3 knots.
    pub fn new(samples: &SampleSet<'_, T>) -> Result<Self, InterpError> {
        let n = samples.len();
        if n < 3 {
            return Err(InterpError::TooFewPoints);
        }
        let xs = samples.xs();
        let ys = samples.ys();

        // Extended secant slopes: ext[k + 2] = m[k] for k in -2..=n
        let mut ext = alloc::vec![T::zero(); n + 3];
        for i in 0..n - 1 {
            ext[i + 2] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]);
        }
        let (m0, m1) = (ext[2], ext[3]);
        ext[1] = two::<T>() * m0 - m1;
        ext[0] = three::<T>() * m0 - two::<T>() * m1;
        let (ml, ml1) = (ext[n], ext[n - 1]);
        ext[n + 1] = two::<T>() * ml - ml1;
        ext[n + 2] = three::<T>() * ml - two::<T>() * ml1;

        let slopes: Vec<T> = (0..n).map(|i| node_slope(&ext, i)).collect();

        let mut coeffs = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            let h = xs[i + 1] - xs[i];
            let dy = ys[i + 1] - ys[i];
            let b0 = h * slopes[i];
            let b1 = h * slopes[i + 1];
            let c = three::<T>() * dy - two::<T>() * b0 - b1;
            let d = b0 + b1 - two::<T>() * dy;
            coeffs.push([ys[i], b0, c, d]);
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            coeffs,
        })
    }

    /// Evaluate the interpolant at `x`.
    ///
    /// The segment is found by a forward scan from the left. Knots are
    /// reproduced exactly.
    ///
    /// # Errors
    ///
    /// `InterpError::OutOfRange` if `x` lies outside `[x_0, x_{n-1}]` or is NaN.
    pub fn eval(&self, x: T) -> Result<T, InterpError> {
        let n = self.xs.len();
        if !(x >= self.xs[0] && x <= self.xs[n - 1]) {
            return Err(InterpError::OutOfRange);
        }

        let mut i = 0;
        while i + 2 < n && x > self.xs[i + 1] {
            i += 1;
        }
        if x == self.xs[i] {
            return Ok(self.ys[i]);
        }
        if x == self.xs[i + 1] {
            return Ok(self.ys[i + 1]);
        }

        let t = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        let [a, b, c, d] = self.coeffs[i];
        Ok(a + t * (b + t * (c + t * d)))
    }

    /// The knot x-values.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// The knot y-values.
    pub fn ys(&self) -> &[T] {
        &self.ys
    }
}

/// Akima derivative at node `i` from the extended slope array.
fn node_slope<T: FloatScalar>(ext: &[T], i: usize) -> T {
    // ext[i + 2] = m_i
    let m_im2 = ext[i];
    let m_im1 = ext[i + 1];
    let m_i = ext[i + 2];
    let m_ip1 = ext[i + 3];

    let w1 = (m_ip1 - m_i).abs();
    let w2 = (m_im1 - m_im2).abs();
    let denom = w1 + w2;
    if denom == T::zero() {
        (m_im1 + m_i) / two::<T>()
    } else {
        (w1 * m_im1 + w2 * m_i) / denom
    }
}

/// One-shot Akima evaluation: build the segment table, evaluate at `x`,
/// and release the scratch storage.
///
/// # Errors
///
/// `InterpError::TooFewPoints` for fewer than 3 knots,
/// `InterpError::OutOfRange` for queries outside the knot range.
///
/// # Example
///
/// ```
/// use numkit::interp::{akima, SampleSet};
///
/// let xs = [1.0_f64, 2.0, 3.0];
/// let ys = [2.0, 4.0, 6.0];
/// let s = SampleSet::new(&xs, &ys).unwrap();
/// assert!((akima(&s, 2.5).unwrap() - 5.0).abs() < 1e-14);
/// ```
pub fn akima<T: FloatScalar>(samples: &SampleSet<'_, T>, x: T) -> Result<T, InterpError> {
    Akima::new(samples)?.eval(x)
}
