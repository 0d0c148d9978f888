//! Scalar root finding.
//!
//! - [`bisection`] — bracketing; always converges given a sign change
//! - [`secant`] / [`secant_with`] — two-point iteration, faster but may
//!   diverge; capped by [`RootSettings::max_iter`]
//! - [`newton_method`] — Newton's method with a user-supplied derivative;
//!   returns its best iterate when the budget runs out
//!
//! Degenerate arithmetic (e.g. `f(a) == f(b)` in the secant update) is not
//! trapped: NaN and infinity propagate to the caller.

mod root;


pub use root::{bisection, newton_method, secant, secant_with, RootSettings};

/// Errors from root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptimError {
    /// Maximum number of iterations exceeded without converging.
    MaxIterations,
}

impl core::fmt::Display for OptimError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OptimError::MaxIterations => write!(f, "maximum iterations exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OptimError {}
