//! # numkit
//!
//! Pure-Rust numerical methods for scalar functions and point sets,
//! no-std compatible: interpolation, least-squares line fitting, root
//! finding, finite-difference derivatives, and fixed-step ODE integration.
//!
//! Every routine is a synchronous, reentrant transform from its inputs to a
//! number. Nothing is cached between calls and no global state exists, so
//! independent threads can call anything concurrently.
//!
//! ## Quick start
//!
//! ```
//! use numkit::interp::{lagrange, SampleSet};
//! use numkit::optim::bisection;
//!
//! let xs = [1.0_f64, 2.0, 3.0];
//! let ys = [2.0, 4.0, 6.0];
//! let samples = SampleSet::new(&xs, &ys).unwrap();
//! assert_eq!(lagrange(&samples, 2.5), 5.0);
//!
//! let root = bisection(|x| x * x - 2.0, 0.0, 2.0, 1e-10);
//! assert!((root - core::f64::consts::SQRT_2).abs() < 1e-10);
//! ```
//!
//! ## Modules
//!
//! - [`interp`] — [`SampleSet`](interp::SampleSet) view over knot arrays;
//!   two-point linear, Lagrange, Newton divided differences, local two-point
//!   cubic/quadratic splines, and Akima interpolation.
//!
//! - [`fit`] — closed-form ordinary least-squares line fit.
//!
//! - [`optim`] — bisection, secant (iteration-capped), and Newton's method.
//!   Requires `optim` feature.
//!
//! - [`diff`] — forward, backward, and central finite differences.
//!
//! - [`ode`] — fixed-step Euler and RK4 for `dy/dt = f(t, y)`. Requires
//!   `ode` feature.
//!
//! - [`traits`] — the [`FloatScalar`] element bound (`f32`, `f64`).
//!
//! ## Numerical degeneracy
//!
//! Division by zero from degenerate input (coincident abscissae, vertical
//! least-squares data, a flat secant) is not trapped: NaN and infinity
//! propagate to the caller. Typed errors are reserved for precondition
//! checks ([`interp::InterpError`]) and the secant iteration cap
//! ([`optim::OptimError`]).
//!
//! ## Logging
//!
//! Solvers report through the [`log`](https://docs.rs/log) facade: `warn`
//! when an iteration budget runs out or a step size is unusable, `trace`
//! with iteration counts on convergence. No logger is installed here.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` impls |
//! | `alloc`   | via std  | Newton divided differences and Akima (heap scratch buffers) |
//! | `ode`     | yes      | Euler and RK4 steppers |
//! | `optim`   | yes      | Root finding |
//! | `all`     | no       | All features: `std` + `ode` + `optim` |
//!
//! Without `std`, floating-point functions fall back to the pure-Rust
//! `libm` implementation through `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod diff;
pub mod fit;
pub mod interp;
#[cfg(feature = "ode")]
pub mod ode;
#[cfg(feature = "optim")]
pub mod optim;
pub mod traits;

pub use fit::LinearFit;
pub use interp::{InterpError, SampleSet};
#[cfg(feature = "optim")]
pub use optim::{OptimError, RootSettings};
pub use traits::FloatScalar;
