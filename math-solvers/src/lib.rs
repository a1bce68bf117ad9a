//! Scalar root finders for implicit physical relations
//!
//! This crate provides local iterative methods for solving f(x) = 0 in one
//! unknown, behind a small trait so callers can swap the numerical method
//! without touching their model code.
//!
//! # Features
//!
//! - **Newton-Raphson**: analytic derivative or forward finite difference
//! - **Secant**: derivative-free, two-point iteration
//! - **Generic Scalar Types**: Works with f64 and f32
//! - **Structured failures**: non-convergence, vanishing slope and non-finite
//!   iterates are reported as [`RootError`] instead of a silent bad root
//!
//! # Example
//!
//! ```rust
//! use math_ocean_solvers::{RootConfig, RootMethod};
//!
//! let f = |x: f64| x.cos() - x;
//! let solution = RootMethod::Secant.solve(&f, 1.0, &RootConfig::<f64>::default()).unwrap();
//! assert!((solution.root - 0.7390851332151607).abs() < 1e-8);
//! ```

pub mod error;
pub mod roots;
pub mod traits;

// Re-export main types
pub use error::RootError;
pub use traits::{RealScalar, RootFinder, ScalarFunction, WithDerivative};

// Re-export root finders
pub use roots::{Newton, RootConfig, RootMethod, RootSolution, Secant, newton, secant};
