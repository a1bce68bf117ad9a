//! Iterative root finders for scalar equations
//!
//! This module provides local methods that refine an initial guess:
//! - [`newton`]: Newton-Raphson, quadratic convergence when f' is known
//! - [`secant`]: derivative-free secant iteration, superlinear convergence

mod newton;
mod secant;

pub use newton::{Newton, newton};
pub use secant::{Secant, secant};

use crate::error::Result;
use crate::traits::{RealScalar, RootFinder, ScalarFunction};
use serde::{Deserialize, Serialize};

/// Root finder configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootConfig<R> {
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the step between iterates
    pub tolerance: R,
    /// Relative tolerance on the step between iterates
    pub relative_tolerance: R,
    /// Log progress every N iterations (0 = no output)
    pub print_interval: usize,
}

impl Default for RootConfig<f64> {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance: 1.48e-8,
            relative_tolerance: 0.0,
            print_interval: 0,
        }
    }
}

impl Default for RootConfig<f32> {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance: 1e-5,
            relative_tolerance: 0.0,
            print_interval: 0,
        }
    }
}

impl<R: RealScalar> RootConfig<R> {
    /// Whether two successive iterates are close enough to stop
    #[inline]
    pub(crate) fn is_converged(&self, next: R, current: R) -> bool {
        (next - current).abs() < self.tolerance + self.relative_tolerance * next.abs()
    }

    #[inline]
    pub(crate) fn should_log(&self, iteration: usize) -> bool {
        self.print_interval > 0 && iteration % self.print_interval == 0
    }
}

/// Root finder result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootSolution<T> {
    /// Location of the root
    pub root: T,
    /// Number of iterations
    pub iterations: usize,
    /// |f(root)|
    pub residual: T,
}

/// Available root-finding methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootMethod {
    /// Newton-Raphson (finite-difference derivative if none is supplied)
    #[default]
    Newton,
    /// Secant method, ignores any analytic derivative
    Secant,
}

impl RootMethod {
    /// Run this method on `f` from `x0`
    pub fn solve<T, F>(self, f: &F, x0: T, config: &RootConfig<T>) -> Result<RootSolution<T>>
    where
        T: RealScalar,
        F: ScalarFunction<T> + ?Sized,
    {
        match self {
            RootMethod::Newton => Newton::new(*config).find_root(f, x0),
            RootMethod::Secant => Secant::new(*config).find_root(f, x0),
        }
    }

    /// Short lowercase name used in logs and config files
    pub fn name(self) -> &'static str {
        match self {
            RootMethod::Newton => "newton",
            RootMethod::Secant => "secant",
        }
    }
}
