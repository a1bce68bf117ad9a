//! Error types for scalar root finding.
//!
//! Every failure of an iterative root finder is a flavour of divergence:
//! the iteration budget ran out, the local slope vanished, or the iterate
//! left the finite reals.

use thiserror::Error;

/// Errors that can occur while searching for a root.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootError {
    /// The iteration budget was exhausted before the step fell below tolerance.
    #[error("root finder did not converge after {iterations} iterations (last estimate {last_estimate})")]
    NotConverged {
        /// Number of iterations performed
        iterations: usize,
        /// Last iterate before giving up
        last_estimate: f64,
    },

    /// The derivative (or secant slope) is zero, so no step can be taken.
    #[error("zero derivative at iteration {iteration} (estimate {estimate})")]
    ZeroDerivative {
        /// Iteration at which the slope vanished
        iteration: usize,
        /// Iterate at which the slope vanished
        estimate: f64,
    },

    /// An iterate or a function value became NaN or infinite.
    #[error("non-finite value encountered at iteration {iteration}")]
    NonFinite {
        /// Iteration at which the non-finite value appeared
        iteration: usize,
    },
}

/// A specialized `Result` type for root finding.
pub type Result<T> = std::result::Result<T, RootError>;

impl RootError {
    /// Returns `true` for every variant: each one means the method failed to
    /// settle on a root.
    pub fn is_divergence(&self) -> bool {
        matches!(
            self,
            RootError::NotConverged { .. }
                | RootError::ZeroDerivative { .. }
                | RootError::NonFinite { .. }
        )
    }

    /// Returns `true` if the iteration budget was exhausted.
    pub fn is_iteration_limit(&self) -> bool {
        matches!(self, RootError::NotConverged { .. })
    }

    /// Number of iterations performed before the failure.
    pub fn iterations(&self) -> usize {
        match self {
            RootError::NotConverged { iterations, .. } => *iterations,
            RootError::ZeroDerivative { iteration, .. } | RootError::NonFinite { iteration } => {
                *iteration
            }
        }
    }
}
