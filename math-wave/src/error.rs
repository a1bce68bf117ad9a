//! Error types for wave computations.
//!
//! Inputs are not validated: non-physical values (zero or negative period or
//! depth) give NaN/infinite results or a diverging solver, never a dedicated
//! validation error. The only reportable failure is the dispersion solver
//! not settling on a wavelength.

use math_ocean_solvers::RootError;
use thiserror::Error;

/// Errors that can occur while computing wave kinematics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaveError {
    /// The wavelength root finder did not converge.
    #[error("wavelength did not converge for period {period}, depth {depth}: {source}")]
    NumericalDivergence {
        /// Wave period passed to the dispersion solver
        period: f64,
        /// Water depth passed to the dispersion solver
        depth: f64,
        /// Underlying root finder failure
        #[source]
        source: RootError,
    },
}

/// A specialized `Result` type for wave computations.
pub type Result<T> = std::result::Result<T, WaveError>;

impl WaveError {
    /// Returns `true` if the dispersion solver diverged.
    pub fn is_divergence(&self) -> bool {
        matches!(self, WaveError::NumericalDivergence { .. })
    }

    /// The root finder failure behind this error.
    pub fn root_error(&self) -> &RootError {
        match self {
            WaveError::NumericalDivergence { source, .. } => source,
        }
    }
}
