//! Secant root finder
//!
//! Derivative-free: replaces f'(x) with the slope through the last two
//! iterates. The second starting point is a small perturbation of the first.

use super::{RootConfig, RootSolution};
use crate::error::{Result, RootError};
use crate::traits::{RealScalar, RootFinder, ScalarFunction};

/// Secant method with a fixed configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Secant<R> {
    /// Stopping criteria
    pub config: RootConfig<R>,
}

impl<R> Secant<R> {
    /// Create a secant solver with the given configuration
    pub fn new(config: RootConfig<R>) -> Self {
        Self { config }
    }
}

impl Default for Secant<f64> {
    fn default() -> Self {
        Self::new(RootConfig::default())
    }
}

impl<T: RealScalar> RootFinder<T> for Secant<T> {
    fn find_root<F>(&self, f: &F, x0: T) -> Result<RootSolution<T>>
    where
        F: ScalarFunction<T> + ?Sized,
    {
        secant(f, x0, &self.config)
    }
}

/// Find a root of `f` with the secant method starting from `x0`
///
/// The second point is `x0 * (1 + 1e-4) + 1e-4` (or `- 1e-4` for negative
/// `x0`). Any analytic derivative carried by `f` is ignored.
pub fn secant<T, F>(f: &F, x0: T, config: &RootConfig<T>) -> Result<RootSolution<T>>
where
    T: RealScalar,
    F: ScalarFunction<T> + ?Sized,
{
    let delta = T::from_f64(1e-4).unwrap_or_else(|| T::epsilon().sqrt());
    let mut p0 = x0;
    let mut p1 = if x0 >= T::zero() {
        x0 * (T::one() + delta) + delta
    } else {
        x0 * (T::one() + delta) - delta
    };
    let mut q0 = f.value(p0);
    let mut q1 = f.value(p1);

    if !q0.is_finite() || !q1.is_finite() {
        log::warn!("Secant start: non-finite residual");
        return Err(RootError::NonFinite { iteration: 0 });
    }
    if q1.abs() < q0.abs() {
        std::mem::swap(&mut p0, &mut p1);
        std::mem::swap(&mut q0, &mut q1);
    }

    for iter in 0..config.max_iterations {
        if q1 == q0 {
            log::warn!(
                "Secant iteration {}: flat secant at x = {:.6e}",
                iter,
                p1.to_f64_lossy()
            );
            return Err(RootError::ZeroDerivative {
                iteration: iter,
                estimate: p1.to_f64_lossy(),
            });
        }

        // Divide by the larger residual to keep the ratio bounded
        let p = if q1.abs() > q0.abs() {
            let r = q0 / q1;
            (p0 - r * p1) / (T::one() - r)
        } else {
            let r = q1 / q0;
            (p1 - r * p0) / (T::one() - r)
        };
        if !p.is_finite() {
            log::warn!("Secant iteration {}: non-finite step", iter);
            return Err(RootError::NonFinite { iteration: iter });
        }

        if config.should_log(iter + 1) {
            log::info!(
                "Secant iteration {}: x = {:.6e}, |f(x)| = {:.6e}",
                iter + 1,
                p.to_f64_lossy(),
                q1.abs().to_f64_lossy()
            );
        }

        if config.is_converged(p, p1) {
            let residual = f.value(p).abs();
            log::debug!(
                "Secant converged in {} iterations: root = {:.12e}",
                iter + 1,
                p.to_f64_lossy()
            );
            return Ok(RootSolution {
                root: p,
                iterations: iter + 1,
                residual,
            });
        }

        p0 = p1;
        q0 = q1;
        p1 = p;
        q1 = f.value(p1);
        if !q1.is_finite() {
            log::warn!("Secant iteration {}: non-finite residual", iter + 1);
            return Err(RootError::NonFinite { iteration: iter + 1 });
        }
    }

    log::warn!(
        "Secant failed to converge in {} iterations (last x = {:.6e})",
        config.max_iterations,
        p1.to_f64_lossy()
    );
    Err(RootError::NotConverged {
        iterations: config.max_iterations,
        last_estimate: p1.to_f64_lossy(),
    })
}
