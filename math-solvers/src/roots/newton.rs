//! Newton-Raphson root finder
//!
//! Iterates x_{n+1} = x_n - f(x_n) / f'(x_n). Converges quadratically near a
//! simple root when started close enough; far from the root it may wander or
//! stall, which is reported as an error rather than a bogus root.

use super::{RootConfig, RootSolution};
use crate::error::{Result, RootError};
use crate::traits::{RealScalar, RootFinder, ScalarFunction};

/// Newton-Raphson method with a fixed configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Newton<R> {
    /// Stopping criteria
    pub config: RootConfig<R>,
}

impl<R> Newton<R> {
    /// Create a Newton solver with the given configuration
    pub fn new(config: RootConfig<R>) -> Self {
        Self { config }
    }
}

impl Default for Newton<f64> {
    fn default() -> Self {
        Self::new(RootConfig::default())
    }
}

impl<T: RealScalar> RootFinder<T> for Newton<T> {
    fn find_root<F>(&self, f: &F, x0: T) -> Result<RootSolution<T>>
    where
        F: ScalarFunction<T> + ?Sized,
    {
        newton(f, x0, &self.config)
    }
}

/// Find a root of `f` with Newton's method starting from `x0`
///
/// Uses `f.derivative(x)` when available, otherwise a forward finite
/// difference with step `sqrt(eps) * max(|x|, 1)`.
///
/// # Example
///
/// ```rust
/// use math_ocean_solvers::{RootConfig, WithDerivative, newton};
///
/// let f = WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
/// let solution = newton(&f, 1.0, &RootConfig::<f64>::default()).unwrap();
/// assert!((solution.root - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn newton<T, F>(f: &F, x0: T, config: &RootConfig<T>) -> Result<RootSolution<T>>
where
    T: RealScalar,
    F: ScalarFunction<T> + ?Sized,
{
    let mut x = x0;

    for iter in 0..config.max_iterations {
        let fx = f.value(x);
        if !fx.is_finite() {
            log::warn!("Newton iteration {}: non-finite residual", iter);
            return Err(RootError::NonFinite { iteration: iter });
        }
        if fx.is_zero() {
            return Ok(RootSolution {
                root: x,
                iterations: iter,
                residual: T::zero(),
            });
        }

        let dfx = f
            .derivative(x)
            .unwrap_or_else(|| finite_difference(f, x, fx));
        if !dfx.is_finite() {
            log::warn!("Newton iteration {}: non-finite derivative", iter);
            return Err(RootError::NonFinite { iteration: iter });
        }
        if dfx.is_zero() {
            log::warn!(
                "Newton iteration {}: zero derivative at x = {:.6e}",
                iter,
                x.to_f64_lossy()
            );
            return Err(RootError::ZeroDerivative {
                iteration: iter,
                estimate: x.to_f64_lossy(),
            });
        }

        let next = x - fx / dfx;
        if !next.is_finite() {
            log::warn!(
                "Newton iteration {}: non-finite step from x = {:.6e}",
                iter,
                x.to_f64_lossy()
            );
            return Err(RootError::NonFinite { iteration: iter });
        }

        if config.should_log(iter + 1) {
            log::info!(
                "Newton iteration {}: x = {:.6e}, |f(x)| = {:.6e}",
                iter + 1,
                next.to_f64_lossy(),
                fx.abs().to_f64_lossy()
            );
        }

        if config.is_converged(next, x) {
            let residual = f.value(next).abs();
            log::debug!(
                "Newton converged in {} iterations: root = {:.12e}",
                iter + 1,
                next.to_f64_lossy()
            );
            return Ok(RootSolution {
                root: next,
                iterations: iter + 1,
                residual,
            });
        }

        x = next;
    }

    log::warn!(
        "Newton failed to converge in {} iterations (last x = {:.6e})",
        config.max_iterations,
        x.to_f64_lossy()
    );
    Err(RootError::NotConverged {
        iterations: config.max_iterations,
        last_estimate: x.to_f64_lossy(),
    })
}

#[inline]
fn finite_difference<T, F>(f: &F, x: T, fx: T) -> T
where
    T: RealScalar,
    F: ScalarFunction<T> + ?Sized,
{
    let h = T::epsilon().sqrt() * x.abs().max(T::one());
    (f.value(x + h) - fx) / h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::WithDerivative;
    use approx::assert_relative_eq;

    #[test]
    fn test_newton_sqrt2() {
        let f = WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
        let solution = newton(&f, 1.0, &RootConfig::<f64>::default()).unwrap();

        assert_relative_eq!(solution.root, 2.0_f64.sqrt(), epsilon = 1e-12);
        assert!(solution.iterations <= 7);
        assert!(solution.residual < 1e-12);
    }

    #[test]
    fn test_newton_finite_difference() {
        let f = |x: f64| x.powi(3) - 8.0;
        let solution = newton(&f, 3.0, &RootConfig::<f64>::default()).unwrap();

        assert_relative_eq!(solution.root, 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_newton_exact_root_at_guess() {
        let f = |x: f64| x - 4.0;
        let solution = newton(&f, 4.0, &RootConfig::<f64>::default()).unwrap();

        assert_eq!(solution.iterations, 0);
        assert_eq!(solution.root, 4.0);
    }

    #[test]
    fn test_newton_zero_derivative() {
        // f'(0) = 0 for x^2 + 1
        let f = WithDerivative::new(|x: f64| x * x + 1.0, |x: f64| 2.0 * x);
        let err = newton(&f, 0.0, &RootConfig::<f64>::default()).unwrap_err();

        assert!(matches!(err, RootError::ZeroDerivative { iteration: 0, .. }));
    }

    #[test]
    fn test_newton_iteration_limit() {
        // No real root: iterates bounce around forever
        let f = WithDerivative::new(|x: f64| x * x + 1.0, |x: f64| 2.0 * x);
        let config = RootConfig {
            max_iterations: 10,
            ..RootConfig::<f64>::default()
        };
        let err = newton(&f, 0.5, &config).unwrap_err();

        assert!(err.is_divergence());
    }

    #[test]
    fn test_newton_non_finite() {
        let f = |x: f64| x.ln();
        let err = newton(&f, -1.0, &RootConfig::<f64>::default()).unwrap_err();

        assert_eq!(err, RootError::NonFinite { iteration: 0 });
    }

    #[test]
    fn test_newton_non_finite_derivative() {
        let f = WithDerivative::new(|x: f64| x - 1.0, |_: f64| f64::NAN);
        let err = newton(&f, 0.0, &RootConfig::<f64>::default()).unwrap_err();

        assert_eq!(err, RootError::NonFinite { iteration: 0 });
    }

    #[test]
    fn test_newton_non_finite_step() {
        // A subnormal slope sends the step to infinity
        let f = WithDerivative::new(|x: f64| x - 1.0, |_: f64| 1e-320);
        let err = newton(&f, 0.0, &RootConfig::<f64>::default()).unwrap_err();

        assert_eq!(err, RootError::NonFinite { iteration: 0 });
        assert!(err.is_divergence());
    }

    #[test]
    fn test_newton_f32() {
        let f = WithDerivative::new(|x: f32| x * x - 9.0, |x: f32| 2.0 * x);
        let solution = Newton::new(RootConfig::<f32>::default())
            .find_root(&f, 1.0)
            .unwrap();

        assert_relative_eq!(solution.root, 3.0_f32, epsilon = 1e-5);
    }
}
