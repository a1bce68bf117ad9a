//! Linear dispersion relation in transitional water
//!
//! The dispersion relation ω² = g·k·tanh(k·d) links period and wavelength
//! at a given depth. Written for the wavelength L it reads
//! ```text
//! L = g·T²/(2π) · tanh(2π·d/L)
//! ```
//! which is implicit in L and solved here by root finding on
//! `f(L) = g·T²/(2π)·tanh(2π·d/L) − L`.
//!
//! Reference: EM 1110-2-1100, Coastal Engineering Manual, Part II-1.

use crate::config::DispersionConfig;
use crate::error::{Result, WaveError};
use math_ocean_solvers::WithDerivative;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Converged wavelength with solver diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DispersionSolution {
    /// Wavelength, in the length unit of the depth
    pub wavelength: f64,
    /// Root finder iterations
    pub iterations: usize,
    /// |f(L)| at the returned wavelength
    pub residual: f64,
}

/// Solve the dispersion relation for the wavelength
///
/// Uses Newton's method from an initial guess of 10000 length units with the
/// default tolerance and iteration cap. `period`, `depth` and `gravity` must
/// be positive; other values give undefined results (usually a
/// [`WaveError::NumericalDivergence`]).
///
/// # Arguments
/// * `period` - Wave period T
/// * `depth` - Still-water depth d
/// * `gravity` - Gravitational acceleration g, in the length unit of `depth`
///
/// # Returns
/// Wavelength L satisfying L = gT²/(2π) · tanh(2πd/L)
///
/// # Example
///
/// ```rust
/// use math_ocean_wave::dispersion::{dispersion_residual, solve_wavelength};
///
/// // 10 s wave in 15 m of water, millimetre units
/// let l = solve_wavelength(10.0, 15000.0, 9810.0).unwrap();
/// assert!(l > 100_000.0 && l < 120_000.0);
/// assert!(dispersion_residual(l, 10.0, 15000.0, 9810.0).abs() < 1e-6);
/// ```
pub fn solve_wavelength(period: f64, depth: f64, gravity: f64) -> Result<f64> {
    solve_wavelength_with(period, depth, gravity, &DispersionConfig::default())
        .map(|solution| solution.wavelength)
}

/// Solve the dispersion relation with explicit solver settings
pub fn solve_wavelength_with(
    period: f64,
    depth: f64,
    gravity: f64,
    config: &DispersionConfig,
) -> Result<DispersionSolution> {
    let l0 = deep_water_wavelength(period, gravity);

    // d/dL tanh(2πd/L) = sech²(2πd/L) · (−2πd/L²)
    let relation = WithDerivative::new(
        |l: f64| l0 * (TAU * depth / l).tanh() - l,
        |l: f64| {
            let kd = TAU * depth / l;
            let sech = 1.0 / kd.cosh();
            -l0 * sech * sech * kd / l - 1.0
        },
    );

    let solution = config
        .method
        .solve(&relation, config.initial_guess, &config.root_config())
        .map_err(|source| WaveError::NumericalDivergence {
            period,
            depth,
            source,
        })?;

    log::debug!(
        "Wavelength for T = {}, d = {}: L = {:.6e} ({} {} iterations)",
        period,
        depth,
        solution.root,
        solution.iterations,
        config.method.name()
    );

    Ok(DispersionSolution {
        wavelength: solution.root,
        iterations: solution.iterations,
        residual: solution.residual,
    })
}

/// Residual of the dispersion relation, `g·T²/(2π)·tanh(2π·d/L) − L`
#[inline]
pub fn dispersion_residual(wavelength: f64, period: f64, depth: f64, gravity: f64) -> f64 {
    deep_water_wavelength(period, gravity) * (TAU * depth / wavelength).tanh() - wavelength
}

/// Deep-water wavelength L0 = g·T²/(2π)
#[inline]
pub fn deep_water_wavelength(period: f64, gravity: f64) -> f64 {
    gravity * period * period / (2.0 * PI)
}

/// Shallow-water wavelength L = T·√(g·d)
#[inline]
pub fn shallow_water_wavelength(period: f64, depth: f64, gravity: f64) -> f64 {
    period * (gravity * depth).sqrt()
}

/// Relative-depth classification of a wave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthRegime {
    /// d/L < 1/20: celerity depends on depth only
    Shallow,
    /// 1/20 ≤ d/L ≤ 1/2: full dispersion relation required
    Transitional,
    /// d/L > 1/2: the bottom no longer affects the wave
    Deep,
}

impl DepthRegime {
    /// Classify from depth and wavelength (same length unit)
    pub fn classify(depth: f64, wavelength: f64) -> Self {
        let relative_depth = depth / wavelength;
        if relative_depth < 1.0 / 20.0 {
            DepthRegime::Shallow
        } else if relative_depth > 0.5 {
            DepthRegime::Deep
        } else {
            DepthRegime::Transitional
        }
    }
}
