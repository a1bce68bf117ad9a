//! Derived properties of a linear wave with known wavelength

use crate::dispersion::DepthRegime;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Wave number, frequency, celerity and group velocity of a linear wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveProperties {
    /// Wave number k = 2π/L
    pub wave_number: f64,
    /// Angular frequency ω = 2π/T
    pub angular_frequency: f64,
    /// Phase celerity C = L/T
    pub celerity: f64,
    /// Group velocity factor n = Cg/C
    pub group_factor: f64,
    /// Group celerity Cg = n·C
    pub group_celerity: f64,
    /// Relative-depth regime
    pub regime: DepthRegime,
}

impl WaveProperties {
    /// Compute properties from period, depth and a resolved wavelength
    pub fn new(period: f64, depth: f64, wavelength: f64) -> Self {
        let wave_number = TAU / wavelength;
        let celerity = wavelength / period;
        let group_factor = group_factor(wave_number * depth);

        Self {
            wave_number,
            angular_frequency: TAU / period,
            celerity,
            group_factor,
            group_celerity: group_factor * celerity,
            regime: DepthRegime::classify(depth, wavelength),
        }
    }
}

/// n = ½(1 + 2kd / sinh 2kd), tending to 1 in shallow water and ½ in deep water
pub fn group_factor(kd: f64) -> f64 {
    let two_kd = 2.0 * kd;
    if two_kd < 1e-8 {
        return 1.0;
    }
    let sinh = two_kd.sinh();
    if sinh.is_infinite() {
        return 0.5;
    }
    0.5 * (1.0 + two_kd / sinh)
}
