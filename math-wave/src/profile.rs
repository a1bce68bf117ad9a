//! Batch evaluation over depth or phase for a single resolved wave
//!
//! The wavelength is solved once (in [`AiryWave::resolve`]); every sample
//! then reuses it.

use crate::kinematics::{AiryWave, Kinematics, SurfaceLimit};
use crate::parallel::parallel_map;
use serde::{Deserialize, Serialize};

/// Kinematics at one (elevation, phase) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    /// Elevation relative to still-water level
    pub elevation: f64,
    /// Phase angle (radians)
    pub phase: f64,
    /// Kinematics at this point
    pub kinematics: Kinematics,
}

/// Kinematics at several elevations for a fixed phase
///
/// # Arguments
/// * `wave` - Wave with resolved wavelength
/// * `elevations` - Elevations relative to still-water level
/// * `phase` - Phase angle (radians)
/// * `limit` - Upper truncation limit
///
/// # Returns
/// One sample per elevation, in input order
pub fn vertical_profile(
    wave: &AiryWave,
    elevations: &[f64],
    phase: f64,
    limit: SurfaceLimit,
) -> Vec<ProfileSample> {
    parallel_map(elevations, |&elevation| ProfileSample {
        elevation,
        phase,
        kinematics: wave.kinematics_at(elevation, phase, limit),
    })
}

/// Kinematics at a fixed elevation over several phases
///
/// # Arguments
/// * `wave` - Wave with resolved wavelength
/// * `elevation` - Elevation relative to still-water level
/// * `phases` - Phase angles (radians)
/// * `limit` - Upper truncation limit
///
/// # Returns
/// One sample per phase, in input order
pub fn phase_series(
    wave: &AiryWave,
    elevation: f64,
    phases: &[f64],
    limit: SurfaceLimit,
) -> Vec<ProfileSample> {
    parallel_map(phases, |&phase| ProfileSample {
        elevation,
        phase,
        kinematics: wave.kinematics_at(elevation, phase, limit),
    })
}

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// `n` elevations from the seabed (−d) up to the crest (H/2)
pub fn water_column(wave: &AiryWave, n: usize) -> Vec<f64> {
    linspace(-wave.depth, wave.amplitude(), n)
}
