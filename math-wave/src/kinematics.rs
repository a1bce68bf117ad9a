//! Airy (linear) wave kinematics at a point in the water column
//!
//! For a wave of height H, period T and wavelength L in depth d, linear
//! theory gives at elevation z (positive up from still-water level) and
//! phase θ:
//! ```text
//! η  = H/2 · cos θ
//! u  = H/2 · gT/L · cosh(k(z+d))/cosh(kd) · cos θ
//! w  = H/2 · gT/L · sinh(k(z+d))/cosh(kd) · sin θ
//! ax = gπH/L · cosh(k(z+d))/cosh(kd) · sin θ
//! az = gπH/L · sinh(k(z+d))/cosh(kd) · cos θ
//! ```
//! with k = 2π/L. Points between still-water level and the crest
//! (0 < z ≤ H/2) are evaluated with the surface attenuation (z = 0). Points
//! below the seabed or above the surface limit get exactly zero in every
//! component.
//!
//! Reference: EM 1110-2-1100, Coastal Engineering Manual, Part II-1.

use crate::config::WaveConfig;
use crate::dispersion::solve_wavelength_with;
use crate::error::Result;
use crate::properties::WaveProperties;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Beyond this argument `cosh` overflows f64
const COSH_OVERFLOW: f64 = 700.0;

/// Which kinematic quantity to return
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputSelection {
    /// Surface elevation η (`"el"`)
    Elevation,
    /// Horizontal particle velocity u (`"vx"`)
    HorizontalVelocity,
    /// Vertical particle velocity w (`"vz"`)
    VerticalVelocity,
    /// Horizontal particle acceleration (`"ax"`)
    HorizontalAcceleration,
    /// Vertical particle acceleration (`"az"`)
    VerticalAcceleration,
    /// All five quantities
    #[default]
    Full,
}

impl OutputSelection {
    /// Parse a short component name, case-insensitively
    ///
    /// Recognises `el`, `vx`, `vz`, `ax` and `az`. Anything else, `"full"`
    /// included, selects [`OutputSelection::Full`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "el" => OutputSelection::Elevation,
            "vx" => OutputSelection::HorizontalVelocity,
            "vz" => OutputSelection::VerticalVelocity,
            "ax" => OutputSelection::HorizontalAcceleration,
            "az" => OutputSelection::VerticalAcceleration,
            _ => OutputSelection::Full,
        }
    }
}

impl From<&str> for OutputSelection {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

/// Upper elevation limit above which kinematics are zeroed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceLimit {
    /// Limit at the crest, H/2, independent of phase
    #[default]
    CrestAmplitude,
    /// Limit at the instantaneous surface elevation η(θ)
    Instantaneous,
}

impl SurfaceLimit {
    /// Parse a truncation flag: `"false"` (any case) selects the crest
    /// limit, every other value the instantaneous surface.
    pub fn from_flag(flag: &str) -> Self {
        if flag.eq_ignore_ascii_case("false") {
            SurfaceLimit::CrestAmplitude
        } else {
            SurfaceLimit::Instantaneous
        }
    }
}

impl From<bool> for SurfaceLimit {
    fn from(truncate: bool) -> Self {
        if truncate {
            SurfaceLimit::Instantaneous
        } else {
            SurfaceLimit::CrestAmplitude
        }
    }
}

/// Surface elevation, particle velocity and particle acceleration at a point
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    /// Surface elevation η
    pub elevation: f64,
    /// Horizontal velocity u
    pub horizontal_velocity: f64,
    /// Vertical velocity w
    pub vertical_velocity: f64,
    /// Horizontal acceleration
    pub horizontal_acceleration: f64,
    /// Vertical acceleration
    pub vertical_acceleration: f64,
}

impl Kinematics {
    /// All components exactly zero (point outside the water column)
    pub const ZERO: Self = Self {
        elevation: 0.0,
        horizontal_velocity: 0.0,
        vertical_velocity: 0.0,
        horizontal_acceleration: 0.0,
        vertical_acceleration: 0.0,
    };

    /// (elevation, u, w, ax, az)
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.elevation,
            self.horizontal_velocity,
            self.vertical_velocity,
            self.horizontal_acceleration,
            self.vertical_acceleration,
        )
    }

    /// Components in tuple order
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.elevation,
            self.horizontal_velocity,
            self.vertical_velocity,
            self.horizontal_acceleration,
            self.vertical_acceleration,
        ]
    }

    /// Whether every component is exactly zero
    pub fn is_zero(&self) -> bool {
        self.as_array().iter().all(|&v| v == 0.0)
    }

    /// Select one component, or all of them for [`OutputSelection::Full`]
    pub fn component(&self, selection: OutputSelection) -> KinematicsOutput {
        match selection {
            OutputSelection::Elevation => KinematicsOutput::Scalar(self.elevation),
            OutputSelection::HorizontalVelocity => {
                KinematicsOutput::Scalar(self.horizontal_velocity)
            }
            OutputSelection::VerticalVelocity => KinematicsOutput::Scalar(self.vertical_velocity),
            OutputSelection::HorizontalAcceleration => {
                KinematicsOutput::Scalar(self.horizontal_acceleration)
            }
            OutputSelection::VerticalAcceleration => {
                KinematicsOutput::Scalar(self.vertical_acceleration)
            }
            OutputSelection::Full => KinematicsOutput::Full(*self),
        }
    }
}

/// Result of [`evaluate`]: one component or all five
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum KinematicsOutput {
    /// A single selected component
    Scalar(f64),
    /// All components
    Full(Kinematics),
}

impl KinematicsOutput {
    /// The scalar value, if a single component was selected
    pub fn scalar(&self) -> Option<f64> {
        match self {
            KinematicsOutput::Scalar(v) => Some(*v),
            KinematicsOutput::Full(_) => None,
        }
    }

    /// All components, if the full set was selected
    pub fn full(&self) -> Option<Kinematics> {
        match self {
            KinematicsOutput::Scalar(_) => None,
            KinematicsOutput::Full(k) => Some(*k),
        }
    }
}

/// A linear wave with its wavelength resolved
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiryWave {
    /// Wave height H (crest to trough)
    pub height: f64,
    /// Wave period T
    pub period: f64,
    /// Still-water depth d
    pub depth: f64,
    /// Gravitational acceleration g
    pub gravity: f64,
    /// Wavelength L
    pub wavelength: f64,
}

impl AiryWave {
    /// Build a wave, solving the dispersion relation unless a non-zero
    /// wavelength is supplied
    ///
    /// A supplied wavelength is used as-is, without checking it against the
    /// dispersion relation.
    pub fn resolve(
        height: f64,
        period: f64,
        depth: f64,
        wavelength: Option<f64>,
        config: &WaveConfig,
    ) -> Result<Self> {
        let wavelength = match wavelength {
            Some(l) if l != 0.0 => l,
            _ => solve_wavelength_with(period, depth, config.gravity, &config.dispersion)?
                .wavelength,
        };

        Ok(Self::with_wavelength(
            height,
            period,
            depth,
            wavelength,
            config.gravity,
        ))
    }

    /// Build a wave from a known wavelength
    pub fn with_wavelength(
        height: f64,
        period: f64,
        depth: f64,
        wavelength: f64,
        gravity: f64,
    ) -> Self {
        Self {
            height,
            period,
            depth,
            gravity,
            wavelength,
        }
    }

    /// Wave amplitude H/2
    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.height / 2.0
    }

    /// Wave number, celerity and group velocity
    pub fn properties(&self) -> WaveProperties {
        WaveProperties::new(self.period, self.depth, self.wavelength)
    }

    /// Kinematics at a point in (or above) the water column
    ///
    /// # Arguments
    /// * `elevation` - Elevation z relative to still-water level, positive up
    /// * `phase` - Phase angle θ = kx − ωt (radians)
    /// * `limit` - Upper truncation limit
    ///
    /// # Returns
    /// All five components, exactly zero below the seabed or above `limit`
    pub fn kinematics_at(&self, elevation: f64, phase: f64, limit: SurfaceLimit) -> Kinematics {
        let z = elevation;
        let amplitude = self.amplitude();

        // Between still-water level and the crest: use surface attenuation
        let zc = if z > 0.0 && z <= amplitude { 0.0 } else { z };

        let k = TAU / self.wavelength;
        let (cosh_ratio, sinh_ratio) = attenuation(k * (zc + self.depth), k * self.depth);
        let (sin, cos) = phase.sin_cos();

        let velocity_scale = amplitude * self.gravity * self.period / self.wavelength;
        let acceleration_scale = self.gravity * PI * self.height / self.wavelength;

        let mut result = Kinematics {
            elevation: amplitude * cos,
            horizontal_velocity: velocity_scale * cosh_ratio * cos,
            vertical_velocity: velocity_scale * sinh_ratio * sin,
            horizontal_acceleration: acceleration_scale * cosh_ratio * sin,
            vertical_acceleration: acceleration_scale * sinh_ratio * cos,
        };

        if self.depth + z < 0.0 {
            result = Kinematics::ZERO;
        }

        // The instantaneous limit is the elevation just computed
        let upper = match limit {
            SurfaceLimit::CrestAmplitude => amplitude,
            SurfaceLimit::Instantaneous => result.elevation,
        };
        if z > upper {
            result = Kinematics::ZERO;
        }

        result
    }
}

/// (cosh(arg)/cosh(kd), sinh(arg)/cosh(kd)), stable for large kd
#[inline]
fn attenuation(arg: f64, kd: f64) -> (f64, f64) {
    if kd < COSH_OVERFLOW && arg.abs() < COSH_OVERFLOW {
        let denom = kd.cosh();
        return (arg.cosh() / denom, arg.sinh() / denom);
    }

    // cosh(a)/cosh(b) = e^(a-b) · (1 + e^(-2a)) / (1 + e^(-2b))
    let scale = (arg - kd).exp() / (1.0 + (-2.0 * kd).exp());
    let tail = (-2.0 * arg).exp();
    (scale * (1.0 + tail), scale * (1.0 - tail))
}

/// A single kinematics evaluation request
///
/// Defaults: elevation 0, wavelength solved, phase 0, gravity 9810,
/// crest-amplitude limit, full output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicsQuery {
    /// Wave height H
    pub height: f64,
    /// Wave period T
    pub period: f64,
    /// Still-water depth d
    pub depth: f64,
    /// Elevation of the point relative to still-water level (negative below)
    pub elevation: f64,
    /// Known wavelength; `None` solves the dispersion relation
    pub wavelength: Option<f64>,
    /// Phase angle in radians
    pub phase: f64,
    /// Upper truncation limit
    pub limit: SurfaceLimit,
    /// Component(s) to return
    pub output: OutputSelection,
    /// Gravity and dispersion solver settings
    pub config: WaveConfig,
}

impl KinematicsQuery {
    /// Query at still-water level, phase 0, with default settings
    pub fn new(height: f64, period: f64, depth: f64) -> Self {
        Self {
            height,
            period,
            depth,
            elevation: 0.0,
            wavelength: None,
            phase: 0.0,
            limit: SurfaceLimit::CrestAmplitude,
            output: OutputSelection::Full,
            config: WaveConfig::default(),
        }
    }

    /// Set the point elevation
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Supply a wavelength; 0 means "solve for it"
    pub fn with_wavelength(mut self, wavelength: f64) -> Self {
        self.wavelength = (wavelength != 0.0).then_some(wavelength);
        self
    }

    /// Set the phase angle (radians)
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Set the gravitational acceleration
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.config.gravity = gravity;
        self
    }

    /// Set the upper truncation limit
    pub fn with_limit(mut self, limit: impl Into<SurfaceLimit>) -> Self {
        self.limit = limit.into();
        self
    }

    /// Select the returned component(s)
    pub fn with_output(mut self, output: impl Into<OutputSelection>) -> Self {
        self.output = output.into();
        self
    }

    /// Replace gravity and solver settings
    pub fn with_config(mut self, config: WaveConfig) -> Self {
        self.config = config;
        self
    }

    /// Gravity used by this query
    pub fn gravity(&self) -> f64 {
        self.config.gravity
    }
}

/// Evaluate linear wave kinematics for a query
///
/// Solves for the wavelength when none is given, evaluates the closed-form
/// solution, applies seabed and surface truncation and returns the selected
/// component(s). Fails only if the dispersion solver diverges.
///
/// # Example
///
/// ```rust
/// use math_ocean_wave::{KinematicsQuery, evaluate};
///
/// let query = KinematicsQuery::new(2000.0, 10.0, 15000.0).with_output("el");
/// let elevation = evaluate(&query).unwrap().scalar().unwrap();
/// assert!((elevation - 1000.0).abs() < 1e-9);
/// ```
pub fn evaluate(query: &KinematicsQuery) -> Result<KinematicsOutput> {
    let wave = AiryWave::resolve(
        query.height,
        query.period,
        query.depth,
        query.wavelength,
        &query.config,
    )?;

    Ok(wave
        .kinematics_at(query.elevation, query.phase, query.limit)
        .component(query.output))
}
