//! Linear (Airy) water wave kinematics
//!
//! This crate evaluates first-order wave theory at a point in the water
//! column: surface elevation, particle velocity and particle acceleration,
//! with the wavelength obtained from the transitional-water dispersion
//! relation.
//!
//! # Features
//!
//! - **Dispersion solver**: wavelength from period and depth by Newton (or secant) iteration
//! - **Kinematics**: η, u, w and both accelerations, with seabed and surface truncation
//! - **Wave properties**: wave number, celerity, group velocity, depth regime
//! - **Profiles**: batch evaluation over depth or phase, in parallel with `rayon`
//!
//! Units are whatever the caller uses consistently; the default gravity
//! (9810) implies millimetres and seconds.
//!
//! # Example
//!
//! ```rust
//! use math_ocean_wave::{KinematicsQuery, SurfaceLimit, evaluate};
//!
//! // 2 m, 10 s wave in 15 m of water, point 5 m below still-water level
//! let query = KinematicsQuery::new(2000.0, 10.0, 15000.0)
//!     .with_elevation(-5000.0)
//!     .with_phase(0.7)
//!     .with_limit(SurfaceLimit::Instantaneous);
//!
//! let k = evaluate(&query).unwrap().full().unwrap();
//! assert!(k.horizontal_velocity > 0.0);
//! ```

pub mod config;
pub mod dispersion;
pub mod error;
pub mod kinematics;
pub mod parallel;
pub mod profile;
pub mod properties;

// Re-export main types at crate root
pub use config::{DEFAULT_GRAVITY, DispersionConfig, WaveConfig};
pub use dispersion::{
    DepthRegime, DispersionSolution, deep_water_wavelength, dispersion_residual,
    shallow_water_wavelength, solve_wavelength, solve_wavelength_with,
};
pub use error::{Result, WaveError};
pub use kinematics::{
    AiryWave, Kinematics, KinematicsOutput, KinematicsQuery, OutputSelection, SurfaceLimit,
    evaluate,
};
pub use profile::{ProfileSample, linspace, phase_series, vertical_profile, water_column};
pub use properties::WaveProperties;

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
