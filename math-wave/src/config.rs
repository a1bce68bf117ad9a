//! JSON configuration for wave computations
//!
//! Gravity and the dispersion solver settings travel with each computation
//! instead of living in module-wide constants.

use math_ocean_solvers::{RootConfig, RootMethod};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Standard gravity in mm/s², the unit system of the defaults below
pub const DEFAULT_GRAVITY: f64 = 9810.0;

/// Initial wavelength guess for the dispersion solver (same units as depth)
pub const DEFAULT_INITIAL_WAVELENGTH: f64 = 10000.0;

/// Complete wave computation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Gravitational acceleration, in units consistent with height, depth and period
    pub gravity: f64,
    /// Dispersion solver settings
    pub dispersion: DispersionConfig,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            dispersion: DispersionConfig::default(),
        }
    }
}

impl WaveConfig {
    /// Configuration with a custom gravity and default solver settings
    pub fn with_gravity(gravity: f64) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse JSON: {}", e))
    }

    /// Load configuration from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_json_str(&contents)
    }

    /// Save configuration to JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }
}

/// Dispersion (wavelength) solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispersionConfig {
    /// Root-finding method
    pub method: RootMethod,
    /// Starting wavelength for the iteration
    pub initial_guess: f64,
    /// Absolute tolerance on the wavelength step
    pub tolerance: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Log progress every N iterations (0 = no output)
    pub print_interval: usize,
}

impl Default for DispersionConfig {
    fn default() -> Self {
        let root = RootConfig::<f64>::default();
        Self {
            method: RootMethod::Newton,
            initial_guess: DEFAULT_INITIAL_WAVELENGTH,
            tolerance: root.tolerance,
            max_iterations: root.max_iterations,
            print_interval: root.print_interval,
        }
    }
}

impl DispersionConfig {
    /// Stopping criteria handed to the root finder
    pub fn root_config(&self) -> RootConfig<f64> {
        RootConfig {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            relative_tolerance: 0.0,
            print_interval: self.print_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WaveConfig::default();
        assert_eq!(config.gravity, 9810.0);
        assert_eq!(config.dispersion.method, RootMethod::Newton);
        assert_eq!(config.dispersion.initial_guess, 10000.0);
        assert_eq!(config.dispersion.max_iterations, 50);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            WaveConfig::from_json_str(r#"{ "gravity": 9.81, "dispersion": { "method": "secant" } }"#)
                .unwrap();

        assert_eq!(config.gravity, 9.81);
        assert_eq!(config.dispersion.method, RootMethod::Secant);
        assert_eq!(config.dispersion.initial_guess, DEFAULT_INITIAL_WAVELENGTH);
    }

    #[test]
    fn test_invalid_json() {
        let err = WaveConfig::from_json_str("{ gravity: }").unwrap_err();
        assert!(err.starts_with("Failed to parse JSON"));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "math_ocean_wave_config_{}.json",
            std::process::id()
        ));
        let config = WaveConfig::with_gravity(32.174);

        config.to_file(&path).unwrap();
        let loaded = WaveConfig::from_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_root_config() {
        let dispersion = DispersionConfig {
            tolerance: 1e-6,
            max_iterations: 7,
            ..DispersionConfig::default()
        };
        let root = dispersion.root_config();
        assert_eq!(root.max_iterations, 7);
        assert_eq!(root.tolerance, 1e-6);
    }
}
