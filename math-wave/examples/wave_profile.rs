//! Print Airy kinematics through the water column
//!
//! Solves the wavelength for a 2 m, 10 s wave in 15 m of water (mm/s units)
//! and tabulates velocity and acceleration from the seabed to the crest.
//!
//! Run with solver logging:
//!   RUST_LOG=debug cargo run -p math-ocean-wave --example wave_profile

use math_ocean_wave::{
    AiryWave, SurfaceLimit, WaveConfig, linspace, phase_series, vertical_profile, water_column,
};
use std::f64::consts::TAU;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let mut config = WaveConfig::default();
    config.dispersion.print_interval = 1;

    let wave = AiryWave::resolve(2000.0, 10.0, 15000.0, None, &config)?;
    let props = wave.properties();

    println!();
    println!(
        "=== Airy Wave: H = {} mm, T = {} s, d = {} mm ===",
        wave.height, wave.period, wave.depth
    );
    println!("Wavelength:      {:.1} mm", wave.wavelength);
    println!("Celerity:        {:.1} mm/s", props.celerity);
    println!("Group celerity:  {:.1} mm/s", props.group_celerity);
    println!("Depth regime:    {:?}", props.regime);
    println!();

    println!("{:>10} {:>10} {:>10} {:>10} {:>10}", "z [mm]", "u", "w", "ax", "az");
    let elevations = water_column(&wave, 17);
    for sample in vertical_profile(&wave, &elevations, 0.0, SurfaceLimit::CrestAmplitude) {
        let k = sample.kinematics;
        println!(
            "{:>10.1} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            sample.elevation,
            k.horizontal_velocity,
            k.vertical_velocity,
            k.horizontal_acceleration,
            k.vertical_acceleration
        );
    }

    println!();
    println!("Surface elevation over one period at z = 0 (instantaneous truncation):");
    let phases = linspace(0.0, TAU, 13);
    for sample in phase_series(&wave, 0.0, &phases, SurfaceLimit::Instantaneous) {
        println!(
            "  phase {:>5.2} rad: eta = {:>8.2} mm, u = {:>8.2} mm/s",
            sample.phase, sample.kinematics.elevation, sample.kinematics.horizontal_velocity
        );
    }

    Ok(())
}
