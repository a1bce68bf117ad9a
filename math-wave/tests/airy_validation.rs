//! Validation of Airy wave kinematics against linear wave theory
//!
//! These tests check the dispersion solver against its defining relation and
//! the kinematics evaluator against the truncation rules and symmetries of
//! the closed-form solution.

use approx::assert_relative_eq;
use math_ocean_wave::{
    AiryWave, DispersionConfig, Kinematics, KinematicsOutput, KinematicsQuery, OutputSelection,
    SurfaceLimit, WaveConfig, WaveError, deep_water_wavelength, dispersion_residual, evaluate,
    solve_wavelength,
};
use std::f64::consts::PI;

const G_MM: f64 = 9810.0;

fn full(query: &KinematicsQuery) -> Kinematics {
    match evaluate(query).expect("dispersion solver should converge") {
        KinematicsOutput::Full(k) => k,
        KinematicsOutput::Scalar(v) => panic!("expected full output, got scalar {}", v),
    }
}

fn scalar(query: &KinematicsQuery) -> f64 {
    evaluate(query)
        .expect("dispersion solver should converge")
        .scalar()
        .expect("expected a single component")
}

#[test]
fn test_dispersion_relation_round_trip() {
    let cases = [
        (G_MM, [500.0, 1000.0, 15000.0, 50000.0, 1.0e6]),
        (9.81, [0.5, 1.0, 15.0, 50.0, 1000.0]),
    ];

    for (gravity, depths) in cases {
        for period in [2.0, 5.0, 10.0, 15.0] {
            for depth in depths {
                let l = solve_wavelength(period, depth, gravity).unwrap();
                let residual = dispersion_residual(l, period, depth, gravity);

                assert!(l.is_finite() && l > 0.0, "T={} d={}: L={}", period, depth, l);
                assert!(
                    residual.abs() < 1e-8 * l,
                    "T={} d={} g={}: residual {:.3e}",
                    period,
                    depth,
                    gravity,
                    residual
                );
            }
        }
    }
}

#[test]
fn test_deep_water_limit() {
    let l0 = deep_water_wavelength(10.0, G_MM);
    let gaps: Vec<f64> = [1.0e3, 1.0e4, 1.0e5, 1.0e6]
        .iter()
        .map(|&d| (solve_wavelength(10.0, d, G_MM).unwrap() - l0).abs() / l0)
        .collect();

    assert!(gaps.windows(2).all(|w| w[1] < w[0] || w[1] == 0.0));
    assert!(gaps[3] < 1e-12);
}

#[test]
fn test_seabed_zeroing() {
    for elevation in [-15000.5, -16000.0, -1.0e6] {
        for phase in [0.0, 0.6, 2.0, -3.0] {
            for limit in [SurfaceLimit::CrestAmplitude, SurfaceLimit::Instantaneous] {
                let query = KinematicsQuery::new(2000.0, 10.0, 15000.0)
                    .with_elevation(elevation)
                    .with_phase(phase)
                    .with_limit(limit);
                assert_eq!(full(&query).as_tuple(), (0.0, 0.0, 0.0, 0.0, 0.0));
            }
        }
    }
}

#[test]
fn test_surface_zeroing_untruncated() {
    for elevation in [1000.001, 1500.0, 1.0e5] {
        for phase in [0.0, 1.0, PI] {
            let query = KinematicsQuery::new(2000.0, 10.0, 15000.0)
                .with_elevation(elevation)
                .with_phase(phase)
                .with_limit(SurfaceLimit::from_flag("false"));
            assert!(full(&query).is_zero(), "z={} phase={}", elevation, phase);
        }
    }
}

#[test]
fn test_output_selection() {
    let base = KinematicsQuery::new(2000.0, 10.0, 15000.0)
        .with_elevation(-4000.0)
        .with_phase(0.35);
    let (el, vx, vz, ax, az) = full(&base.with_output("full")).as_tuple();

    assert_eq!(scalar(&base.with_output("vx")), vx);
    assert_eq!(scalar(&base.with_output("EL")), el);
    assert_eq!(scalar(&base.with_output("vz")), vz);
    assert_eq!(scalar(&base.with_output("Ax")), ax);
    assert_eq!(scalar(&base.with_output(OutputSelection::VerticalAcceleration)), az);
    assert!(evaluate(&base.with_output("acceleration")).unwrap().full().is_some());
}

#[test]
fn test_crest_clamp_consistency() {
    let phase = 0.8;
    let base = KinematicsQuery::new(2000.0, 10.0, 15000.0).with_phase(phase);
    let at_swl = full(&base);

    for elevation in [1.0, 400.0, 1000.0] {
        let k = full(&base.with_elevation(elevation));
        assert_relative_eq!(k.elevation, 1000.0 * phase.cos());
        assert_eq!(k.horizontal_velocity, at_swl.horizontal_velocity);
        assert_eq!(k.vertical_velocity, at_swl.vertical_velocity);
        assert_eq!(k.horizontal_acceleration, at_swl.horizontal_acceleration);
        assert_eq!(k.vertical_acceleration, at_swl.vertical_acceleration);
    }
}

#[test]
fn test_concrete_scenario() {
    let query = KinematicsQuery::new(2000.0, 10.0, 15000.0)
        .with_elevation(0.0)
        .with_phase(0.0)
        .with_gravity(G_MM);
    let l = solve_wavelength(10.0, 15000.0, G_MM).unwrap();
    let k = full(&query);

    assert!(l > 100_000.0 && l < 120_000.0, "L = {}", l);
    assert_relative_eq!(k.elevation, 1000.0);
    assert!(k.horizontal_velocity > 0.0);
    assert_relative_eq!(k.vertical_velocity, 0.0);
    assert!(k.vertical_acceleration > 0.0);
}

#[test]
fn test_phase_symmetry() {
    let base = KinematicsQuery::new(2000.0, 10.0, 15000.0).with_elevation(-2500.0);

    for p in [0.3, 1.0, 2.5] {
        let plus = full(&base.with_phase(p));
        let minus = full(&base.with_phase(-p));

        assert_relative_eq!(plus.elevation, minus.elevation);
        assert_relative_eq!(plus.horizontal_velocity, minus.horizontal_velocity);
        assert_relative_eq!(plus.vertical_velocity, -minus.vertical_velocity);
        assert_relative_eq!(plus.horizontal_acceleration, -minus.horizontal_acceleration);
        assert_relative_eq!(plus.vertical_acceleration, minus.vertical_acceleration);
    }
}

#[test]
fn test_supplied_wavelength_used_as_is() {
    let l = 80_000.0;
    let query = KinematicsQuery::new(2000.0, 10.0, 15000.0)
        .with_wavelength(l)
        .with_output("vx");
    let k = 2.0 * PI / l;
    let expected = 1000.0 * G_MM * 10.0 / l * (k * 15000.0).cosh() / (k * 15000.0).cosh();

    assert_relative_eq!(scalar(&query), expected, max_relative = 1e-12);
}

#[test]
fn test_divergence_propagates_from_evaluate() {
    let config = WaveConfig {
        dispersion: DispersionConfig {
            max_iterations: 1,
            ..DispersionConfig::default()
        },
        ..WaveConfig::default()
    };
    let query = KinematicsQuery::new(2000.0, 10.0, 15000.0).with_config(config);

    match evaluate(&query) {
        Err(WaveError::NumericalDivergence { period, depth, .. }) => {
            assert_eq!(period, 10.0);
            assert_eq!(depth, 15000.0);
        }
        other => panic!("expected divergence, got {:?}", other),
    }

    // A supplied wavelength never touches the solver
    assert!(evaluate(&query.with_wavelength(100_000.0)).is_ok());
}

#[test]
fn test_resolved_wave_matches_evaluate() {
    let wave = AiryWave::resolve(1500.0, 8.0, 20000.0, None, &WaveConfig::default()).unwrap();
    let query = KinematicsQuery::new(1500.0, 8.0, 20000.0)
        .with_elevation(-7000.0)
        .with_phase(1.9);

    assert_eq!(
        wave.kinematics_at(-7000.0, 1.9, SurfaceLimit::CrestAmplitude),
        full(&query)
    );
}

#[test]
fn test_concurrent_evaluation() {
    let reference = full(&KinematicsQuery::new(2000.0, 10.0, 15000.0).with_elevation(-1000.0));

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| full(&KinematicsQuery::new(2000.0, 10.0, 15000.0).with_elevation(-1000.0)))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    });
}
