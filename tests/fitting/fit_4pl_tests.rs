//! Tests for 4PL fitting with the Levenberg-Marquardt driver
//!
//! This file contains tests for:
//! - Recovery of known parameters from noise-free data
//! - Recovery under seeded noise, for both curve directions
//! - Input validation errors
//! - Behaviour when the iteration budget is too small

use approx::assert_abs_diff_eq;
use dosecurve_rs::{fit_4pl, fit_4pl_with_config, DoseCurveError, FitParams, LmConfig};

use crate::test_helpers::{
    generate_noisy_responses, generate_responses, reference_params, CONCENTRATIONS,
};

#[test]
fn test_noise_free_round_trip() {
    let y = generate_responses(&CONCENTRATIONS, &reference_params());
    let result = fit_4pl(&CONCENTRATIONS, &y).unwrap();

    assert!(result.converged);
    assert!(result.iterations <= 200);
    assert_abs_diff_eq!(result.params.ic50, 10.0, epsilon = 0.1);
    assert_abs_diff_eq!(result.params.hill_slope, 1.0, epsilon = 0.01);
    assert_abs_diff_eq!(result.r_squared, 1.0, epsilon = 1e-5);
    assert_eq!(result.residuals.len(), CONCENTRATIONS.len());
}

#[test]
fn test_seeded_noise_recovery() {
    for seed in [1, 7, 42] {
        let y = generate_noisy_responses(&CONCENTRATIONS, &reference_params(), 1.0, seed);
        let result = fit_4pl(&CONCENTRATIONS, &y).unwrap();

        assert!(result.r_squared > 0.99, "seed {}: R² = {}", seed, result.r_squared);
        assert_abs_diff_eq!(result.params.ic50, 10.0, epsilon = 2.0);
        assert_abs_diff_eq!(result.params.hill_slope, 1.0, epsilon = 0.2);
        assert_abs_diff_eq!(result.params.top, 100.0, epsilon = 3.0);
        assert_abs_diff_eq!(result.params.bottom, 0.0, epsilon = 3.0);
    }
}

#[test]
fn test_increasing_curve() {
    let truth = FitParams::new(100.0, 0.0, 10.0, -1.0);
    let y = generate_noisy_responses(&CONCENTRATIONS, &truth, 0.5, 3);
    let result = fit_4pl(&CONCENTRATIONS, &y).unwrap();

    assert!(result.params.hill_slope < 0.0);
    assert_abs_diff_eq!(result.params.ic50, 10.0, epsilon = 2.0);
    assert!(result.r_squared > 0.99);
}

#[test]
fn test_residuals_and_ss_res_agree() {
    let y = generate_noisy_responses(&CONCENTRATIONS, &reference_params(), 2.0, 11);
    let result = fit_4pl(&CONCENTRATIONS, &y).unwrap();

    let ss: f64 = result.residuals.iter().map(|r| r * r).sum();
    assert_abs_diff_eq!(ss, result.ss_res, epsilon = 1e-9);
    assert!(result.params.ic50 > 0.0);
}

#[test]
fn test_validation_errors() {
    let err = fit_4pl(&[1.0, 10.0, 100.0], &[90.0, 50.0, 10.0]).unwrap_err();
    assert!(matches!(err, DoseCurveError::InsufficientData { found: 3 }));
    assert!(err.to_string().contains("at least 4"));

    let err = fit_4pl(&[1.0, 10.0, 100.0, 1000.0], &[90.0, 50.0, 10.0]).unwrap_err();
    assert!(matches!(
        err,
        DoseCurveError::LengthMismatch {
            concentrations: 4,
            responses: 3
        }
    ));
    assert!(err.to_string().contains("same length"));
}

#[test]
fn test_exhausted_budget_is_not_an_error() {
    let y = generate_noisy_responses(&CONCENTRATIONS, &reference_params(), 1.0, 5);
    let config = LmConfig::default()
        .with_max_iterations(2)
        .with_tolerance(0.0);
    let result = fit_4pl_with_config(&CONCENTRATIONS, &y, &config).unwrap();

    assert!(!result.converged);
    assert_eq!(result.iterations, 2);
    assert!(result.ss_res.is_finite());
}
