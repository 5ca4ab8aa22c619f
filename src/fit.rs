//! Four-parameter logistic fitting.
//!
//! [`fit_4pl`] estimates [`FitParams`] from concentration/response pairs by
//! Levenberg-Marquardt least squares, starting from a data-driven initial
//! guess.
//!
//! Inputs are expected in ascending concentration order (the parser's
//! output order): the initial Hill slope sign compares the first and last
//! responses by position.

use serde::{Deserialize, Serialize};

use crate::error::{DoseCurveError, Result};
use crate::lm::{LevenbergMarquardt, LmConfig};
use crate::model::{FitParams, Param};
use crate::problem::DoseResponseProblem;

/// Result of a 4PL fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub params: FitParams,
    /// `response - model(concentration)`, one per input point
    pub residuals: Vec<f64>,
    /// Sum of squared residuals
    pub ss_res: f64,
    /// Coefficient of determination; 0 when all responses are identical
    pub r_squared: f64,
    /// Number of iterations performed
    pub iterations: usize,
    /// Whether the relative improvement tolerance was reached
    pub converged: bool,
}

/// Fit the 4PL model with the default configuration
/// (200 iterations, tolerance 1e-8).
///
/// # Errors
///
/// * [`DoseCurveError::LengthMismatch`] if the slices differ in length
/// * [`DoseCurveError::InsufficientData`] if fewer than 4 points are given
pub fn fit_4pl(concentrations: &[f64], responses: &[f64]) -> Result<FitResult> {
    fit_4pl_with_config(concentrations, responses, &LmConfig::default())
}

/// Fit the 4PL model with an explicit configuration.
pub fn fit_4pl_with_config(
    concentrations: &[f64],
    responses: &[f64],
    config: &LmConfig,
) -> Result<FitResult> {
    if concentrations.len() != responses.len() {
        return Err(DoseCurveError::LengthMismatch {
            concentrations: concentrations.len(),
            responses: responses.len(),
        });
    }
    if concentrations.len() < Param::COUNT {
        return Err(DoseCurveError::InsufficientData {
            found: concentrations.len(),
        });
    }
    if concentrations.windows(2).any(|w| w[1] < w[0]) {
        log::warn!("Concentrations are not in ascending order; the initial Hill slope sign may be wrong");
    }

    let guess = initial_guess(concentrations, responses);
    log::debug!("Initial 4PL guess: {:?}", guess);

    let problem = DoseResponseProblem::new(concentrations, responses, config.ic50_floor);
    let result = LevenbergMarquardt::with_config(config.clone()).minimize(&problem, guess.to_array());
    log::debug!("{}", result);

    let ss_tot = total_sum_of_squares(responses);
    let r_squared = if ss_tot > 0.0 {
        1.0 - result.cost / ss_tot
    } else {
        0.0
    };

    Ok(FitResult {
        params: FitParams::from_array(&result.params),
        residuals: result.residuals.to_vec(),
        ss_res: result.cost,
        r_squared,
        iterations: result.iterations,
        converged: result.converged,
    })
}

/// Data-driven starting point for the fit.
///
/// * `top` / `bottom`: largest / smallest response
/// * `ic50`: concentration whose response is closest to the midpoint of the two
/// * `hill_slope`: `+1` if the first response exceeds the last, else `-1`
///
/// `concentrations` and `responses` must be non-empty and of equal length.
pub fn initial_guess(concentrations: &[f64], responses: &[f64]) -> FitParams {
    let top = responses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let bottom = responses.iter().copied().fold(f64::INFINITY, f64::min);
    let mid = (top + bottom) / 2.0;

    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &y) in responses.iter().enumerate() {
        let dist = (y - mid).abs();
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }

    let decreasing = match (responses.first(), responses.last()) {
        (Some(first), Some(last)) => first > last,
        _ => false,
    };

    FitParams {
        top,
        bottom,
        ic50: concentrations[best_idx],
        hill_slope: if decreasing { 1.0 } else { -1.0 },
    }
}

/// Total sum of squares about the response mean.
pub(crate) fn total_sum_of_squares(responses: &[f64]) -> f64 {
    if responses.is_empty() {
        return 0.0;
    }
    let mean = responses.iter().sum::<f64>() / responses.len() as f64;
    responses.iter().map(|y| (y - mean).powi(2)).sum()
}
