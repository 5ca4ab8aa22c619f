//! Goodness-of-fit statistics and residual diagnostics.

use serde::{Deserialize, Serialize};

use crate::fit::{total_sum_of_squares, FitResult};

/// One residual paired with its concentration, for residual plots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualPoint {
    pub x: f64,
    pub residual: f64,
}

/// Goodness-of-fit metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodnessOfFit {
    pub r_squared: f64,
    pub ss_res: f64,
    /// Total sum of squares about the response mean
    pub ss_tot: f64,
    pub residuals: Vec<f64>,
    pub residual_points: Vec<ResidualPoint>,
}

/// Compute goodness-of-fit statistics for a finished fit.
///
/// `ss_tot` is recomputed from `responses`; R², SSres and the residuals are
/// taken from `result` as they are.
pub fn compute_goodness_of_fit(
    concentrations: &[f64],
    responses: &[f64],
    result: &FitResult,
) -> GoodnessOfFit {
    let residual_points = concentrations
        .iter()
        .zip(&result.residuals)
        .map(|(&x, &residual)| ResidualPoint { x, residual })
        .collect();

    GoodnessOfFit {
        r_squared: result.r_squared,
        ss_res: result.ss_res,
        ss_tot: total_sum_of_squares(responses),
        residuals: result.residuals.clone(),
        residual_points,
    }
}
