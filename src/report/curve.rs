//! Fitted curve sampling on a logarithmic concentration grid.

use serde::{Deserialize, Serialize};

use crate::model::{four_pl, FitParams};

/// Default number of samples for a plotted curve.
pub const DEFAULT_CURVE_POINTS: usize = 200;

/// Fitted curve point for plotting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Sample the fitted curve at `n_points` concentrations evenly spaced in
/// log10 space from `x_min` to `x_max`, both ends included.
///
/// The bounds must be finite and strictly positive; otherwise no points are
/// produced.
pub fn generate_curve_points(
    params: &FitParams,
    x_min: f64,
    x_max: f64,
    n_points: usize,
) -> Vec<CurvePoint> {
    let valid = |x: f64| x.is_finite() && x > 0.0;
    if !valid(x_min) || !valid(x_max) {
        log::warn!(
            "Curve bounds must be positive and finite (got {} to {}); no curve sampled",
            x_min,
            x_max
        );
        return Vec::new();
    }

    let log_min = x_min.log10();
    let log_max = x_max.log10();
    let step = if n_points > 1 {
        (log_max - log_min) / (n_points - 1) as f64
    } else {
        0.0
    };

    (0..n_points)
        .map(|i| {
            let x = if i == 0 {
                x_min
            } else if i == n_points - 1 {
                x_max
            } else {
                10f64.powf(log_min + step * i as f64)
            };
            CurvePoint {
                x,
                y: four_pl(x, params),
            }
        })
        .collect()
}

/// Plot range covering all concentrations, widened by `padding` on each side
/// in log space (`min / padding` to `max * padding`).
///
/// Returns `None` when there are no concentrations.
pub fn curve_range(concentrations: &[f64], padding: f64) -> Option<(f64, f64)> {
    let min = concentrations.iter().copied().reduce(f64::min)?;
    let max = concentrations.iter().copied().reduce(f64::max)?;
    Some((min / padding, max * padding))
}
