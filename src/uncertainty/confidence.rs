//! # Confidence Interval Calculations
//!
//! Asymptotic confidence intervals for the four 4PL parameters, derived from
//! the covariance matrix at the fitted solution:
//!
//!   value ± t(dof, alpha) · sqrt(s² · inv(JᵀJ)[i][i])
//!
//! When the covariance cannot be estimated (no residual degrees of freedom or
//! a singular information matrix) every interval is `(-∞, +∞)` and the
//! result's [`CiStatus`] says why.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::covariance;
use super::t_table::t_critical;
use crate::model::{self, FitParams, Param};

/// Significance level for the default 95% intervals.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Confidence interval for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamCi {
    /// Fitted value
    pub value: f64,
    /// Lower bound, `-inf` if not estimable
    pub lower: f64,
    /// Upper bound, `+inf` if not estimable
    pub upper: f64,
    /// Standard error, `None` if not estimable
    pub std_error: Option<f64>,
}

impl ParamCi {
    fn unbounded(value: f64) -> Self {
        Self {
            value,
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
            std_error: None,
        }
    }

    /// Whether both bounds are finite.
    pub fn is_bounded(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Why the intervals are (or are not) available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CiStatus {
    /// Intervals were computed from the covariance matrix
    Estimated,
    /// Not more points than parameters
    InsufficientDof,
    /// JᵀJ could not be inverted
    SingularInformation,
}

/// Confidence intervals for all 4PL parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceIntervals {
    pub top: ParamCi,
    pub bottom: ParamCi,
    pub ic50: ParamCi,
    pub hill_slope: ParamCi,
    pub status: CiStatus,
    /// Residual degrees of freedom, `n - 4` (0 when negative)
    pub dof: usize,
    pub alpha: f64,
    /// Critical t used for the margins, when estimated
    pub t_critical: Option<f64>,
    /// Parameter covariance in [`Param`] order, when estimated
    pub covariance: Option<Array2<f64>>,
}

impl ConfidenceIntervals {
    fn unbounded(params: &FitParams, status: CiStatus, dof: usize, alpha: f64) -> Self {
        Self {
            top: ParamCi::unbounded(params.top),
            bottom: ParamCi::unbounded(params.bottom),
            ic50: ParamCi::unbounded(params.ic50),
            hill_slope: ParamCi::unbounded(params.hill_slope),
            status,
            dof,
            alpha,
            t_critical: None,
            covariance: None,
        }
    }

    pub fn get(&self, param: Param) -> &ParamCi {
        match param {
            Param::Top => &self.top,
            Param::Bottom => &self.bottom,
            Param::Ic50 => &self.ic50,
            Param::HillSlope => &self.hill_slope,
        }
    }

    pub fn is_estimated(&self) -> bool {
        self.status == CiStatus::Estimated
    }

    /// Parameter correlation matrix, when the covariance was estimated.
    pub fn correlation(&self) -> Option<Array2<f64>> {
        self.covariance.as_ref().map(covariance::correlation_matrix)
    }
}

/// Compute 95% confidence intervals for the fitted parameters.
pub fn compute_ci(concentrations: &[f64], params: &FitParams, ss_res: f64) -> ConfidenceIntervals {
    compute_ci_with_alpha(concentrations, params, ss_res, DEFAULT_ALPHA)
}

/// Compute confidence intervals at significance level `alpha`.
///
/// Only `alpha = 0.05` uses Student-t quantiles; any other level falls back
/// to the normal quantile 1.96.
pub fn compute_ci_with_alpha(
    concentrations: &[f64],
    params: &FitParams,
    ss_res: f64,
    alpha: f64,
) -> ConfidenceIntervals {
    let n = concentrations.len();
    if n <= Param::COUNT {
        log::debug!(
            "{} points leave no residual degrees of freedom; intervals are unbounded",
            n
        );
        return ConfidenceIntervals::unbounded(params, CiStatus::InsufficientDof, 0, alpha);
    }
    let dof = n - Param::COUNT;

    let jacobian = model::jacobian(concentrations, params);
    let s2 = ss_res / dof as f64;
    let covar = match covariance::covariance_matrix(&jacobian, s2) {
        Some(covar) => covar,
        None => {
            log::warn!("Information matrix is singular; confidence intervals unavailable");
            return ConfidenceIntervals::unbounded(
                params,
                CiStatus::SingularInformation,
                dof,
                alpha,
            );
        }
    };

    let t = t_critical(dof, alpha);
    let errors = covariance::standard_errors(&covar);
    let interval = |param: Param| {
        let value = params.get(param);
        let se = errors[param.index()];
        let margin = t * se;
        ParamCi {
            value,
            lower: value - margin,
            upper: value + margin,
            std_error: Some(se),
        }
    };

    ConfidenceIntervals {
        top: interval(Param::Top),
        bottom: interval(Param::Bottom),
        ic50: interval(Param::Ic50),
        hill_slope: interval(Param::HillSlope),
        status: CiStatus::Estimated,
        dof,
        alpha,
        t_critical: Some(t),
        covariance: Some(covar),
    }
}
