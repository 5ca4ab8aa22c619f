//! The flat, display-oriented results record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fit::FitResult;
use crate::uncertainty::{ConfidenceIntervals, ParamCi};

/// Lower and upper bound of a confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CiBounds {
    pub lower: f64,
    pub upper: f64,
}

impl From<&ParamCi> for CiBounds {
    fn from(ci: &ParamCi) -> Self {
        Self {
            lower: ci.lower,
            upper: ci.upper,
        }
    }
}

/// Complete analysis results, flattened for display and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResults {
    pub ic50: f64,
    #[serde(rename = "ic50CI")]
    pub ic50_ci: CiBounds,
    pub hill_slope: f64,
    #[serde(rename = "hillSlopeCI")]
    pub hill_slope_ci: CiBounds,
    pub top: f64,
    pub bottom: f64,
    pub r_squared: f64,
    pub converged: bool,
}

impl AnalysisResults {
    /// Serialize to JSON. Infinite interval bounds become `null`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the flat results record from a fit and its confidence intervals.
pub fn build_results(fit: &FitResult, ci: &ConfidenceIntervals) -> AnalysisResults {
    AnalysisResults {
        ic50: fit.params.ic50,
        ic50_ci: CiBounds::from(&ci.ic50),
        hill_slope: fit.params.hill_slope,
        hill_slope_ci: CiBounds::from(&ci.hill_slope),
        top: fit.params.top,
        bottom: fit.params.bottom,
        r_squared: fit.r_squared,
        converged: fit.converged,
    }
}

/// Format a value for people: `—` if not finite, scientific notation for very
/// small or large magnitudes, fixed decimals otherwise.
fn display_value(n: f64, digits: usize) -> String {
    if !n.is_finite() {
        "—".to_string()
    } else if n.abs() < 0.01 || n.abs() >= 10000.0 {
        format!("{:.*e}", digits, n)
    } else {
        format!("{:.*}", digits, n)
    }
}

impl fmt::Display for AnalysisResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "IC50:       {} [{} – {}]",
            display_value(self.ic50, 4),
            display_value(self.ic50_ci.lower, 4),
            display_value(self.ic50_ci.upper, 4)
        )?;
        writeln!(
            f,
            "Hill Slope: {} [{} – {}]",
            display_value(self.hill_slope, 4),
            display_value(self.hill_slope_ci.lower, 4),
            display_value(self.hill_slope_ci.upper, 4)
        )?;
        writeln!(f, "Top:        {}", display_value(self.top, 4))?;
        writeln!(f, "Bottom:     {}", display_value(self.bottom, 4))?;
        writeln!(f, "R²:         {}", display_value(self.r_squared, 6))?;
        write!(
            f,
            "Converged:  {}",
            if self.converged { "Yes" } else { "No" }
        )
    }
}
