//! # End-to-end analysis
//!
//! Runs the whole pipeline on raw assay text:
//!
//! 1. parse and group replicates ([`parse_data_with_report`])
//! 2. reduce replicates to mean and SEM ([`summarize`])
//! 3. fit the 4PL model to the per-concentration means ([`fit_4pl_with_config`])
//! 4. estimate confidence intervals and goodness of fit
//! 5. assemble the flat results record and sample the fitted curve
//!
//! [`analyze_batch`] runs independent analyses in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::{parse_data_with_report, summarize, DataPoint, DataSummary};
use crate::error::Result;
use crate::fit::{fit_4pl_with_config, FitResult};
use crate::goodness::{compute_goodness_of_fit, GoodnessOfFit};
use crate::lm::LmConfig;
use crate::report::{
    build_results, curve_range, export_results_csv, generate_curve_points, AnalysisResults,
    CurvePoint, DEFAULT_CURVE_POINTS,
};
use crate::uncertainty::{compute_ci_with_alpha, ConfidenceIntervals, DEFAULT_ALPHA};

/// Settings for a full analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Fitter settings
    pub lm: LmConfig,
    /// Significance level of the confidence intervals. Default: 0.05
    pub alpha: f64,
    /// Number of sampled curve points. Default: 200
    pub curve_points: usize,
    /// The curve spans `min(x) / padding` to `max(x) * padding`. Default: 3.0
    pub curve_padding: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            lm: LmConfig::default(),
            alpha: DEFAULT_ALPHA,
            curve_points: DEFAULT_CURVE_POINTS,
            curve_padding: 3.0,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_lm(mut self, lm: LmConfig) -> Self {
        self.lm = lm;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_curve_points(mut self, curve_points: usize) -> Self {
        self.curve_points = curve_points;
        self
    }

    pub fn with_curve_padding(mut self, padding: f64) -> Self {
        self.curve_padding = padding;
        self
    }
}

/// Everything produced by one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Grouped replicates as parsed
    pub points: Vec<DataPoint>,
    /// Per-concentration mean and SEM; the fit input
    pub summary: Vec<DataSummary>,
    pub fit: FitResult,
    pub confidence: ConfidenceIntervals,
    pub goodness: GoodnessOfFit,
    pub results: AnalysisResults,
    /// Fitted curve over the padded concentration range
    pub curve: Vec<CurvePoint>,
    /// Data rows the parser dropped
    pub rows_skipped: usize,
}

impl Analysis {
    /// CSV export of the results, summary and curve.
    pub fn to_csv(&self) -> String {
        export_results_csv(&self.results, &self.summary, &self.curve)
    }
}

/// Analyze raw assay text with the default configuration.
///
/// # Errors
///
/// Fails on the parser errors ([`EmptyInput`](crate::DoseCurveError::EmptyInput),
/// [`NoValidData`](crate::DoseCurveError::NoValidData)) and when fewer than four
/// distinct concentrations remain
/// ([`InsufficientData`](crate::DoseCurveError::InsufficientData)).
pub fn analyze(text: &str) -> Result<Analysis> {
    analyze_with_config(text, &AnalysisConfig::default())
}

/// Analyze raw assay text.
pub fn analyze_with_config(text: &str, config: &AnalysisConfig) -> Result<Analysis> {
    let parsed = parse_data_with_report(text)?;
    let summary = summarize(&parsed.points);

    let concentrations: Vec<f64> = summary.iter().map(|d| d.concentration).collect();
    let means: Vec<f64> = summary.iter().map(|d| d.mean).collect();

    let fit = fit_4pl_with_config(&concentrations, &means, &config.lm)?;
    let confidence = compute_ci_with_alpha(&concentrations, &fit.params, fit.ss_res, config.alpha);
    let goodness = compute_goodness_of_fit(&concentrations, &means, &fit);
    let results = build_results(&fit, &confidence);

    let curve = match curve_range(&concentrations, config.curve_padding) {
        Some((x_min, x_max)) => generate_curve_points(&fit.params, x_min, x_max, config.curve_points),
        None => Vec::new(),
    };

    Ok(Analysis {
        points: parsed.points,
        summary,
        fit,
        confidence,
        goodness,
        results,
        curve,
        rows_skipped: parsed.rows_skipped,
    })
}

/// Analyze several independent datasets in parallel.
///
/// Returns one result per input, in input order.
pub fn analyze_batch<S>(texts: &[S], config: &AnalysisConfig) -> Vec<Result<Analysis>>
where
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| analyze_with_config(text.as_ref(), config))
        .collect()
}
