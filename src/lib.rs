//! # dosecurve-rs
//!
//! `dosecurve-rs` fits the four-parameter logistic (4PL) dose-response model
//! to concentration/response assay data and reports the fitted parameters
//! with confidence intervals and goodness-of-fit statistics.
//!
//! The library provides:
//! - A lenient parser for tab/comma-delimited replicate data
//! - Replicate summaries (mean and standard error)
//! - A Levenberg-Marquardt fitter with an analytic 4PL Jacobian
//! - Covariance-based Student-t confidence intervals
//! - R², residual diagnostics, curve sampling and CSV export
//!
//! ## Basic Usage
//!
//! ```
//! use dosecurve_rs::analyze;
//!
//! let text = "Concentration\tResponse\n\
//!             0.1\t99.0\n1\t91.0\n3\t77.0\n10\t50.0\n30\t24.0\n100\t9.0\n1000\t1.0";
//! let analysis = analyze(text).unwrap();
//!
//! assert!(analysis.results.ic50 > 5.0 && analysis.results.ic50 < 20.0);
//! println!("{}", analysis.results);
//! ```
//!
//! The individual stages are available on their own:
//!
//! ```
//! use dosecurve_rs::{compute_ci, fit_4pl, four_pl, FitParams};
//!
//! let truth = FitParams::new(100.0, 0.0, 10.0, 1.0);
//! let x = [0.1, 0.3, 1.0, 3.0, 10.0, 30.0, 100.0, 300.0, 1000.0];
//! let y: Vec<f64> = x.iter().map(|&xi| four_pl(xi, &truth)).collect();
//!
//! let fit = fit_4pl(&x, &y).unwrap();
//! let ci = compute_ci(&x, &fit.params, fit.ss_res);
//! assert!(fit.converged);
//! assert!(ci.ic50.lower <= fit.params.ic50);
//! ```

pub mod analysis;
pub mod data;
pub mod error;
pub mod fit;
pub mod goodness;
pub mod lm;
pub mod model;
pub mod report;
pub mod uncertainty;
pub mod utils;

pub(crate) mod problem;

// Re-exports for convenience
pub use analysis::{analyze, analyze_batch, analyze_with_config, Analysis, AnalysisConfig};
pub use data::{parse_data, parse_data_with_report, summarize, DataPoint, DataSummary, ParsedData};
pub use error::{DoseCurveError, Result};
pub use fit::{fit_4pl, fit_4pl_with_config, initial_guess, FitResult};
pub use goodness::{compute_goodness_of_fit, GoodnessOfFit, ResidualPoint};
pub use lm::LmConfig;
pub use model::{four_pl, jacobian, jacobian_row, FitParams, Param};
pub use report::{
    build_results, export_results_csv, generate_curve_points, AnalysisResults, CiBounds,
    CurvePoint,
};
pub use uncertainty::{compute_ci, compute_ci_with_alpha, CiStatus, ConfidenceIntervals, ParamCi};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
