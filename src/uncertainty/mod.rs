//! # Uncertainty Calculation
//!
//! Parameter uncertainty for a fitted 4PL curve:
//!
//! - Covariance matrix estimation from the Jacobian at the solution
//! - Standard errors and parameter correlations
//! - Student-t confidence intervals for each parameter

mod confidence;
mod covariance;
mod t_table;

pub use confidence::{
    compute_ci, compute_ci_with_alpha, CiStatus, ConfidenceIntervals, ParamCi, DEFAULT_ALPHA,
};

pub use covariance::{correlation_matrix, covariance_matrix, information_matrix, standard_errors};

pub use t_table::{t_critical, NORMAL_Z_975};
