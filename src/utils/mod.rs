//! Numerical helpers shared by the fitter and the uncertainty estimator.

pub mod linalg;

pub use linalg::{invert, solve};
