//! Configuration options for the Levenberg-Marquardt fitter.

use serde::{Deserialize, Serialize};

/// Configuration options for the Levenberg-Marquardt algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LmConfig {
    /// Maximum number of iterations. Default: 200
    pub max_iterations: usize,

    /// Relative SSres improvement below which an accepted step counts as
    /// converged. Default: 1e-8
    pub tolerance: f64,

    /// Initial value for the damping parameter. Default: 0.01
    pub initial_lambda: f64,

    /// Factor by which to increase lambda after a rejected step. Default: 5.0
    pub lambda_up_factor: f64,

    /// Factor by which to decrease lambda after an accepted step. Default: 0.5
    pub lambda_down_factor: f64,

    /// Added to each diagonal entry of JᵀJ before damping so that zero
    /// columns are still damped. Default: 1e-10
    pub diagonal_epsilon: f64,

    /// Added to the previous SSres when computing relative improvement.
    /// Default: 1e-15
    pub improvement_epsilon: f64,

    /// Lower bound applied to IC50 after every update. Default: 1e-20
    pub ic50_floor: f64,
}

impl Default for LmConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-8,
            initial_lambda: 0.01,
            lambda_up_factor: 5.0,
            lambda_down_factor: 0.5,
            diagonal_epsilon: 1e-10,
            improvement_epsilon: 1e-15,
            ic50_floor: 1e-20,
        }
    }
}

impl LmConfig {
    /// Set the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the relative improvement tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the initial value for the damping parameter.
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.initial_lambda = lambda;
        self
    }

    /// Set the factor by which to increase lambda.
    pub fn with_lambda_up_factor(mut self, factor: f64) -> Self {
        self.lambda_up_factor = factor;
        self
    }

    /// Set the factor by which to decrease lambda.
    pub fn with_lambda_down_factor(mut self, factor: f64) -> Self {
        self.lambda_down_factor = factor;
        self
    }

    /// Set the IC50 floor.
    pub fn with_ic50_floor(mut self, floor: f64) -> Self {
        self.ic50_floor = floor;
        self
    }
}
