//! Implementation of the Levenberg-Marquardt algorithm.
//!
//! A damped Gauss-Newton loop: a step that lowers the sum of squared
//! residuals is accepted and the damping relaxed, a step that does not is
//! discarded and the damping tightened. The loop stops when an accepted step
//! improves the cost by less than the configured relative tolerance, or when
//! the iteration budget is spent.

use ndarray::Array1;
use std::fmt;

use crate::problem::{sum_of_squares, Problem};

use super::config::LmConfig;
use super::step::LmStep;

/// Result of the Levenberg-Marquardt optimization.
#[derive(Debug, Clone)]
pub(crate) struct LmResult {
    /// Best parameter values found
    pub params: Array1<f64>,

    /// Residuals at `params`
    pub residuals: Array1<f64>,

    /// Sum of squared residuals at `params`
    pub cost: f64,

    /// Number of iterations performed
    pub iterations: usize,

    /// Whether the relative improvement criterion was met
    pub converged: bool,
}

impl fmt::Display for LmResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Optimization Result:")?;
        writeln!(f, "  Converged: {}", self.converged)?;
        writeln!(f, "  Cost: {:.6e}", self.cost)?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Parameters: {:?}", self.params)?;
        Ok(())
    }
}

/// The Levenberg-Marquardt optimizer.
#[derive(Debug, Clone)]
pub(crate) struct LevenbergMarquardt {
    /// Configuration options
    config: LmConfig,
}

impl LevenbergMarquardt {
    /// Create a new Levenberg-Marquardt optimizer with the given configuration.
    pub(crate) fn with_config(config: LmConfig) -> Self {
        Self { config }
    }

    /// Minimize the sum of squared residuals for the given problem.
    ///
    /// Non-convergence is not an error: the best parameters found are
    /// returned with `converged == false`.
    pub(crate) fn minimize<P: Problem>(&self, problem: &P, initial_params: Array1<f64>) -> LmResult {
        debug_assert_eq!(initial_params.len(), problem.parameter_count());

        let mut params = initial_params;
        let mut lambda = self.config.initial_lambda;
        let mut residuals = problem.eval(&params);
        let mut cost = sum_of_squares(&residuals);
        let mut converged = false;
        let mut iterations = 0;

        log::debug!(
            "LM start: {} parameters, {} residuals, cost = {:.6e}",
            problem.parameter_count(),
            problem.residual_count(),
            cost
        );

        while iterations < self.config.max_iterations {
            iterations += 1;

            let jacobian = problem.jacobian(&params);
            let step = LmStep::calculate_step(
                &jacobian,
                &residuals,
                lambda,
                self.config.diagonal_epsilon,
            );

            let mut candidate = &params + &step;
            problem.constrain(&mut candidate);
            let candidate_residuals = problem.eval(&candidate);
            let candidate_cost = sum_of_squares(&candidate_residuals);

            log::trace!(
                "LM iteration {}: lambda = {:.3e}, cost = {:.6e}, candidate = {:.6e}",
                iterations,
                lambda,
                cost,
                candidate_cost
            );

            if candidate_cost < cost {
                let improvement = (cost - candidate_cost) / (cost + self.config.improvement_epsilon);
                params = candidate;
                residuals = candidate_residuals;
                cost = candidate_cost;
                lambda *= self.config.lambda_down_factor;

                if improvement < self.config.tolerance {
                    converged = true;
                    break;
                }
            } else {
                lambda *= self.config.lambda_up_factor;
            }
        }

        if converged {
            log::debug!(
                "LM converged after {} iterations (cost = {:.6e})",
                iterations,
                cost
            );
        } else {
            log::warn!(
                "LM stopped after {} iterations without meeting tolerance {:.1e} (cost = {:.6e})",
                iterations,
                self.config.tolerance,
                cost
            );
        }

        LmResult {
            params,
            residuals,
            cost,
            iterations,
            converged,
        }
    }
}
