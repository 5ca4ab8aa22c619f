//! Step calculation for the Levenberg-Marquardt algorithm.
//!
//! The step blends Gauss-Newton and scaled gradient descent by damping the
//! normal equations with `lambda * diag(JᵀJ + ε)`.

use ndarray::{Array1, Array2};

use crate::utils::linalg;

/// Handles step calculation for the Levenberg-Marquardt algorithm.
pub(crate) struct LmStep;

impl LmStep {
    /// Solve `(JᵀJ + λ·diag(JᵀJ + ε)) Δ = Jᵀr` for the parameter update.
    ///
    /// # Arguments
    ///
    /// * `jacobian` - Model Jacobian at the current parameters
    /// * `residuals` - Residuals `observed - predicted` at the current parameters
    /// * `lambda` - The damping parameter
    /// * `diagonal_epsilon` - Regularizes zero diagonal entries
    pub(crate) fn calculate_step(
        jacobian: &Array2<f64>,
        residuals: &Array1<f64>,
        lambda: f64,
        diagonal_epsilon: f64,
    ) -> Array1<f64> {
        let j_t_j = jacobian.t().dot(jacobian);
        let j_t_r = jacobian.t().dot(residuals);

        let mut damped = j_t_j;
        for i in 0..damped.nrows() {
            let diag = damped[[i, i]];
            damped[[i, i]] = diag + lambda * (diag + diagonal_epsilon);
        }

        linalg::solve(&damped, &j_t_r)
    }
}
