//! Least-squares problem definition.
//!
//! The `Problem` trait is the seam between the Levenberg-Marquardt driver and
//! the dose-response data it fits. Only the 4PL problem implements it.

use ndarray::{Array1, Array2};

use crate::model::{self, FitParams, Param};

/// A nonlinear least squares problem.
pub(crate) trait Problem {
    /// Number of free parameters.
    fn parameter_count(&self) -> usize;

    /// Number of residuals (observations).
    fn residual_count(&self) -> usize;

    /// Residuals `observed - predicted` at `params`.
    fn eval(&self, params: &Array1<f64>) -> Array1<f64>;

    /// Jacobian of the *model prediction* with respect to the parameters.
    ///
    /// Because the residuals are `observed - predicted`, the Gauss-Newton step
    /// solves `(JᵀJ) Δ = Jᵀr` and is added to the parameters.
    fn jacobian(&self, params: &Array1<f64>) -> Array2<f64>;

    /// Project a candidate parameter vector back into the feasible region.
    fn constrain(&self, _params: &mut Array1<f64>) {}
}

pub(crate) fn sum_of_squares(residuals: &Array1<f64>) -> f64 {
    residuals.iter().map(|r| r.powi(2)).sum()
}

/// Dose-response observations to be fitted with the 4PL model.
pub(crate) struct DoseResponseProblem<'a> {
    concentrations: &'a [f64],
    responses: &'a [f64],
    ic50_floor: f64,
}

impl<'a> DoseResponseProblem<'a> {
    /// Both slices must have the same length; the fitter validates this first.
    pub(crate) fn new(concentrations: &'a [f64], responses: &'a [f64], ic50_floor: f64) -> Self {
        debug_assert_eq!(concentrations.len(), responses.len());
        Self {
            concentrations,
            responses,
            ic50_floor,
        }
    }
}

impl Problem for DoseResponseProblem<'_> {
    fn parameter_count(&self) -> usize {
        Param::COUNT
    }

    fn residual_count(&self) -> usize {
        self.responses.len()
    }

    fn eval(&self, params: &Array1<f64>) -> Array1<f64> {
        let p = FitParams::from_array(params);
        self.concentrations
            .iter()
            .zip(self.responses)
            .map(|(&x, &y)| y - model::four_pl(x, &p))
            .collect()
    }

    fn jacobian(&self, params: &Array1<f64>) -> Array2<f64> {
        model::jacobian(self.concentrations, &FitParams::from_array(params))
    }

    fn constrain(&self, params: &mut Array1<f64>) {
        let ic50 = &mut params[Param::Ic50.index()];
        *ic50 = ic50.max(self.ic50_floor);
    }
}
