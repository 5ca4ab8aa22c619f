//! # Covariance Matrix Calculations
//!
//! The parameter covariance of a nonlinear least-squares fit is estimated as
//!
//!   covar = s² · inv(JᵀJ)
//!
//! where J is the model Jacobian at the fitted parameters and
//! s² = SSres / dof is the residual variance.

use ndarray::{Array1, Array2};

use crate::utils::linalg;

/// Information matrix JᵀJ.
pub fn information_matrix(jacobian: &Array2<f64>) -> Array2<f64> {
    jacobian.t().dot(jacobian)
}

/// Covariance matrix `residual_variance · inv(JᵀJ)`.
///
/// Returns `None` when the information matrix is singular.
pub fn covariance_matrix(jacobian: &Array2<f64>, residual_variance: f64) -> Option<Array2<f64>> {
    let inverse = linalg::invert(&information_matrix(jacobian))?;
    Some(inverse * residual_variance)
}

/// Calculate correlation matrix from covariance matrix.
///
/// The correlation matrix is calculated as:
///   correl[i,j] = covar[i,j] / sqrt(covar[i,i] * covar[j,j])
///
/// Entries involving a parameter with zero variance are reported as 0.
pub fn correlation_matrix(covar: &Array2<f64>) -> Array2<f64> {
    let n = covar.nrows();
    let mut correl = Array2::zeros((n, n));

    for i in 0..n {
        for j in 0..n {
            if i == j {
                correl[[i, j]] = 1.0;
            } else {
                let denom = (covar[[i, i]] * covar[[j, j]]).sqrt();
                if denom > 0.0 {
                    correl[[i, j]] = covar[[i, j]] / denom;
                }
            }
        }
    }

    correl
}

/// Extract standard errors from the covariance matrix.
///
/// Diagonal entries are clamped at zero before the square root, since
/// cancellation can leave tiny negative variances.
pub fn standard_errors(covar: &Array2<f64>) -> Array1<f64> {
    covar.diag().mapv(|v| v.max(0.0).sqrt())
}
