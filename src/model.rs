//! The four-parameter logistic model and its analytic Jacobian.
//!
//! The model is
//!
//! $y = bottom + \frac{top - bottom}{1 + (x / ic50)^{hillSlope}}$
//!
//! Every parameter vector, Jacobian column and covariance row in this crate is
//! laid out in [`Param`] order.

use std::fmt;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Index of a 4PL parameter in parameter vectors and Jacobian columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Param {
    /// Upper asymptote
    Top = 0,
    /// Lower asymptote
    Bottom = 1,
    /// Inflection concentration
    Ic50 = 2,
    /// Steepness and direction of the transition
    HillSlope = 3,
}

impl Param {
    /// Number of free parameters in the model.
    pub const COUNT: usize = 4;

    /// All parameters in vector order.
    pub const ALL: [Param; Param::COUNT] = [Param::Top, Param::Bottom, Param::Ic50, Param::HillSlope];

    /// Position of this parameter in parameter vectors and Jacobian rows.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display label, as used in exported tables.
    pub const fn label(self) -> &'static str {
        match self {
            Param::Top => "Top",
            Param::Bottom => "Bottom",
            Param::Ic50 => "IC50",
            Param::HillSlope => "Hill Slope",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 4-parameter logistic model parameters.
///
/// `top` and `bottom` are not ordered; the direction of the curve comes from
/// the sign of `hill_slope`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitParams {
    pub top: f64,
    pub bottom: f64,
    /// Strictly positive during fitting
    pub ic50: f64,
    pub hill_slope: f64,
}

impl FitParams {
    pub fn new(top: f64, bottom: f64, ic50: f64, hill_slope: f64) -> Self {
        Self {
            top,
            bottom,
            ic50,
            hill_slope,
        }
    }

    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::Top => self.top,
            Param::Bottom => self.bottom,
            Param::Ic50 => self.ic50,
            Param::HillSlope => self.hill_slope,
        }
    }

    /// Pack into a vector in [`Param`] order.
    pub fn to_array(&self) -> Array1<f64> {
        Array1::from_iter(Param::ALL.iter().map(|&p| self.get(p)))
    }

    /// Unpack from a vector in [`Param`] order.
    ///
    /// # Panics
    ///
    /// Panics if `values` holds fewer than [`Param::COUNT`] entries.
    pub fn from_array(values: &Array1<f64>) -> Self {
        Self {
            top: values[Param::Top.index()],
            bottom: values[Param::Bottom.index()],
            ic50: values[Param::Ic50.index()],
            hill_slope: values[Param::HillSlope.index()],
        }
    }

    /// Response half-way between the asymptotes, reached at `x == ic50`.
    pub fn midpoint(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

/// Evaluate the 4PL model at concentration `x`.
pub fn four_pl(x: f64, p: &FitParams) -> f64 {
    p.bottom + (p.top - p.bottom) / (1.0 + (x / p.ic50).powf(p.hill_slope))
}

/// Partial derivatives of the model at `x`, indexed by [`Param::index`].
pub fn jacobian_row(x: f64, p: &FitParams) -> [f64; Param::COUNT] {
    let ratio = x / p.ic50;
    let powered = ratio.powf(p.hill_slope);
    let denom = 1.0 + powered;
    let denom2 = denom * denom;
    let range = p.top - p.bottom;
    let log_ratio = if ratio > 0.0 { ratio.ln() } else { 0.0 };

    let mut row = [0.0; Param::COUNT];
    row[Param::Top.index()] = 1.0 / denom;
    row[Param::Bottom.index()] = powered / denom;
    row[Param::Ic50.index()] = range * p.hill_slope * powered / (p.ic50 * denom2);
    row[Param::HillSlope.index()] = -range * powered * log_ratio / denom2;
    row
}

/// Jacobian matrix with one row per concentration.
pub fn jacobian(concentrations: &[f64], p: &FitParams) -> Array2<f64> {
    let mut jac = Array2::zeros((concentrations.len(), Param::COUNT));
    for (i, &x) in concentrations.iter().enumerate() {
        let row = jacobian_row(x, p);
        for (j, value) in row.iter().enumerate() {
            jac[[i, j]] = *value;
        }
    }
    jac
}
