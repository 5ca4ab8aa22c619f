//! Replicate reduction to mean and standard error.

use serde::{Deserialize, Serialize};

use super::DataPoint;

/// Summary statistics for one concentration level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    pub concentration: f64,
    /// Arithmetic mean of the replicates
    pub mean: f64,
    /// Standard error of the mean; exactly zero for a single replicate
    pub sem: f64,
    /// Replicate count
    pub n: usize,
}

/// Compute mean and SEM for each concentration, preserving input order.
///
/// The sample variance uses Bessel's correction. With a single replicate the
/// SEM is defined as 0 rather than left undefined.
pub fn summarize(points: &[DataPoint]) -> Vec<DataSummary> {
    points
        .iter()
        .map(|point| {
            let n = point.responses.len();
            let mean = point.responses.iter().sum::<f64>() / n as f64;
            let sem = if n > 1 {
                let variance = point
                    .responses
                    .iter()
                    .map(|v| (v - mean).powi(2))
                    .sum::<f64>()
                    / (n - 1) as f64;
                (variance / n as f64).sqrt()
            } else {
                0.0
            };

            DataSummary {
                concentration: point.concentration,
                mean,
                sem,
                n,
            }
        })
        .collect()
}
