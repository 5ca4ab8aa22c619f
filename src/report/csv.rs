//! CSV export of results, summarized data and the fitted curve.

use super::{AnalysisResults, CurvePoint};
use crate::data::DataSummary;
use crate::model::Param;

/// Write an `f64` for CSV, spelling out non-finite values.
fn csv_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "Infinity".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        v.to_string()
    }
}

/// Export results as CSV text.
///
/// Three blank-line separated sections: parameter estimates with their
/// confidence bounds, the summarized data, and the sampled curve.
pub fn export_results_csv(
    results: &AnalysisResults,
    summary: &[DataSummary],
    curve: &[CurvePoint],
) -> String {
    let mut lines = Vec::with_capacity(summary.len() + curve.len() + 10);

    lines.push("Parameter,Value,Lower 95% CI,Upper 95% CI".to_string());
    lines.push(format!(
        "{},{},{},{}",
        Param::Ic50,
        csv_number(results.ic50),
        csv_number(results.ic50_ci.lower),
        csv_number(results.ic50_ci.upper)
    ));
    lines.push(format!(
        "{},{},{},{}",
        Param::HillSlope,
        csv_number(results.hill_slope),
        csv_number(results.hill_slope_ci.lower),
        csv_number(results.hill_slope_ci.upper)
    ));
    lines.push(format!("{},{},,", Param::Top, csv_number(results.top)));
    lines.push(format!("{},{},,", Param::Bottom, csv_number(results.bottom)));
    lines.push(format!("R²,{},,", csv_number(results.r_squared)));

    lines.push(String::new());
    lines.push("Concentration,Mean Response,SEM,N".to_string());
    lines.extend(summary.iter().map(|d| {
        format!(
            "{},{},{},{}",
            csv_number(d.concentration),
            csv_number(d.mean),
            csv_number(d.sem),
            d.n
        )
    }));

    lines.push(String::new());
    lines.push("Fitted X,Fitted Y".to_string());
    lines.extend(
        curve
            .iter()
            .map(|p| format!("{},{}", csv_number(p.x), csv_number(p.y))),
    );

    lines.join("\n")
}
