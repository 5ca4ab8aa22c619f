//! Output assembly for rendering and export collaborators.
//!
//! Densely sampled curve points for plotting, the flat results record shown
//! to users, and the three-section CSV export.

mod csv;
mod curve;
mod results;

pub use self::csv::export_results_csv;
pub use curve::{curve_range, generate_curve_points, CurvePoint, DEFAULT_CURVE_POINTS};
pub use results::{build_results, AnalysisResults, CiBounds};
