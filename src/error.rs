use thiserror::Error;

/// Error types for the dosecurve-rs library.
///
/// Only input validation fails loudly. Non-convergence, unestimable confidence
/// intervals and a degenerate R² are reported through the result types instead.
#[derive(Error, Debug)]
pub enum DoseCurveError {
    /// The input text contained no non-blank lines.
    #[error("No data provided")]
    EmptyInput,

    /// Rows were present but none produced a positive concentration with a
    /// numeric response.
    #[error("No valid data points found")]
    NoValidData,

    /// Concentration and response slices differ in length.
    #[error(
        "Concentration and response arrays must have same length (got {concentrations} and {responses})"
    )]
    LengthMismatch {
        concentrations: usize,
        responses: usize,
    },

    /// Fewer points than free parameters in the 4PL model.
    #[error("Need at least 4 data points for 4PL fit (got {found})")]
    InsufficientData { found: usize },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dosecurve-rs operations.
pub type Result<T> = std::result::Result<T, DoseCurveError>;
