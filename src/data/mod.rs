//! Assay data ingestion.
//!
//! Raw delimited text is parsed into concentration groups with their replicate
//! responses, then reduced to one mean/SEM summary per concentration. The
//! summaries are what the fitter consumes.

mod parser;
mod summary;

pub use parser::{parse_data, parse_data_with_report, DataPoint, ParsedData};
pub use summary::{summarize, DataSummary};
