//! Delimited concentration/response text parsing.
//!
//! Accepted layouts:
//! - two columns, one replicate per row (rows sharing a concentration are merged)
//! - one concentration column followed by any number of replicate columns
//!
//! Fields are separated by tabs or commas. Junk is skipped rather than
//! rejected: non-numeric replicate fields are ignored, and rows whose
//! concentration is missing, non-numeric or not strictly positive are dropped
//! with all their replicates.

use std::collections::BTreeMap;

use nom::{combinator::all_consuming, number::complete::double, IResult, Parser};
use serde::{Deserialize, Serialize};

use crate::error::{DoseCurveError, Result};

/// One concentration with its replicate responses, in encounter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Concentration (strictly positive)
    pub concentration: f64,
    /// Replicate responses measured at this concentration (never empty
    /// when produced by the parser)
    pub responses: Vec<f64>,
}

/// Parser output with row-level diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedData {
    /// Grouped points, ascending by concentration
    pub points: Vec<DataPoint>,
    /// Number of non-blank data rows examined (header excluded)
    pub rows_read: usize,
    /// Data rows that contributed no replicate
    pub rows_skipped: usize,
    /// Whether the first row was treated as a header
    pub header_skipped: bool,
}

/// Parse tab/comma-separated concentration-response text.
///
/// Returns the grouped points in ascending concentration order.
///
/// # Errors
///
/// * [`DoseCurveError::EmptyInput`] if the text has no non-blank line
/// * [`DoseCurveError::NoValidData`] if no row yields a replicate
pub fn parse_data(text: &str) -> Result<Vec<DataPoint>> {
    parse_data_with_report(text).map(|parsed| parsed.points)
}

/// Parse like [`parse_data`], additionally reporting how many rows were skipped.
pub fn parse_data_with_report(text: &str) -> Result<ParsedData> {
    let lines: Vec<&str> = text
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let first = match lines.first() {
        Some(first) => *first,
        None => return Err(DoseCurveError::EmptyInput),
    };

    let header_skipped = split_fields(first)
        .next()
        .map_or(true, |cell| parse_number(cell).is_none());
    let data_rows = if header_skipped { &lines[1..] } else { &lines[..] };

    // Positive finite floats sort the same way as their bit patterns, so the
    // map both groups exact duplicates and keeps ascending order.
    let mut groups: BTreeMap<u64, Vec<f64>> = BTreeMap::new();
    let mut rows_skipped = 0;

    for row in data_rows {
        let cells: Vec<&str> = split_fields(row).collect();
        if cells.len() < 2 {
            rows_skipped += 1;
            continue;
        }

        let concentration = match parse_number(cells[0]) {
            Some(c) if c > 0.0 => c,
            _ => {
                rows_skipped += 1;
                continue;
            }
        };

        let replicates: Vec<f64> = cells[1..].iter().filter_map(|c| parse_number(c)).collect();
        if replicates.is_empty() {
            rows_skipped += 1;
            continue;
        }

        groups
            .entry(concentration.to_bits())
            .or_default()
            .extend(replicates);
    }

    if groups.is_empty() {
        return Err(DoseCurveError::NoValidData);
    }

    if rows_skipped > 0 {
        log::debug!(
            "Skipped {} of {} data rows without a usable concentration/response",
            rows_skipped,
            data_rows.len()
        );
    }

    let points = groups
        .into_iter()
        .map(|(bits, responses)| DataPoint {
            concentration: f64::from_bits(bits),
            responses,
        })
        .collect();

    Ok(ParsedData {
        points,
        rows_read: data_rows.len(),
        rows_skipped,
        header_skipped,
    })
}

fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(['\t', ',']).map(str::trim)
}

/// Parse a whole field as a finite number.
fn parse_number(field: &str) -> Option<f64> {
    match numeric_field(field) {
        Ok((_, value)) if value.is_finite() => Some(value),
        _ => None,
    }
}

fn numeric_field(input: &str) -> IResult<&str, f64> {
    all_consuming(double).parse(input)
}
