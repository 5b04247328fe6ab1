//! CSV report of suggested corrections.
//!
//! Three named columns, one row per input query in input order. A query with
//! no acceptable match gets the placeholder name and a blank score cell.

use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::matching::MatchResult;

/// Corrected-name cell used when no candidate cleared the threshold
pub const NO_MATCH_PLACEHOLDER: &str = "No good match found";

/// Column headers of the report
pub const REPORT_HEADER: [&str; 3] = ["original_name", "corrected_name", "score"];

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to create report file: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the report rows to `writer`.
///
/// # Errors
///
/// Returns `ReportError::Csv` if a record cannot be written.
pub fn write_report<W: Write>(writer: W, results: &[MatchResult]) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(REPORT_HEADER)?;

    for result in results {
        let corrected = result.corrected.as_deref().unwrap_or(NO_MATCH_PLACEHOLDER);
        let score = result.score.map(|s| s.to_string()).unwrap_or_default();
        csv_writer.write_record([result.query.as_str(), corrected, &score])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the report to a file at `path`.
///
/// # Errors
///
/// Returns `ReportError` if the file cannot be created or written.
pub fn write_report_file(path: &Path, results: &[MatchResult]) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_report(file, results)
}
