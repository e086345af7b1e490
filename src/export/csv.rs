//! Flat CSV export of the header fields.
//!
//! Mirrors exactly the header keys present in the record, independent
//! of the day-slot projection: one row of labels, one row of values.

use crate::errors::{AppError, AppResult};
use crate::models::month::MonthHeader;
use std::path::Path;

/// Label/value pairs for every non-empty header field, in form order,
/// with the payout answer appended last when present.
fn flat_pairs(header: &MonthHeader) -> Vec<(&'static str, String)> {
    let mut pairs: Vec<(&'static str, String)> = header
        .fields()
        .into_iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(f, v)| (f.label(), v.trim().to_string()))
        .collect();

    let payout = header.mehrarbeit_auszahlen.trim();
    if !payout.is_empty() {
        pairs.push(("Mehrarbeit_auszahlen", payout.to_string()));
    }

    pairs
}

/// Serialize the flat export into bytes (used by the delivery surface).
pub fn flat_csv_bytes(header: &MonthHeader) -> AppResult<Vec<u8>> {
    let pairs = flat_pairs(header);

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(pairs.iter().map(|(label, _)| *label))
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    wtr.write_record(pairs.iter().map(|(_, value)| value.as_str()))
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}

/// Write the flat export to a file.
pub fn write_flat_csv(path: &Path, header: &MonthHeader) -> AppResult<()> {
    let bytes = flat_csv_bytes(header)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
