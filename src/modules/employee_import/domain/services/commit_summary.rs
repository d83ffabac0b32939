use chrono::Utc;

use crate::modules::employee_import::domain::entities::{
    line_number, ImportResult, ParsedRow, RowError,
};

/// Aggregates a parsed set into the final import tally.
///
/// Rows are only read; every valid row counts as imported.
pub fn summarize(rows: &[ParsedRow]) -> ImportResult {
    let errors: Vec<RowError> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !row.valid)
        .map(|(index, row)| RowError {
            row: line_number(index),
            message: row.error.clone().unwrap_or_default(),
        })
        .collect();

    let failed = errors.len();

    ImportResult {
        success: rows.len() - failed,
        failed,
        errors,
        completed_at: Utc::now(),
    }
}
