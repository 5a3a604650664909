//! Shared utilities for CLI commands

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use ct_store::JsonFileStore;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Intentionally empty: ExitCode is a control-flow mechanism, not a
        // user-facing error.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Open the snapshot store named by the global `--data` flag.
pub(crate) fn open_store(global: &GlobalArgs) -> Result<JsonFileStore> {
    if global.verbose {
        eprintln!("[verbose] Loading snapshot from {}", global.data);
    }

    JsonFileStore::open(Path::new(&global.data))
        .with_context(|| format!("Failed to open snapshot '{}'", global.data))
}

/// The tester's local calendar date.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate> {
    value
        .parse::<NaiveDate>()
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", value))
}

/// Parse "YYYY-MM-DD HH:MM" or a bare date (midnight).
pub(crate) fn parse_datetime(value: &str) -> Result<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M") {
        return Ok(datetime);
    }
    parse_date(value).map(|date| date.and_time(NaiveTime::MIN))
}

/// Render a due/tested timestamp for table output; midnight values show the
/// date alone.
pub(crate) fn display_datetime(value: NaiveDateTime) -> String {
    if value.time() == NaiveTime::MIN {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M").to_string()
    }
}

pub(crate) fn display_time(value: Option<NaiveTime>) -> String {
    value
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Compute per-column display widths from headers and rows.
pub(crate) fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }
    widths
}

/// Print a formatted table to stdout.
///
/// Calculates column widths from `headers` and `rows`, then prints
/// a left-aligned header row, a separator line of dashes, and each
/// data row. Columns are separated by two spaces.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = calculate_column_widths(headers, rows);

    let header_parts: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<width$}", h, width = w))
        .collect();
    println!("{}", header_parts.join("  "));

    let sep_parts: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep_parts.join("  "));

    for row in rows {
        let row_parts: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect();
        println!("{}", row_parts.join("  "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime_accepts_bare_date_as_midnight() {
        let parsed = parse_datetime("2025-09-16").unwrap();
        assert_eq!(parsed.time(), NaiveTime::MIN);
        assert_eq!(parsed.date(), parse_date("2025-09-16").unwrap());
    }

    #[test]
    fn test_parse_datetime_accepts_minutes() {
        let parsed = parse_datetime("2025-09-16 14:05").unwrap();
        assert_eq!(display_datetime(parsed), "2025-09-16 14:05");
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert!(parse_datetime("sometime soon").is_err());
    }

    #[test]
    fn test_column_widths_cover_widest_cell() {
        let widths = calculate_column_widths(
            &["A", "LONGHEADER"],
            &[vec!["wide-cell-value".to_string(), "x".to_string()]],
        );
        assert_eq!(widths, vec![15, 10]);
    }
}
