//! CSV adapter for the UFV series published by the Banco Central de Bolivia.
//!
//! Expected columns: `fecha` and `ufv`. Dates are accepted as `YYYY-MM-DD`,
//! `YYYY/MM/DD` or `DD/MM/YYYY`, optionally followed by a time. Values may use
//! a comma as decimal separator.

use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use deprecia_core::index::{IndexPoint, IndexSeries};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::{DataError, RowError};
use crate::normalize::{csv_reader, find_column, normalized_headers, read_text};

const DATE_COLUMNS: &[&str] = &["fecha", "date"];
const VALUE_COLUMNS: &[&str] = &["ufv", "valor", "value"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"];

/// A loaded series plus the rows that were skipped.
#[derive(Debug, Clone)]
pub struct UfvLoad {
    /// Points in file order.
    pub series: IndexSeries,
    /// Skipped rows.
    pub row_errors: Vec<RowError>,
    /// Data rows read, excluding the header.
    pub rows_read: usize,
}

/// Loads the UFV series from a CSV file.
pub fn load_ufv_series(path: &Path) -> Result<UfvLoad, DataError> {
    let text = read_text(path)?;
    let load = parse_ufv_series(&text)?;
    info!(
        path = %path.display(),
        points = load.series.len(),
        first = ?load.series.first_date(),
        last = ?load.series.last_date(),
        rows_skipped = load.row_errors.len(),
        "UFV series loaded"
    );
    Ok(load)
}

/// Parses UFV CSV text.
pub fn parse_ufv_series(text: &str) -> Result<UfvLoad, DataError> {
    let mut reader = csv_reader(text);
    let headers = normalized_headers(reader.headers()?);

    let date_idx = find_column(&headers, DATE_COLUMNS).ok_or_else(|| DataError::MissingColumn {
        column: "fecha",
        found: headers.join(", "),
    })?;
    let value_idx =
        find_column(&headers, VALUE_COLUMNS).ok_or_else(|| DataError::MissingColumn {
            column: "ufv",
            found: headers.join(", "),
        })?;

    let mut points = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(record) => record,
            Err(err) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {err}"),
                });
                continue;
            }
        };

        let raw_date = record.get(date_idx).unwrap_or_default();
        let raw_value = record.get(value_idx).unwrap_or_default();

        match parse_row(raw_date, raw_value) {
            Ok(point) => points.push(point),
            Err(message) => {
                debug!(line, %message, "Skipping UFV row");
                row_errors.push(RowError { line, message });
            }
        }
    }

    if points.is_empty() {
        return Err(DataError::Empty("UFV series"));
    }

    Ok(UfvLoad {
        series: IndexSeries::new(points),
        row_errors,
        rows_read,
    })
}

fn parse_row(raw_date: &str, raw_value: &str) -> Result<IndexPoint, String> {
    let date = parse_date(raw_date).ok_or_else(|| format!("invalid date '{raw_date}'"))?;
    let value = parse_value(raw_value).ok_or_else(|| format!("invalid UFV value '{raw_value}'"))?;
    IndexPoint::new(date, value).map_err(|err| err.to_string())
}

/// Parses a date in one of the accepted formats, ignoring a trailing time.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let day = raw
        .trim()
        .split(|c: char| c == ' ' || c == 'T')
        .next()
        .unwrap_or_default();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(day, format).ok())
}

/// Parses `2.47001` or `2,47001`; a comma is a thousands separator only when
/// a dot is also present.
fn parse_value(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    let normalized = if raw.contains('.') {
        raw.replace(',', "")
    } else {
        raw.replace(',', ".")
    };
    Decimal::from_str(&normalized).ok()
}
