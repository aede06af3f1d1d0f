//! CSV adapter for the DS 24051 asset catalog.
//!
//! Expected columns (after header normalization): an asset name column
//! (`nombre_activo`) and a useful-life column (`vida_util`). Rows whose life
//! is not a positive whole number are skipped and reported.

use std::path::Path;
use std::str::FromStr;

use deprecia_core::catalog::{AssetType, InMemoryCatalog};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, info};

use crate::error::{DataError, RowError};
use crate::normalize::{csv_reader, find_column, normalized_headers, read_text};

const NAME_COLUMNS: &[&str] = &["nombre_activo", "activo", "nombre", "asset", "name"];
const LIFE_COLUMNS: &[&str] = &[
    "vida_util",
    "vida_util_anos",
    "anos_vida_util",
    "useful_life",
    "useful_life_years",
];

/// A loaded catalog plus the rows that were skipped.
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    /// Asset types, first occurrence wins on duplicates.
    pub catalog: InMemoryCatalog,
    /// Skipped rows.
    pub row_errors: Vec<RowError>,
    /// Data rows read, excluding the header.
    pub rows_read: usize,
}

/// Loads the catalog from a CSV file.
pub fn load_catalog(path: &Path) -> Result<CatalogLoad, DataError> {
    let text = read_text(path)?;
    let load = parse_catalog(&text)?;
    info!(
        path = %path.display(),
        asset_types = load.catalog.len(),
        rows_read = load.rows_read,
        rows_skipped = load.row_errors.len(),
        "Asset catalog loaded"
    );
    Ok(load)
}

/// Parses catalog CSV text.
pub fn parse_catalog(text: &str) -> Result<CatalogLoad, DataError> {
    let mut reader = csv_reader(text);
    let headers = normalized_headers(reader.headers()?);

    let name_idx = find_column(&headers, NAME_COLUMNS).ok_or_else(|| DataError::MissingColumn {
        column: "nombre_activo",
        found: headers.join(", "),
    })?;
    let life_idx = find_column(&headers, LIFE_COLUMNS).ok_or_else(|| DataError::MissingColumn {
        column: "vida_util",
        found: headers.join(", "),
    })?;

    let mut types = Vec::new();
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

        let name = record.get(name_idx).unwrap_or_default();
        let life = record.get(life_idx).unwrap_or_default();

        match parse_row(name, life) {
            Ok(asset_type) => types.push(asset_type),
            Err(message) => {
                debug!(line, %message, "Skipping catalog row");
                row_errors.push(RowError { line, message });
            }
        }
    }

    let catalog = InMemoryCatalog::new(types);
    if catalog.is_empty() {
        return Err(DataError::Empty("asset catalog"));
    }

    Ok(CatalogLoad {
        catalog,
        row_errors,
        rows_read,
    })
}

fn parse_row(name: &str, life: &str) -> Result<AssetType, String> {
    if name.is_empty() {
        return Err("empty asset name".to_string());
    }

    let years = parse_useful_life(life).ok_or_else(|| format!("invalid useful life '{life}'"))?;
    AssetType::new(name, years).map_err(|err| err.to_string())
}

/// Accepts `5` and `5.0`; rejects fractions, negatives and text.
fn parse_useful_life(raw: &str) -> Option<u32> {
    let value = Decimal::from_str(raw).ok()?;
    if !value.fract().is_zero() {
        return None;
    }
    value.to_u32()
}
