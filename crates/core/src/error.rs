//! Calculation error types.

use deprecia_shared::AppError;
use thiserror::Error;

/// Errors raised by the depreciation engine and its lookups.
///
/// Every variant is scoped to a single computation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepreciationError {
    /// Useful life must be a positive number of years.
    #[error("Useful life must be positive, got {0}")]
    InvalidUsefulLife(i64),

    /// Asset type is not present in the catalog.
    #[error("Unknown asset type: {0}")]
    UnknownAssetType(String),

    /// Index lookup against a series with no points.
    #[error("Index series is empty")]
    EmptySeries,

    /// Input violates a precondition (negative value, bad offset, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A decimal operation exceeded the representable range.
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

impl From<DepreciationError> for AppError {
    fn from(err: DepreciationError) -> Self {
        match err {
            DepreciationError::UnknownAssetType(_) => Self::NotFound(err.to_string()),
            DepreciationError::InvalidUsefulLife(_) | DepreciationError::InvalidInput(_) => {
                Self::Validation(err.to_string())
            }
            DepreciationError::EmptySeries => Self::DataSource(err.to_string()),
            DepreciationError::Overflow(_) => Self::BusinessRule(err.to_string()),
        }
    }
}
