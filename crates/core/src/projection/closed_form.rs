//! Exact straight-line projection.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::depreciation::DepreciationResult;
use crate::error::DepreciationError;

/// Book value `year_offset` years after acquisition.
///
/// `max(0, adjusted - annual * year_offset)`. Fractional offsets are allowed;
/// for a whole offset the value equals the matching schedule entry exactly.
///
/// # Errors
///
/// Returns `InvalidInput` for a negative offset and `Overflow` if the
/// product leaves the decimal range.
pub fn value_at_offset(
    result: &DepreciationResult,
    year_offset: Decimal,
) -> Result<Decimal, DepreciationError> {
    if year_offset < Decimal::ZERO {
        return Err(DepreciationError::InvalidInput(format!(
            "year offset cannot be negative, got {year_offset}"
        )));
    }

    let depreciated = result
        .annual_depreciation
        .checked_mul(year_offset)
        .ok_or(DepreciationError::Overflow("projected depreciation"))?;

    Ok((result.adjusted_purchase_value - depreciated).max(Decimal::ZERO))
}

/// Book value on a calendar date, using the result's year basis.
///
/// # Errors
///
/// Returns `InvalidInput` if `date` precedes the acquisition date.
pub fn value_at_date(
    result: &DepreciationResult,
    date: NaiveDate,
) -> Result<Decimal, DepreciationError> {
    value_at_offset(result, year_offset(result, date)?)
}

/// Fractional years from acquisition to `date`: `days / 365` or
/// `4 * days / 1461`.
///
/// # Errors
///
/// Returns `InvalidInput` if `date` precedes the acquisition date.
pub fn year_offset(
    result: &DepreciationResult,
    date: NaiveDate,
) -> Result<Decimal, DepreciationError> {
    let days = (date - result.acquisition_date).num_days();
    if days < 0 {
        return Err(DepreciationError::InvalidInput(format!(
            "projection date {date} precedes acquisition on {}",
            result.acquisition_date
        )));
    }

    let (days_per_year, scale) = result.year_basis.days_per_year_ratio();
    Decimal::from(days)
        .checked_mul(Decimal::from(scale))
        .and_then(|scaled| scaled.checked_div(Decimal::from(days_per_year)))
        .ok_or(DepreciationError::Overflow("year offset"))
}
