//! Least-squares trend over a depreciation schedule.
//!
//! The schedule is linear by construction, so the fitted line reproduces
//! [`value_at_offset`](super::value_at_offset) up to decimal rounding. It is
//! kept as an independent cross-check of the closed form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::depreciation::SeriesPoint;
use crate::error::DepreciationError;

const OVERFLOW: DepreciationError = DepreciationError::Overflow("trend fit");

/// Fitted line `book_value = intercept + slope * year_offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearTrend {
    /// Change in book value per year (negative for a depreciating asset).
    pub slope: Decimal,
    /// Book value at offset zero.
    pub intercept: Decimal,
}

impl LinearTrend {
    /// Ordinary least squares over `(year_offset, book_value)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` with fewer than two points or when every point
    /// shares the same offset, and `Overflow` if a running sum leaves the
    /// decimal range.
    pub fn fit(points: &[SeriesPoint]) -> Result<Self, DepreciationError> {
        if points.len() < 2 {
            return Err(DepreciationError::InvalidInput(format!(
                "trend fit needs at least 2 points, got {}",
                points.len()
            )));
        }

        let n = Decimal::from(points.len());
        let (sum_x, sum_y) = points
            .iter()
            .try_fold((Decimal::ZERO, Decimal::ZERO), |(sum_x, sum_y), p| {
                Some((
                    sum_x.checked_add(Decimal::from(p.year_offset))?,
                    sum_y.checked_add(p.book_value)?,
                ))
            })
            .ok_or(OVERFLOW)?;
        let mean_x = sum_x.checked_div(n).ok_or(OVERFLOW)?;
        let mean_y = sum_y.checked_div(n).ok_or(OVERFLOW)?;

        let (sxx, sxy) = points
            .iter()
            .try_fold((Decimal::ZERO, Decimal::ZERO), |(sxx, sxy), p| {
                let dx = Decimal::from(p.year_offset).checked_sub(mean_x)?;
                let dy = p.book_value.checked_sub(mean_y)?;
                Some((
                    sxx.checked_add(dx.checked_mul(dx)?)?,
                    sxy.checked_add(dx.checked_mul(dy)?)?,
                ))
            })
            .ok_or(OVERFLOW)?;

        if sxx.is_zero() {
            return Err(DepreciationError::InvalidInput(
                "trend fit needs at least 2 distinct offsets".to_string(),
            ));
        }

        let slope = sxy.checked_div(sxx).ok_or(OVERFLOW)?;
        let intercept = slope
            .checked_mul(mean_x)
            .and_then(|shift| mean_y.checked_sub(shift))
            .ok_or(OVERFLOW)?;
        Ok(Self { slope, intercept })
    }

    /// Predicted book value at `year_offset`.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the prediction leaves the decimal range.
    pub fn predict(&self, year_offset: Decimal) -> Result<Decimal, DepreciationError> {
        self.slope
            .checked_mul(year_offset)
            .and_then(|change| self.intercept.checked_add(change))
            .ok_or(OVERFLOW)
    }
}
