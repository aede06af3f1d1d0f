//! Depreciation engine.
//!
//! Straight-line schedule per DS 24051. When re-expression is enabled the
//! purchase value is first scaled by the ratio of the UFV at the evaluation
//! date to the UFV at the acquisition date, and every figure derives from the
//! adjusted value.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::period::elapsed_years;
use super::types::{AssetRecord, DepreciationOptions, DepreciationResult, SeriesPoint};
use crate::catalog::AssetCatalog;
use crate::error::DepreciationError;
use crate::index::IndexSeries;

/// Engine for straight-line depreciation.
pub struct DepreciationEngine;

impl DepreciationEngine {
    /// Computes the depreciation state of one asset at `evaluation_date`.
    ///
    /// Re-expression runs only when `options.apply_reexpression` is set and a
    /// series is supplied. `evaluation_date` may precede `acquisition_date`;
    /// elapsed years then clamp to zero.
    ///
    /// # Errors
    ///
    /// - `InvalidUsefulLife` if `useful_life_years <= 0`
    /// - `InvalidInput` if `purchase_value` is negative
    /// - `EmptySeries` if re-expression is requested against an empty series
    /// - `Overflow` if an intermediate value exceeds the decimal range
    pub fn compute(
        purchase_value: Decimal,
        useful_life_years: i64,
        acquisition_date: NaiveDate,
        evaluation_date: NaiveDate,
        index: Option<&IndexSeries>,
        options: DepreciationOptions,
    ) -> Result<DepreciationResult, DepreciationError> {
        let life = u32::try_from(useful_life_years)
            .ok()
            .filter(|&years| years > 0)
            .ok_or(DepreciationError::InvalidUsefulLife(useful_life_years))?;

        if purchase_value < Decimal::ZERO {
            return Err(DepreciationError::InvalidInput(format!(
                "purchase value cannot be negative, got {purchase_value}"
            )));
        }

        let raw_years = elapsed_years(acquisition_date, evaluation_date, options.year_basis);
        let elapsed = u32::try_from(raw_years.clamp(0, i64::from(life))).unwrap_or(life);

        let (index_at_acquisition, index_at_evaluation, adjustment_factor) =
            match (options.apply_reexpression, index) {
                (true, Some(series)) => {
                    let at_acquisition = series.nearest(acquisition_date)?;
                    let at_evaluation = series.nearest(evaluation_date)?;
                    let factor = at_evaluation
                        .checked_div(at_acquisition)
                        .ok_or(DepreciationError::Overflow("adjustment factor"))?;
                    (Some(at_acquisition), Some(at_evaluation), factor)
                }
                _ => (None, None, Decimal::ONE),
            };

        let adjusted_purchase_value = purchase_value
            .checked_mul(adjustment_factor)
            .ok_or(DepreciationError::Overflow("adjusted purchase value"))?;
        let annual_depreciation = adjusted_purchase_value
            .checked_div(Decimal::from(life))
            .ok_or(DepreciationError::Overflow("annual depreciation"))?;

        let series = (0..=life)
            .map(|offset| Self::point_at(adjusted_purchase_value, annual_depreciation, offset))
            .collect::<Result<Vec<_>, _>>()?;

        // The headline figures are the schedule entry for the elapsed years.
        let current = series[elapsed as usize];

        Ok(DepreciationResult {
            purchase_value,
            acquisition_date,
            evaluation_date,
            year_basis: options.year_basis,
            useful_life_years: life,
            elapsed_years: elapsed,
            index_at_acquisition,
            index_at_evaluation,
            adjustment_factor,
            adjusted_purchase_value,
            annual_depreciation,
            accumulated_depreciation: current.accumulated_depreciation,
            book_value: current.book_value,
            series,
        })
    }

    /// Looks up the useful life of `record` in `catalog`, then computes.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAssetType` if the catalog has no such asset, otherwise
    /// the errors of [`DepreciationEngine::compute`].
    pub fn compute_for_record<C: AssetCatalog + ?Sized>(
        catalog: &C,
        record: &AssetRecord,
        evaluation_date: NaiveDate,
        index: Option<&IndexSeries>,
        options: DepreciationOptions,
    ) -> Result<DepreciationResult, DepreciationError> {
        let life = catalog.useful_life(&record.asset_type_name)?;
        Self::compute(
            record.purchase_value,
            i64::from(life),
            record.acquisition_date,
            evaluation_date,
            index,
            options,
        )
    }

    /// Schedule entry after `offset` whole years.
    fn point_at(
        adjusted: Decimal,
        annual: Decimal,
        offset: u32,
    ) -> Result<SeriesPoint, DepreciationError> {
        let depreciated = annual
            .checked_mul(Decimal::from(offset))
            .ok_or(DepreciationError::Overflow("accumulated depreciation"))?;

        Ok(SeriesPoint {
            year_offset: offset,
            book_value: (adjusted - depreciated).max(Decimal::ZERO),
            accumulated_depreciation: depreciated.min(adjusted),
        })
    }
}
