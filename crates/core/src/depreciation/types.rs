//! Depreciation data types.

use chrono::NaiveDate;
use deprecia_shared::types::YearBasis;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fixed asset entered for valuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Catalog name of the asset type.
    pub asset_type_name: String,
    /// Historical purchase value in bolivianos.
    pub purchase_value: Decimal,
    /// Acquisition date.
    pub acquisition_date: NaiveDate,
}

impl AssetRecord {
    /// Creates an asset record.
    #[must_use]
    pub fn new(
        asset_type_name: impl Into<String>,
        purchase_value: Decimal,
        acquisition_date: NaiveDate,
    ) -> Self {
        Self {
            asset_type_name: asset_type_name.into(),
            purchase_value,
            acquisition_date,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationOptions {
    /// Day-count basis for elapsed years.
    pub year_basis: YearBasis,
    /// Re-express the purchase value with the index series when one is given.
    pub apply_reexpression: bool,
}

impl DepreciationOptions {
    /// Options with re-expression disabled.
    #[must_use]
    pub const fn historical(year_basis: YearBasis) -> Self {
        Self {
            year_basis,
            apply_reexpression: false,
        }
    }

    /// Options with re-expression enabled.
    #[must_use]
    pub const fn reexpressed(year_basis: YearBasis) -> Self {
        Self {
            year_basis,
            apply_reexpression: true,
        }
    }
}

impl Default for DepreciationOptions {
    fn default() -> Self {
        Self::reexpressed(YearBasis::Days365)
    }
}

/// Book value and accumulated depreciation at a whole-year offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Years since acquisition.
    pub year_offset: u32,
    /// Book value at this offset, never negative.
    pub book_value: Decimal,
    /// Accumulated depreciation, never above the adjusted purchase value.
    pub accumulated_depreciation: Decimal,
}

/// Outcome of a depreciation computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationResult {
    /// Historical purchase value as entered.
    pub purchase_value: Decimal,
    /// Acquisition date.
    pub acquisition_date: NaiveDate,
    /// Date the valuation refers to.
    pub evaluation_date: NaiveDate,
    /// Day-count basis used for elapsed years.
    pub year_basis: YearBasis,
    /// Useful life in years.
    pub useful_life_years: u32,
    /// Whole years elapsed, clamped to `[0, useful_life_years]`.
    pub elapsed_years: u32,
    /// Index at acquisition (absent without re-expression).
    pub index_at_acquisition: Option<Decimal>,
    /// Index at evaluation (absent without re-expression).
    pub index_at_evaluation: Option<Decimal>,
    /// `index_at_evaluation / index_at_acquisition`, or `1`.
    pub adjustment_factor: Decimal,
    /// Purchase value scaled by the adjustment factor.
    pub adjusted_purchase_value: Decimal,
    /// `adjusted_purchase_value / useful_life_years`.
    pub annual_depreciation: Decimal,
    /// Depreciation accumulated after `elapsed_years`.
    pub accumulated_depreciation: Decimal,
    /// Adjusted value less accumulated depreciation, floored at zero.
    pub book_value: Decimal,
    /// One point per year offset in `[0, useful_life_years]`.
    pub series: Vec<SeriesPoint>,
}

impl DepreciationResult {
    /// Returns true if the asset is fully depreciated at the evaluation date.
    #[must_use]
    pub fn is_fully_depreciated(&self) -> bool {
        self.elapsed_years == self.useful_life_years
    }

    /// Remaining whole years of useful life.
    #[must_use]
    pub fn remaining_years(&self) -> u32 {
        self.useful_life_years - self.elapsed_years
    }
}
