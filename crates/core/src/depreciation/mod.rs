//! Straight-line depreciation with optional UFV re-expression.

pub mod engine;
pub mod period;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::DepreciationEngine;
pub use period::{elapsed_years, fiscal_year_end};
pub use types::{AssetRecord, DepreciationOptions, DepreciationResult, SeriesPoint};
