//! Core business logic for Deprecia.
//!
//! This crate contains pure calculation logic with ZERO file, network or
//! logging dependencies. Reference data (asset catalog, UFV series) is handed
//! in already parsed.
//!
//! # Modules
//!
//! - `catalog` - Asset types and the useful-life lookup contract
//! - `index` - UFV series and nearest-date lookup
//! - `depreciation` - Straight-line depreciation with optional re-expression
//! - `projection` - Book value at arbitrary offsets and trend fit
//! - `batch` - Independent computation of up to five assets

pub mod batch;
pub mod catalog;
pub mod depreciation;
pub mod error;
pub mod index;
pub mod projection;

pub use error::DepreciationError;
