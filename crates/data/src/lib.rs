//! Reference data adapters for Deprecia.
//!
//! Reads the DS 24051 asset catalog and the published UFV series from CSV
//! files and hands the core already typed values. Column naming, text
//! encoding and date formats are dealt with here and nowhere else.

pub mod catalog;
pub mod error;
pub mod normalize;
pub mod ufv;

pub use catalog::{CatalogLoad, load_catalog, parse_catalog};
pub use error::{DataError, RowError};
pub use ufv::{UfvLoad, load_ufv_series, parse_ufv_series};
