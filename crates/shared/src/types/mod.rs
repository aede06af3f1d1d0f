//! Common types used across the application.

pub mod money;
pub mod year_basis;

pub use money::{Money, format_grouped};
pub use year_basis::YearBasis;
