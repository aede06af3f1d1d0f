//! Book value projection at arbitrary offsets.

pub mod closed_form;
pub mod trend;


pub use closed_form::{value_at_date, value_at_offset, year_offset};
pub use trend::LinearTrend;
