//! UFV index series and nearest-date lookup.

pub mod lookup;
pub mod series;

#[cfg(test)]
mod lookup_props;

pub use lookup::nearest;
pub use series::{IndexPoint, IndexSeries};
