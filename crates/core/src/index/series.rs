//! Index series types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lookup::nearest;
use crate::error::DepreciationError;

/// A published index value on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexPoint {
    /// Publication date.
    pub date: NaiveDate,
    /// Index value, always positive.
    pub value: Decimal,
}

impl IndexPoint {
    /// Creates an index point.
    ///
    /// # Errors
    ///
    /// Returns `DepreciationError::InvalidInput` if `value` is not positive.
    pub fn new(date: NaiveDate, value: Decimal) -> Result<Self, DepreciationError> {
        if value <= Decimal::ZERO {
            return Err(DepreciationError::InvalidInput(format!(
                "index value on {date} must be positive, got {value}"
            )));
        }
        Ok(Self { date, value })
    }
}

/// Read-only series of index points.
///
/// Points keep their insertion order; lookups do not assume the series is
/// sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSeries {
    points: Vec<IndexPoint>,
}

impl IndexSeries {
    /// Wraps already validated points.
    #[must_use]
    pub fn new(points: Vec<IndexPoint>) -> Self {
        Self { points }
    }

    /// Index value published closest to `date`.
    ///
    /// # Errors
    ///
    /// Returns `DepreciationError::EmptySeries` if the series has no points.
    pub fn nearest(&self, date: NaiveDate) -> Result<Decimal, DepreciationError> {
        nearest(&self.points, date)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest date covered.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.iter().map(|p| p.date).min()
    }

    /// Latest date covered.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.iter().map(|p| p.date).max()
    }

    /// Returns true if `date` lies within the published range.
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        match (self.first_date(), self.last_date()) {
            (Some(first), Some(last)) => first <= date && date <= last,
            _ => false,
        }
    }
}

impl FromIterator<IndexPoint> for IndexSeries {
    fn from_iter<I: IntoIterator<Item = IndexPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
