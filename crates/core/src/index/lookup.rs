//! Nearest-date index lookup.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::series::IndexPoint;
use crate::error::DepreciationError;

/// Returns the value of the point whose date is closest to `target`.
///
/// Distance is the absolute difference in days. Ties go to the point that
/// appears first in `points`. No interpolation between neighbours.
///
/// # Errors
///
/// Returns `DepreciationError::EmptySeries` if `points` is empty.
pub fn nearest(points: &[IndexPoint], target: NaiveDate) -> Result<Decimal, DepreciationError> {
    points
        .iter()
        .map(|p| ((p.date - target).num_days().unsigned_abs(), p.value))
        .reduce(|best, candidate| if candidate.0 < best.0 { candidate } else { best })
        .map(|(_, value)| value)
        .ok_or(DepreciationError::EmptySeries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn point(y: i32, m: u32, d: u32, value: Decimal) -> IndexPoint {
        IndexPoint::new(date(y, m, d), value).unwrap()
    }

    #[test]
    fn test_exact_match() {
        let points = vec![
            point(2024, 1, 1, dec!(2.47000)),
            point(2024, 1, 2, dec!(2.47010)),
            point(2024, 1, 3, dec!(2.47020)),
        ];
        assert_eq!(nearest(&points, date(2024, 1, 2)), Ok(dec!(2.47010)));
    }

    #[test]
    fn test_closest_without_interpolation() {
        let points = vec![point(2024, 1, 1, dec!(2.0)), point(2024, 1, 31, dec!(3.0))];
        assert_eq!(nearest(&points, date(2024, 1, 10)), Ok(dec!(2.0)));
        assert_eq!(nearest(&points, date(2024, 1, 20)), Ok(dec!(3.0)));
    }

    #[test]
    fn test_tie_goes_to_first_in_series_order() {
        // 2024-01-11 is 10 days from both points.
        let points = vec![point(2024, 1, 21, dec!(3.0)), point(2024, 1, 1, dec!(2.0))];
        assert_eq!(nearest(&points, date(2024, 1, 11)), Ok(dec!(3.0)));

        let reversed = vec![point(2024, 1, 1, dec!(2.0)), point(2024, 1, 21, dec!(3.0))];
        assert_eq!(nearest(&reversed, date(2024, 1, 11)), Ok(dec!(2.0)));
    }

    #[test]
    fn test_target_outside_range_uses_edge() {
        let points = vec![point(2020, 1, 1, dec!(2.33)), point(2024, 12, 31, dec!(2.57))];
        assert_eq!(nearest(&points, date(1999, 5, 5)), Ok(dec!(2.33)));
        assert_eq!(nearest(&points, date(2030, 5, 5)), Ok(dec!(2.57)));
    }

    #[test]
    fn test_duplicate_dates_first_wins() {
        let points = vec![point(2024, 1, 1, dec!(2.1)), point(2024, 1, 1, dec!(2.2))];
        assert_eq!(nearest(&points, date(2024, 1, 1)), Ok(dec!(2.1)));
    }

    #[test]
    fn test_empty_series_fails() {
        assert_eq!(
            nearest(&[], date(2024, 1, 1)),
            Err(DepreciationError::EmptySeries)
        );
    }
}
