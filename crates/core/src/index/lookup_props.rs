//! Property-based tests for the nearest-date lookup.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::lookup::nearest;
use super::series::IndexPoint;

/// Strategy to generate a series of 1-50 points with day offsets from 2000-01-01.
fn series_strategy() -> impl Strategy<Value = Vec<IndexPoint>> {
    prop::collection::vec((0u64..10_000, 1i64..10_000_000), 1..50).prop_map(|raw| {
        let base = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        raw.into_iter()
            .map(|(offset, value)| {
                IndexPoint::new(base + Days::new(offset), Decimal::new(value, 5)).unwrap()
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The returned value belongs to a point at minimal distance.
    #[test]
    fn prop_nearest_is_minimal_distance(
        points in series_strategy(),
        target_offset in 0u64..12_000,
    ) {
        let target = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Days::new(target_offset);
        let value = nearest(&points, target).unwrap();

        let min_distance = points
            .iter()
            .map(|p| (p.date - target).num_days().abs())
            .min()
            .unwrap();
        let first_at_min = points
            .iter()
            .find(|p| (p.date - target).num_days().abs() == min_distance)
            .unwrap();

        prop_assert_eq!(value, first_at_min.value);
    }

    /// Lookup of a date present in the series returns the first point on that date.
    #[test]
    fn prop_exact_date_is_returned(
        points in series_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let chosen = points[pick.index(points.len())];
        let expected = points.iter().find(|p| p.date == chosen.date).unwrap().value;
        prop_assert_eq!(nearest(&points, chosen.date).unwrap(), expected);
    }
}
