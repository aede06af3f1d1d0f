//! Property-based tests for the depreciation engine.
//!
//! - Schedule conservation: accumulated + book = adjusted at every offset
//! - Schedule shape: life + 1 points, monotone, never negative
//! - Determinism
//! - Clamp boundaries

use chrono::{Days, NaiveDate};
use deprecia_shared::types::YearBasis;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::DepreciationEngine;
use super::types::DepreciationOptions;
use crate::error::DepreciationError;
use crate::index::{IndexPoint, IndexSeries};

/// Strategy to generate purchase values (0.01 to 10,000,000.00).
fn purchase_value() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate UFV values (1.00000 to 3.00000).
fn ufv_value() -> impl Strategy<Value = Decimal> {
    (100_000i64..=300_000i64).prop_map(|v| Decimal::new(v, 5))
}

fn year_basis() -> impl Strategy<Value = YearBasis> {
    prop_oneof![Just(YearBasis::Days365), Just(YearBasis::Days365_25)]
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2010, 1, 1).unwrap()
}

/// |a - b| <= 1e-9 * max(|b|, 1).
fn approx_eq(a: Decimal, b: Decimal) -> bool {
    let tolerance = dec!(0.000000001) * b.abs().max(Decimal::ONE);
    (a - b).abs() <= tolerance
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Accumulated + book equals the adjusted value at every offset.
    #[test]
    fn prop_schedule_conserves_value(
        value in purchase_value(),
        life in 1i64..=50,
        days in 0u64..20_000,
        ufv_start in ufv_value(),
        ufv_end in ufv_value(),
        basis in year_basis(),
    ) {
        let acquired = base_date();
        let evaluated = acquired + Days::new(days);
        let series = IndexSeries::new(vec![
            IndexPoint::new(acquired, ufv_start).unwrap(),
            IndexPoint::new(evaluated + Days::new(1), ufv_end).unwrap(),
        ]);

        let result = DepreciationEngine::compute(
            value,
            life,
            acquired,
            evaluated,
            Some(&series),
            DepreciationOptions::reexpressed(basis),
        )
        .unwrap();

        prop_assert!(approx_eq(
            result.accumulated_depreciation + result.book_value,
            result.adjusted_purchase_value
        ));
        for point in &result.series {
            prop_assert!(approx_eq(
                point.accumulated_depreciation + point.book_value,
                result.adjusted_purchase_value
            ));
        }
    }

    /// The schedule has life + 1 points, book falls and accumulated rises.
    #[test]
    fn prop_schedule_shape(
        value in purchase_value(),
        life in 1i64..=50,
    ) {
        let result = DepreciationEngine::compute(
            value,
            life,
            base_date(),
            base_date(),
            None,
            DepreciationOptions::historical(YearBasis::Days365),
        )
        .unwrap();

        prop_assert_eq!(result.series.len() as i64, life + 1);
        prop_assert_eq!(result.series[0].book_value, value);
        prop_assert_eq!(result.series[0].accumulated_depreciation, Decimal::ZERO);

        for pair in result.series.windows(2) {
            prop_assert!(pair[1].book_value < pair[0].book_value);
            prop_assert!(pair[1].accumulated_depreciation > pair[0].accumulated_depreciation);
            prop_assert_eq!(pair[1].year_offset, pair[0].year_offset + 1);
        }
        for point in &result.series {
            prop_assert!(point.book_value >= Decimal::ZERO);
            prop_assert!(point.accumulated_depreciation <= result.adjusted_purchase_value);
        }

        let last = result.series.last().unwrap();
        prop_assert!(approx_eq(last.book_value, Decimal::ZERO));
    }

    /// Identical inputs give identical results.
    #[test]
    fn prop_compute_is_deterministic(
        value in purchase_value(),
        life in 1i64..=50,
        days in 0u64..20_000,
        basis in year_basis(),
    ) {
        let evaluated = base_date() + Days::new(days);
        let options = DepreciationOptions::historical(basis);

        let first = DepreciationEngine::compute(value, life, base_date(), evaluated, None, options);
        let second = DepreciationEngine::compute(value, life, base_date(), evaluated, None, options);

        prop_assert_eq!(first, second);
    }

    /// Elapsed years always lie within [0, life].
    #[test]
    fn prop_elapsed_years_clamped(
        value in purchase_value(),
        life in 1i64..=50,
        days in -40_000i64..40_000,
        basis in year_basis(),
    ) {
        let evaluated = base_date() + chrono::Duration::days(days);
        let result = DepreciationEngine::compute(
            value,
            life,
            base_date(),
            evaluated,
            None,
            DepreciationOptions::historical(basis),
        )
        .unwrap();

        prop_assert!(i64::from(result.elapsed_years) <= life);
        if days < 0 {
            prop_assert_eq!(result.elapsed_years, 0);
            prop_assert_eq!(result.book_value, value);
        }
    }

    /// Evaluating far beyond the useful life yields a fully depreciated asset.
    #[test]
    fn prop_far_future_fully_depreciated(
        value in purchase_value(),
        life in 1i64..=50,
        extra_days in 0u64..5_000,
    ) {
        let evaluated = base_date() + Days::new(366 * 51 + extra_days);
        let result = DepreciationEngine::compute(
            value,
            life,
            base_date(),
            evaluated,
            None,
            DepreciationOptions::historical(YearBasis::Days365_25),
        )
        .unwrap();

        prop_assert_eq!(i64::from(result.elapsed_years), life);
        prop_assert!(approx_eq(result.book_value, Decimal::ZERO));
        prop_assert!(result.book_value >= Decimal::ZERO);
    }

    /// Non-positive useful life never computes.
    #[test]
    fn prop_non_positive_life_rejected(
        value in purchase_value(),
        life in -1_000i64..=0,
    ) {
        let result = DepreciationEngine::compute(
            value,
            life,
            base_date(),
            base_date(),
            None,
            DepreciationOptions::default(),
        );
        prop_assert_eq!(result, Err(DepreciationError::InvalidUsefulLife(life)));
    }

    /// Adjustment factor is the ratio of the two index values.
    #[test]
    fn prop_adjustment_factor_is_ratio(
        value in purchase_value(),
        ufv_start in ufv_value(),
        ufv_end in ufv_value(),
    ) {
        let acquired = base_date();
        let evaluated = acquired + Days::new(1_000);
        let series = IndexSeries::new(vec![
            IndexPoint::new(acquired, ufv_start).unwrap(),
            IndexPoint::new(evaluated, ufv_end).unwrap(),
        ]);

        let result = DepreciationEngine::compute(
            value,
            8,
            acquired,
            evaluated,
            Some(&series),
            DepreciationOptions::default(),
        )
        .unwrap();

        prop_assert_eq!(result.adjustment_factor, ufv_end / ufv_start);
        prop_assert_eq!(result.adjusted_purchase_value, value * (ufv_end / ufv_start));
    }
}
