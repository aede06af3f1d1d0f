//! Calendar helpers for valuation dates.

use chrono::{Datelike, NaiveDate};
use deprecia_shared::types::YearBasis;

/// Whole years between two dates, floored.
///
/// Negative when `evaluation` precedes `acquisition`; callers clamp.
#[must_use]
pub fn elapsed_years(acquisition: NaiveDate, evaluation: NaiveDate, basis: YearBasis) -> i64 {
    basis.whole_years((evaluation - acquisition).num_days())
}

/// December 31 of the year containing `date`, the closing date of the
/// accounting period.
#[must_use]
pub fn fiscal_year_end(date: NaiveDate) -> NaiveDate {
    // Dec 31 exists for every year chrono can represent.
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_elapsed_years_365() {
        let acquired = date(2020, 3, 1);
        assert_eq!(elapsed_years(acquired, date(2021, 2, 28), YearBasis::Days365), 0);
        // 2020 is a leap year: 2020-03-01 .. 2021-03-01 is 365 days.
        assert_eq!(elapsed_years(acquired, date(2021, 3, 1), YearBasis::Days365), 1);
        assert_eq!(elapsed_years(acquired, date(2025, 3, 1), YearBasis::Days365), 5);
    }

    #[test]
    fn test_elapsed_years_365_25_lags_on_leap_years() {
        // 2020-01-01 .. 2024-01-01 = 1461 days.
        let acquired = date(2020, 1, 1);
        assert_eq!(elapsed_years(acquired, date(2024, 1, 1), YearBasis::Days365_25), 4);
        assert_eq!(elapsed_years(acquired, date(2023, 12, 31), YearBasis::Days365_25), 3);
        // 2021-01-01 is 366 days later: a full 365-day year and a full 365.25-day year.
        assert_eq!(elapsed_years(acquired, date(2021, 1, 1), YearBasis::Days365_25), 1);
        // 2020-12-31 is 365 days later: one 365-day year but not one 365.25-day year.
        assert_eq!(elapsed_years(acquired, date(2020, 12, 31), YearBasis::Days365), 1);
        assert_eq!(elapsed_years(acquired, date(2020, 12, 31), YearBasis::Days365_25), 0);
    }

    #[test]
    fn test_elapsed_years_negative_when_acquired_later() {
        assert_eq!(
            elapsed_years(date(2025, 1, 1), date(2024, 12, 31), YearBasis::Days365),
            -1
        );
    }

    #[test]
    fn test_fiscal_year_end() {
        assert_eq!(fiscal_year_end(date(2026, 10, 18)), date(2026, 12, 31));
        assert_eq!(fiscal_year_end(date(2024, 12, 31)), date(2024, 12, 31));
        assert_eq!(fiscal_year_end(date(2024, 1, 1)), date(2024, 12, 31));
    }
}
