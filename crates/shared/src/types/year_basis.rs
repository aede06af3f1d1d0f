//! Day-count basis used to turn elapsed days into elapsed years.

use serde::{Deserialize, Serialize};

/// Length of a depreciation year in days.
///
/// `Days365` truncates on a plain 365-day year. `Days365_25` smooths leap
/// years with a 365.25-day year. Both are in use for DS 24051 schedules, so
/// the choice is always explicit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearBasis {
    /// 365-day year.
    #[default]
    Days365,
    /// 365.25-day year.
    #[serde(rename = "days365_25")]
    Days365_25,
}

impl YearBasis {
    /// Whole years contained in `days`, floored toward negative infinity.
    ///
    /// Integer-only: a 365.25-day year is evaluated as `4 * days / 1461`.
    #[must_use]
    pub const fn whole_years(self, days: i64) -> i64 {
        match self {
            Self::Days365 => days.div_euclid(365),
            Self::Days365_25 => days.saturating_mul(4).div_euclid(1461),
        }
    }

    /// Numerator and denominator of the year length in days (`365/1`, `1461/4`).
    #[must_use]
    pub const fn days_per_year_ratio(self) -> (i64, i64) {
        match self {
            Self::Days365 => (365, 1),
            Self::Days365_25 => (1461, 4),
        }
    }
}

impl std::fmt::Display for YearBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Days365 => write!(f, "365"),
            Self::Days365_25 => write!(f, "365.25"),
        }
    }
}

impl std::str::FromStr for YearBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "365" | "days365" => Ok(Self::Days365),
            "365.25" | "days365_25" => Ok(Self::Days365_25),
            _ => Err(format!("Unknown year basis: {s}")),
        }
    }
}
